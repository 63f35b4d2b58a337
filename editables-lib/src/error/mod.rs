//! Error types

mod config;
mod http;
mod load;
mod render;

pub use config::*;
pub use http::*;
pub use load::*;
pub use render::*;
