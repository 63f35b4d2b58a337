//! Single-shot HTTP transport

mod body;
mod client;

pub use body::*;
pub use client::*;
