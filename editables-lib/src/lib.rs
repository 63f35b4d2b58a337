//! Remote data to table binding
//!
//! Fetches JSON from an endpoint, extracts and filters it against a declared
//! field schema, renders it into a table surface and reports the outcome as
//! a lifecycle notification.

pub mod error;
pub mod events;
pub mod http;
pub mod projection;
pub mod table;
pub mod validator;

mod editables;
mod field;
mod options;
mod payload;
mod source;

pub use editables::*;
pub use events::Event;
pub use events::EventKind;
pub use events::ListenerId;
pub use field::*;
pub use options::*;
pub use payload::*;
pub use source::*;
