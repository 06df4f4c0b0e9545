//! Shared foundation for the postpulse workspace: error type, core post
//! records, timestamp helpers and logging bootstrap.

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use error::{PulseError, Result};
pub use types::{Post, RawPost, Timestamp};
