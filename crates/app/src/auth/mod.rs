//! Authentication

mod errors;
mod password;
mod service;

pub use errors::*;
pub use password::*;
pub use service::*;
