//! Products

mod errors;
mod forms;
mod handlers;
mod models;

pub(crate) use handlers::*;
pub(crate) use models::format_price;
