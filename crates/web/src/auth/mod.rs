//! Sign in and sign out

mod handlers;

pub(crate) use handlers::*;
