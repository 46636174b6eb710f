//! Storefront Domain Concerns

pub mod baskets;
pub mod products;
pub mod users;
