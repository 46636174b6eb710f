//! Basket Handlers

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;

pub(crate) const BASKET_PATH: &str = "/basket";
