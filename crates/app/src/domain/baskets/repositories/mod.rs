//! Basket Repositories

mod baskets;
mod items;

pub(crate) use baskets::PgBasketsRepository;
pub(crate) use items::PgBasketItemsRepository;
