mod db;

pub(crate) use context::{TestContext, new_product};
