//! State

use std::sync::Arc;

use eshop_app::context::AppContext;

use crate::views::ViewRenderer;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) views: Arc<dyn ViewRenderer>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, views: Arc<dyn ViewRenderer>) -> Self {
        Self { app, views }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, views: Arc<dyn ViewRenderer>) -> Arc<Self> {
        Arc::new(Self::new(app, views))
    }
}
