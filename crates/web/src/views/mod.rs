//! Server-rendered views.
//!
//! Handlers build a [`View`] (a template name plus model attributes) and hand it
//! to [`render`], which adds the principal and CSRF token before rendering.

mod tera_views;

use salvo::{csrf::CsrfDepotExt, prelude::*};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub(crate) use tera_views::TeraViews;

use crate::extensions::*;

pub(crate) const PRINCIPAL_ATTRIBUTE: &str = "principal";
pub(crate) const CSRF_TOKEN_ATTRIBUTE: &str = "csrf_token";

#[derive(Debug, Error)]
pub(crate) enum ViewError {
    #[error("failed to serialize model attribute \"{0}\"")]
    Attribute(&'static str, #[source] serde_json::Error),

    #[error("failed to render template")]
    Template(#[from] tera::Error),

    #[error("failed to encode view")]
    Encode(#[from] serde_json::Error),
}

/// A named view and its model attributes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct View {
    pub(crate) name: &'static str,
    pub(crate) model: Map<String, Value>,
}

impl View {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Map::new(),
        }
    }

    /// Add a model attribute.
    pub(crate) fn with<T: Serialize>(
        mut self,
        attribute: &'static str,
        value: &T,
    ) -> Result<Self, ViewError> {
        let value =
            serde_json::to_value(value).map_err(|error| ViewError::Attribute(attribute, error))?;

        self.model.insert(attribute.to_string(), value);

        Ok(self)
    }
}

/// Turns a [`View`] into an HTML document.
pub(crate) trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, ViewError>;
}

/// Render `view` into the response with status 200.
pub(crate) fn render(depot: &Depot, res: &mut Response, mut view: View) -> Result<(), StatusError> {
    let state = depot.state()?;

    view.model.insert(
        PRINCIPAL_ATTRIBUTE.to_string(),
        depot
            .principal()
            .map_or(Value::Null, |principal| principal.to_model()),
    );
    view.model.insert(
        CSRF_TOKEN_ATTRIBUTE.to_string(),
        depot
            .csrf_token()
            .map_or(Value::Null, |token| Value::String(token.to_string())),
    );

    let html = state
        .views
        .render(&view)
        .or_500(&format!("failed to render view \"{}\"", view.name))?;

    res.status_code(StatusCode::OK);
    res.render(Text::Html(html));

    Ok(())
}
