//! Tera-backed views.

use tera::{Context, Tera};

use super::{View, ViewError, ViewRenderer};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("index.html", include_str!("templates/index.html")),
    ("createProduct.html", include_str!("templates/createProduct.html")),
    ("product.html", include_str!("templates/product.html")),
    ("basket.html", include_str!("templates/basket.html")),
    ("login.html", include_str!("templates/login.html")),
];

/// Templates embedded in the binary and parsed once at startup.
#[derive(Debug)]
pub(crate) struct TeraViews {
    tera: Tera,
}

impl TeraViews {
    pub(crate) fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();

        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        Ok(Self { tera })
    }
}

impl ViewRenderer for TeraViews {
    fn render(&self, view: &View) -> Result<String, ViewError> {
        let context = Context::from_value(serde_json::Value::Object(view.model.clone()))?;

        Ok(self.tera.render(&format!("{}.html", view.name), &context)?)
    }
}
