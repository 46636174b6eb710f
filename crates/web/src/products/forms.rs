//! Product creation form.

use std::{collections::BTreeMap, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::Request;
use serde::{Deserialize, Serialize};
use tracing::warn;

use eshop_app::domain::products::{data::NewProduct, records::ProductUuid};

/// Largest storable price in minor units (the column is a signed 64-bit integer).
const MAX_PRICE_MINOR: u64 = i64::MAX.unsigned_abs();

/// Image types accepted for upload and served inline. SVG is excluded.
const RASTER_IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Field name → message for every failed check.
pub(crate) type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Raw text fields as submitted, echoed back when re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
}

/// The uploaded image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Read the form fields and image from a multipart or urlencoded body. A body
/// that is not form data reads as an empty form.
pub(crate) async fn read_product_form(
    req: &mut Request,
) -> Result<(ProductForm, Option<ImageUpload>), std::io::Error> {
    let data = match req.form_data().await {
        Ok(data) => data,
        Err(source) => {
            warn!("could not parse product form body: {source}");

            return Ok((ProductForm::default(), None));
        }
    };

    let field = |name: &str| data.fields.get(name).cloned().unwrap_or_default();

    let form = ProductForm {
        name: field("name"),
        description: field("description"),
        category: field("category"),
        price: field("price"),
    };

    let image = match data.files.get("image") {
        Some(file) => Some(ImageUpload {
            bytes: tokio::fs::read(file.path()).await?,
            content_type: file.content_type().map(|mime| mime.to_string()),
        }),
        None => None,
    };

    Ok((form, image))
}

impl ProductForm {
    /// Validate every field and build the product to create.
    pub(crate) fn validate(
        &self,
        uuid: ProductUuid,
        image: Option<ImageUpload>,
    ) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required(&self.name, "name", "Name is required.", &mut errors);
        let description = required(
            &self.description,
            "description",
            "Description is required.",
            &mut errors,
        );
        let category = required(&self.category, "category", "Category is required.", &mut errors);

        let price = match parse_price(&self.price) {
            Ok(price) => Some(price),
            Err(message) => {
                errors.insert("price", message);
                None
            }
        };

        let image = match validate_image(image) {
            Ok(image) => Some(image),
            Err(message) => {
                errors.insert("image", message);
                None
            }
        };

        match (name, description, category, price, image) {
            (
                Some(name),
                Some(description),
                Some(category),
                Some(price),
                Some((image, image_content_type)),
            ) => Ok(NewProduct {
                uuid,
                name,
                description,
                category,
                price,
                image,
                image_content_type,
            }),
            _ => Err(errors),
        }
    }
}

fn required(
    value: &str,
    field: &'static str,
    message: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.insert(field, message);
        return None;
    }

    Some(trimmed.to_string())
}

/// Parse a decimal price into minor units.
fn parse_price(value: &str) -> Result<u64, &'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Err("Price is required.");
    }

    let price = Decimal::from_str(value).map_err(|_error| "Price must be a number.")?;

    if price <= Decimal::ZERO {
        return Err("Price must be greater than zero.");
    }

    if price.normalize().scale() > 2 {
        return Err("Price can have at most two decimal places.");
    }

    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_u64())
        .filter(|minor| *minor <= MAX_PRICE_MINOR)
        .ok_or("Price is too large.")
}

/// The canonical raster type for `content_type`, ignoring case and parameters.
pub(crate) fn raster_image_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();

    RASTER_IMAGE_TYPES
        .into_iter()
        .find(|accepted| accepted.eq_ignore_ascii_case(essence))
}

fn validate_image(image: Option<ImageUpload>) -> Result<(Vec<u8>, String), &'static str> {
    let Some(image) = image.filter(|image| !image.bytes.is_empty()) else {
        return Err("Image is required.");
    };

    match image.content_type.as_deref().and_then(raster_image_type) {
        Some(content_type) => Ok((image.bytes, content_type.to_string())),
        None => Err("Image must be a PNG, JPEG, GIF or WebP file."),
    }
}
