//! Products Data

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    categories::records::CategoryId,
    products::{ProductsServiceError, records::Variants},
};

/// Product fields exactly as typed into the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub selling_price: String,
    /// Comma-separated variants.
    pub variant: String,
    pub category: String,
    pub description: String,
    pub stock_quantity: String,
}

impl ProductForm {
    /// Parse the form into a row payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidPrice`] when the price is not a decimal
    /// number. Every other field has a lenient fallback.
    pub fn parse(&self) -> Result<ProductDraft, ProductsServiceError> {
        let selling_price = Decimal::from_str(self.selling_price.trim())?;

        let variant = self
            .variant
            .split(',')
            .map(str::trim)
            .filter(|variant| !variant.is_empty())
            .map(str::to_string)
            .collect();

        let category = self.category.parse::<CategoryId>().ok();

        let description = Some(self.description.trim())
            .filter(|description| !description.is_empty())
            .map(str::to_string);

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            selling_price,
            variant,
            category,
            image_url: None,
            description,
            stock_quantity: leading_integer(&self.stock_quantity).unwrap_or(0),
        })
    }
}

/// Row payload for inserting or updating a product.
///
/// `image_url` is only written when set, so an update without a new image
/// keeps the stored one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub selling_price: Decimal,
    pub variant: Variants,
    pub category: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub stock_quantity: i64,
}

/// Integer prefix of `value`, so `"12 units"` reads as 12.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();

    let sign_len = usize::from(value.starts_with(['-', '+']));

    let digits_len = value
        .get(sign_len..)?
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    value.get(..sign_len + digits_len)?.parse().ok()
}
