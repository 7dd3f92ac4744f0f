//! Product Records

use rust_decimal::Decimal;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    domain::{categories::records::CategoryId, products::stock::StockLevel},
    ids::TypedId,
    platform::null_as_default,
};

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product variants, e.g. sizes or colours.
pub type Variants = SmallVec<[String; 3]>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "product_id")]
    pub id: ProductId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub selling_price: Decimal,

    #[serde(default, deserialize_with = "null_as_default")]
    pub variant: Variants,

    #[serde(default)]
    pub category: Option<CategoryId>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: i64,
}

impl ProductRecord {
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.stock_quantity)
    }
}
