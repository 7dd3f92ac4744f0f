//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopdesk_app::domain::products::{listing::ProductListing, records::ProductRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: i64,

    pub name: String,

    /// Decimal selling price, as a string to keep it exact
    pub selling_price: String,

    pub variant: Vec<String>,

    /// Category id, if any
    pub category: Option<i64>,

    pub image_url: Option<String>,

    pub description: Option<String>,

    pub stock_quantity: i64,

    /// "Restock", "Fair Stock" or "Sufficient Stock"
    pub stock_level: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            stock_level: product.stock_level().to_string(),
            id: product.id.get(),
            name: product.name,
            selling_price: product.selling_price.to_string(),
            variant: product.variant.into_vec(),
            category: product.category.map(i64::from),
            image_url: product.image_url,
            description: product.description,
            stock_quantity: product.stock_quantity,
        }
    }
}

/// A product row on the products page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductListingResponse {
    pub product: ProductResponse,

    /// Whether the product is in the featured collection
    pub featured: bool,

    /// Whether the product is in the popular collection
    pub popular: bool,
}

impl From<ProductListing> for ProductListingResponse {
    fn from(listing: ProductListing) -> Self {
        Self {
            product: listing.product.into(),
            featured: listing.featured,
            popular: listing.popular,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub products: Vec<ProductListingResponse>,

    /// Every product below the low-stock threshold, regardless of search
    pub low_stock: Vec<ProductResponse>,
}
