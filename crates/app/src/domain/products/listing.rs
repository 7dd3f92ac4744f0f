//! Product listings: search and collection flags.

use rustc_hash::FxHashSet;

use crate::domain::products::{
    records::{ProductId, ProductRecord},
    stock::StockLevel,
};

/// A product row as shown on the products page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub product: ProductRecord,
    pub stock: StockLevel,
    pub featured: bool,
    pub popular: bool,
}

/// Case-insensitive substring match on the product name. An empty term matches everything.
#[must_use]
pub fn matches_search(product: &ProductRecord, term: &str) -> bool {
    product
        .name
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Products whose name contains `term`, in their original order.
#[must_use]
pub fn search_products(products: Vec<ProductRecord>, term: &str) -> Vec<ProductRecord> {
    products
        .into_iter()
        .filter(|product| matches_search(product, term))
        .collect()
}

#[must_use]
pub fn build_listings(
    products: Vec<ProductRecord>,
    featured: &FxHashSet<ProductId>,
    popular: &FxHashSet<ProductId>,
) -> Vec<ProductListing> {
    products
        .into_iter()
        .map(|product| ProductListing {
            stock: product.stock_level(),
            featured: featured.contains(&product.id),
            popular: popular.contains(&product.id),
            product,
        })
        .collect()
}
