//! Collection Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;

use crate::{
    domain::products::records::{ProductId, ProductRecord},
    platform::Table,
};

/// A tag table holding a set of product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Featured,
    Popular,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Featured, Self::Popular];

    #[must_use]
    pub const fn table(self) -> Table {
        match self {
            Self::Featured => Table::FeaturedProducts,
            Self::Popular => Table::PopularProducts,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Popular => "popular",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A join row with its product embedded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionEntry {
    pub product_id: ProductId,

    #[serde(rename = "products")]
    pub product: ProductRecord,
}

/// Outcome of a membership toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Added,
    Removed,
}

impl Membership {
    #[must_use]
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Added)
    }
}
