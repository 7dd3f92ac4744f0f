//! Remote tables.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Tables exposed by the remote table API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Products,
    Categories,
    Users,
    Orders,
    FeaturedProducts,
    PopularProducts,
}

impl Table {
    pub const ALL: [Self; 6] = [
        Self::Products,
        Self::Categories,
        Self::Users,
        Self::Orders,
        Self::FeaturedProducts,
        Self::PopularProducts,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Users => "users",
            Self::Orders => "orders",
            Self::FeaturedProducts => "featured_products",
            Self::PopularProducts => "popular_products",
        }
    }

    #[must_use]
    pub const fn primary_key(self) -> &'static str {
        match self {
            Self::Products | Self::FeaturedProducts | Self::PopularProducts => "product_id",
            Self::Categories => "category_id",
            Self::Users => "user_id",
            Self::Orders => "order_id",
        }
    }

    /// Foreign key column and the table it points at, if any.
    ///
    /// `orders.user_id` carries no constraint, so removing a user leaves
    /// their orders in place.
    #[must_use]
    pub const fn reference(self) -> Option<(&'static str, Self)> {
        match self {
            Self::Products => Some(("category", Self::Categories)),
            Self::FeaturedProducts | Self::PopularProducts => Some(("product_id", Self::Products)),
            Self::Categories | Self::Users | Self::Orders => None,
        }
    }

    /// Tables whose cached listings embed rows of this table.
    #[must_use]
    pub const fn dependents(self) -> &'static [Self] {
        match self {
            Self::Products => &[Self::FeaturedProducts, Self::PopularProducts],
            Self::Categories
            | Self::Users
            | Self::Orders
            | Self::FeaturedProducts
            | Self::PopularProducts => &[],
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
