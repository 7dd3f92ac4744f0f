//! Stock levels.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::products::records::ProductRecord;

/// Quantities below this need restocking.
pub const RESTOCK_BELOW: i64 = 5;

/// Quantities below this raise a low-stock alert.
pub const LOW_STOCK_BELOW: i64 = 15;

/// Presentation bucket for a product's stock quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Restock,
    FairStock,
    Sufficient,
}

impl StockLevel {
    #[must_use]
    pub const fn from_quantity(quantity: i64) -> Self {
        if quantity < RESTOCK_BELOW {
            Self::Restock
        } else if quantity < LOW_STOCK_BELOW {
            Self::FairStock
        } else {
            Self::Sufficient
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restock => "Restock",
            Self::FairStock => "Fair Stock",
            Self::Sufficient => "Sufficient Stock",
        }
    }

    #[must_use]
    pub const fn is_low(self) -> bool {
        !matches!(self, Self::Sufficient)
    }
}

impl Display for StockLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Products that belong in the low-stock alert.
pub fn low_stock(products: &[ProductRecord]) -> impl Iterator<Item = &ProductRecord> {
    products
        .iter()
        .filter(|product| product.stock_level().is_low())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_thresholds() {
        assert_eq!(StockLevel::from_quantity(3).label(), "Restock");
        assert_eq!(StockLevel::from_quantity(10).label(), "Fair Stock");
        assert_eq!(StockLevel::from_quantity(20).label(), "Sufficient Stock");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(StockLevel::from_quantity(4), StockLevel::Restock);
        assert_eq!(StockLevel::from_quantity(5), StockLevel::FairStock);
        assert_eq!(StockLevel::from_quantity(14), StockLevel::FairStock);
        assert_eq!(StockLevel::from_quantity(15), StockLevel::Sufficient);
    }

    #[test]
    fn negative_quantities_need_restocking() {
        assert_eq!(StockLevel::from_quantity(-2), StockLevel::Restock);
    }

    #[test]
    fn only_sufficient_stock_is_not_low() {
        assert!(StockLevel::Restock.is_low());
        assert!(StockLevel::FairStock.is_low());
        assert!(!StockLevel::Sufficient.is_low());
    }
}
