//! Order and payment statuses.
//!
//! Both are plain enum-valued columns. Any status may be set from any other;
//! there is no transition table.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownStatus {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStatus {
                kind: "order status",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Unpaid, Self::Paid, Self::Refunded];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Refunded => "Refunded",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStatus {
                kind: "payment status",
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_any_case() -> TestResult {
        assert_eq!("shipped".parse::<OrderStatus>()?, OrderStatus::Shipped);
        assert_eq!(" PAID ".parse::<PaymentStatus>()?, PaymentStatus::Paid);

        Ok(())
    }

    #[test]
    fn unknown_value_names_the_column() {
        let error = "lost".parse::<OrderStatus>().err();

        assert_eq!(
            error.map(|error| error.to_string()).as_deref(),
            Some("unknown order status `lost`")
        );
    }

    #[test]
    fn serializes_as_stored_label() -> TestResult {
        assert_eq!(serde_json::to_value(OrderStatus::Delivered)?, json!("Delivered"));
        assert_eq!(serde_json::to_value(PaymentStatus::Refunded)?, json!("Refunded"));

        Ok(())
    }

    #[test]
    fn display_round_trips_every_variant() -> TestResult {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }
}
