//! Order Handlers

pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod status;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shopdesk_app::domain::orders::records::{OrderId, OrderRecord};

    pub(super) fn make_order(id: i64, tracking_number: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(id),
            user_id: None,
            total_amount: Decimal::new(1_999, 2),
            order_status: Default::default(),
            payment_status: Default::default(),
            tracking_number: Some(tracking_number.to_string()),
        }
    }
}
