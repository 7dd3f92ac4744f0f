//! Terminal tables.

use std::{
    io::{self, Write},
    ops::Range,
};

use shopdesk_app::domain::{
    dashboard::metrics::DashboardMetrics,
    orders::records::OrderRecord,
    products::listing::ProductListing,
    users::records::UserRecord,
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};

fn write_table(
    out: &mut impl Write,
    builder: Builder,
    right_aligned: Option<Columns<Range<usize>>>,
) -> io::Result<()> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();

    table.with(theme);
    table.modify(Rows::first(), Alignment::center());

    if let Some(columns) = right_aligned {
        table.modify(columns, Alignment::right());
    }

    writeln!(out, "{table}")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "" }
}

pub(crate) fn dashboard(out: &mut impl Write, metrics: &DashboardMetrics) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Metric", "Value"]);

    for point in metrics.series() {
        builder.push_record([point.label.to_string(), point.value.to_string()]);
    }

    write_table(out, builder, Some(Columns::new(1..2)))
}

pub(crate) fn products(out: &mut impl Write, listings: &[ProductListing]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record([
        "ID", "Name", "Price", "Variants", "Stock", "Status", "Featured", "Popular",
    ]);

    for listing in listings {
        let product = &listing.product;

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.selling_price.to_string(),
            product.variant.join(", "),
            product.stock_quantity.to_string(),
            listing.stock.to_string(),
            yes_no(listing.featured).to_string(),
            yes_no(listing.popular).to_string(),
        ]);
    }

    write_table(out, builder, Some(Columns::new(2..3)))
}

pub(crate) fn orders(out: &mut impl Write, orders: &[OrderRecord]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "User", "Total", "Status", "Payment", "Tracking"]);

    for order in orders {
        builder.push_record([
            order.id.to_string(),
            order.user_id.map(|user| user.to_string()).unwrap_or_default(),
            order.total_amount.to_string(),
            order.order_status.to_string(),
            order.payment_status.to_string(),
            order.tracking_number.clone().unwrap_or_default(),
        ]);
    }

    write_table(out, builder, Some(Columns::new(2..3)))
}

pub(crate) fn users(out: &mut impl Write, users: &[UserRecord]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Email", "Phone"]);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            user.full_name(),
            user.email.clone().unwrap_or_default(),
            user.phone.clone().unwrap_or_default(),
        ]);
    }

    write_table(out, builder, None)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shopdesk_app::domain::users::records::UserId;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn dashboard_lists_every_series_point() -> TestResult {
        let mut out = Vec::new();

        dashboard(
            &mut out,
            &DashboardMetrics {
                products: 4,
                users: 2,
                orders: 3,
                sales: Decimal::new(12_050, 2),
            },
        )?;

        let rendered = String::from_utf8(out)?;

        for label in ["Products", "Users", "Orders", "Sales", "120.50"] {
            assert!(rendered.contains(label), "missing {label} in:\n{rendered}");
        }

        Ok(())
    }

    #[test]
    fn users_table_shows_full_name() -> TestResult {
        let mut out = Vec::new();

        users(
            &mut out,
            &[UserRecord {
                id: UserId::new(9),
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                email: Some("ada@example.test".to_string()),
                phone: None,
            }],
        )?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("ada@example.test"));

        Ok(())
    }
}
