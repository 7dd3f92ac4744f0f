//! Test Helpers

use serde_json::json;

use crate::{
    domain::{
        orders::records::OrderRecord,
        products::{ProductsService, ProductsServiceError, data::ProductForm, records::ProductRecord},
        users::records::{UserId, UserRecord},
    },
    platform::{PlatformError, Table, TableStore, decode_row},
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    stock_quantity: i64,
) -> Result<ProductRecord, ProductsServiceError> {
    let draft = ProductForm {
        name: name.to_string(),
        selling_price: "100".to_string(),
        stock_quantity: stock_quantity.to_string(),
        ..ProductForm::default()
    }
    .parse()?;

    ctx.products
        .create_product(&ctx.session, draft, None)
        .await
}

/// Users are created by the storefront, so tests write them straight to the table.
pub(crate) async fn create_user(
    ctx: &TestContext,
    first_name: &str,
    last_name: &str,
) -> Result<UserRecord, PlatformError> {
    let email = format!("{}@example.test", first_name.to_lowercase());

    let row = ctx
        .tables
        .insert(
            ctx.session.token(),
            Table::Users,
            json!({
                "first_name": first_name,
                "last_name": last_name,
                "email": email,
                "phone": null,
            }),
        )
        .await?;

    decode_row(row)
}

pub(crate) async fn create_order(
    ctx: &TestContext,
    user: Option<UserId>,
    total_amount: &str,
    tracking_number: &str,
) -> Result<OrderRecord, PlatformError> {
    let row = ctx
        .tables
        .insert(
            ctx.session.token(),
            Table::Orders,
            json!({
                "user_id": user,
                "total_amount": total_amount,
                "order_status": "Pending",
                "payment_status": "Unpaid",
                "tracking_number": tracking_number,
            }),
        )
        .await?;

    decode_row(row)
}
