//! Order Status Handlers

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use shopdesk_app::domain::orders::{
    OrdersServiceError,
    status::{OrderStatus, PaymentStatus},
};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, StatusRequest},
    },
    state::State,
};

/// Set Order Status
///
/// Accepts Pending, Processing, Shipped, Delivered or Cancelled. Only
/// `order_status` is written.
#[endpoint(
    tags("orders"),
    summary = "Set Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "orders.set_order_status", skip(order, json, depot), err)]
pub(crate) async fn order_status(
    order: PathParam<i64>,
    json: JsonBody<StatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let order = order.into_inner();

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(|source| into_status_error(OrdersServiceError::from(source)))?;

    let updated = state
        .app
        .orders
        .set_order_status(session, order.into(), status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_id = order, %status, "set order status");

    Ok(Json(updated.into()))
}

/// Set Payment Status
///
/// Accepts Unpaid, Paid or Refunded. Only `payment_status` is written.
#[endpoint(
    tags("orders"),
    summary = "Set Payment Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "orders.set_payment_status", skip(order, json, depot), err)]
pub(crate) async fn payment_status(
    order: PathParam<i64>,
    json: JsonBody<StatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let order = order.into_inner();

    let status = json
        .into_inner()
        .status
        .parse::<PaymentStatus>()
        .map_err(|source| into_status_error(OrdersServiceError::from(source)))?;

    let updated = state
        .app
        .orders
        .set_payment_status(session, order.into(), status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_id = order, %status, "set payment status");

    Ok(Json(updated.into()))
}
