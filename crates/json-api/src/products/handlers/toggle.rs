//! Collection Toggle Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopdesk_app::domain::collections::records::Collection;

use crate::{
    collections::{errors::into_status_error, models::MembershipResponse},
    extensions::*,
    state::State,
};

async fn toggle(
    collection: Collection,
    product: i64,
    depot: &Depot,
) -> Result<Json<MembershipResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let membership = state
        .app
        .collections
        .toggle_product(session, collection, product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        product_id = product,
        %collection,
        member = membership.is_member(),
        "toggled collection membership"
    );

    Ok(Json(MembershipResponse {
        product_id: product,
        collection: collection.label().to_string(),
        member: membership.is_member(),
    }))
}

/// Toggle Featured
///
/// Adds the product to the featured collection, or removes it when it is
/// already there.
#[endpoint(
    tags("products"),
    summary = "Toggle Featured",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Membership toggled"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn featured(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MembershipResponse>, StatusError> {
    toggle(Collection::Featured, product.into_inner(), depot).await
}

/// Toggle Popular
///
/// Adds the product to the popular collection, or removes it when it is
/// already there.
#[endpoint(
    tags("products"),
    summary = "Toggle Popular",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Membership toggled"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn popular(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MembershipResponse>, StatusError> {
    toggle(Collection::Popular, product.into_inner(), depot).await
}
