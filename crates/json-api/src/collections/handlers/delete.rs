//! Remove From Collection Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopdesk_app::domain::collections::records::Collection;

use crate::{collections::errors::into_status_error, extensions::*, state::State};

async fn remove(collection: Collection, product: i64, depot: &Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    state
        .app
        .collections
        .remove_product(session, collection, product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = product, %collection, "removed product from collection");

    Ok(StatusCode::NO_CONTENT)
}

/// Remove Featured Product
#[endpoint(
    tags("collections"),
    summary = "Remove Featured Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product is not featured"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn featured(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    remove(Collection::Featured, product.into_inner(), depot).await
}

/// Remove Popular Product
#[endpoint(
    tags("collections"),
    summary = "Remove Popular Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product is not popular"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn popular(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    remove(Collection::Popular, product.into_inner(), depot).await
}
