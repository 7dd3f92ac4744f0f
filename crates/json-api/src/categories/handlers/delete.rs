//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Delete Category
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::CONFLICT, description = "Category is still used by products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "categories.delete",
    skip(category, depot),
    fields(category_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    category: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let category = category.into_inner();

    tracing::Span::current().record("category_id", category);

    state
        .app
        .categories
        .delete_category(session, category.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(category_id = category, "deleted category");

    Ok(StatusCode::NO_CONTENT)
}
