//! Create Category Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use shopdesk_app::domain::categories::data::CategoryDraft;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    forms,
    state::State,
};

/// Create Category
///
/// Form fields: `name` and an optional `icon` file.
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Category name is required"),
        (status_code = StatusCode::CONFLICT, description = "Category already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "categories.create", skip(req, depot, res), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let form = forms::form_data(req).await?;
    let draft = CategoryDraft::new(&forms::text(form, "name")).map_err(into_status_error)?;
    let icon = forms::file(form, "icon").await?;

    let category = state
        .app
        .categories
        .create_category(session, draft, icon)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/categories/{}", category.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(category_id = %category.id, "created category");

    Ok(Json(category.into()))
}
