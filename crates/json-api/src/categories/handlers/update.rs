//! Update Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopdesk_app::domain::categories::data::CategoryDraft;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    forms,
    state::State,
};

/// Update Category
///
/// Renames the category. Without an `icon` file the stored icon is kept.
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Category name is required"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "categories.update",
    skip(category, req, depot),
    fields(category_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    category: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let category = category.into_inner();

    tracing::Span::current().record("category_id", category);

    let form = forms::form_data(req).await?;
    let draft = CategoryDraft::new(&forms::text(form, "name")).map_err(into_status_error)?;
    let icon = forms::file(form, "icon").await?;

    let updated = state
        .app
        .categories
        .update_category(session, category.into(), draft, icon)
        .await
        .map_err(into_status_error)?;

    tracing::info!(category_id = category, "updated category");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use shopdesk_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService,
        records::{CategoryId, CategoryRecord},
    };

    use crate::test_helpers::categories_service;

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(
            categories,
            Router::with_path("categories/{category}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_category_returns_200() {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(|_, category, draft, icon| {
                *category == CategoryId::new(2) && draft.name == "Socks" && icon.is_none()
            })
            .return_once(|_, _, _, _| {
                Ok(CategoryRecord {
                    id: CategoryId::new(2),
                    name: "Socks".to_string(),
                    icon_url: Some("https://cdn.test/sock.svg".to_string()),
                })
            });

        let res = TestClient::put("http://example.com/categories/2")
            .form(&[("name", "Socks")])
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_update_missing_category_returns_404() {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .return_once(|_, _, _, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::put("http://example.com/categories/2")
            .form(&[("name", "Socks")])
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
