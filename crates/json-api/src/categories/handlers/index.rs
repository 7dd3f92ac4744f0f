//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{errors::into_status_error, models::CategoriesResponse},
    extensions::*,
    state::State,
};

/// List Categories
#[endpoint(
    tags("categories"),
    summary = "List Categories",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let categories = state
        .app
        .categories
        .list_categories(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopdesk_app::domain::categories::{
        MockCategoriesService,
        records::{CategoryId, CategoryRecord},
    };

    use crate::test_helpers::categories_service;

    use super::*;

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_list_categories().once().return_once(|_| {
            Ok(vec![CategoryRecord {
                id: CategoryId::new(1),
                name: "Footwear".to_string(),
                icon_url: Some("https://cdn.test/shoe.svg".to_string()),
            }])
        });

        let service = categories_service(
            categories,
            Router::with_path("categories").get(handler),
        );

        let mut res = TestClient::get("http://example.com/categories")
            .send(&service)
            .await;

        let body: CategoriesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.categories.len(), 1, "expected one category");
        assert_eq!(
            body.categories.first().map(|category| category.name.as_str()),
            Some("Footwear")
        );

        Ok(())
    }
}
