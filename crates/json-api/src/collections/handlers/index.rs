//! Collection Index Handlers

use std::sync::Arc;

use salvo::prelude::*;

use shopdesk_app::domain::collections::records::Collection;

use crate::{
    collections::{errors::into_status_error, models::CollectionResponse},
    extensions::*,
    state::State,
};

async fn list(collection: Collection, depot: &Depot) -> Result<Json<CollectionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let entries = state
        .app
        .collections
        .list_entries(session, collection)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CollectionResponse::new(collection.label(), entries)))
}

/// List Featured Products
#[endpoint(
    tags("collections"),
    summary = "List Featured Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Featured products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn featured(depot: &mut Depot) -> Result<Json<CollectionResponse>, StatusError> {
    list(Collection::Featured, depot).await
}

/// List Popular Products
#[endpoint(
    tags("collections"),
    summary = "List Popular Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Popular products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn popular(depot: &mut Depot) -> Result<Json<CollectionResponse>, StatusError> {
    list(Collection::Popular, depot).await
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopdesk_app::domain::{
        collections::{MockCollectionsService, records::CollectionEntry},
        products::records::{ProductId, ProductRecord},
    };

    use crate::test_helpers::collections_service;

    use super::*;

    fn entry(id: i64, name: &str) -> CollectionEntry {
        CollectionEntry {
            product_id: ProductId::new(id),
            product: ProductRecord {
                id: ProductId::new(id),
                name: name.to_string(),
                selling_price: Decimal::TEN,
                variant: Default::default(),
                category: None,
                image_url: None,
                description: None,
                stock_quantity: 20,
            },
        }
    }

    fn make_service(collections: MockCollectionsService) -> Service {
        collections_service(
            collections,
            Router::new()
                .push(Router::with_path("featured-products").get(featured))
                .push(Router::with_path("popular-products").get(popular)),
        )
    }

    #[tokio::test]
    async fn test_featured_lists_embedded_products() -> TestResult {
        let mut collections = MockCollectionsService::new();

        collections
            .expect_list_entries()
            .once()
            .withf(|_, collection| *collection == Collection::Featured)
            .return_once(|_, _| Ok(vec![entry(2, "Wool Sock"), entry(5, "Canvas Shoe")]));

        let mut res = TestClient::get("http://example.com/featured-products")
            .send(&make_service(collections))
            .await;

        let body: CollectionResponse = res.take_json().await?;
        let names: Vec<_> = body.products.iter().map(|product| product.name.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.collection, "featured");
        assert_eq!(names, ["Wool Sock", "Canvas Shoe"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_popular_reads_popular_collection() -> TestResult {
        let mut collections = MockCollectionsService::new();

        collections
            .expect_list_entries()
            .once()
            .withf(|_, collection| *collection == Collection::Popular)
            .return_once(|_, _| Ok(vec![]));

        let body: CollectionResponse = TestClient::get("http://example.com/popular-products")
            .send(&make_service(collections))
            .await
            .take_json()
            .await?;

        assert_eq!(body.collection, "popular");
        assert!(body.products.is_empty());

        Ok(())
    }
}
