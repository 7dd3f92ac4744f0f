//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    forms,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

use super::product_form;

/// Update Product
///
/// Replaces every form field. Without an `image` file the stored image URL
/// is kept.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid form"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, req, depot),
    fields(product_id = tracing::field::Empty, has_image = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let product = product.into_inner();

    let form = forms::form_data(req).await?;
    let draft = product_form(form).parse().map_err(into_status_error)?;
    let image = forms::file(form, "image").await?;

    let span = tracing::Span::current();

    span.record("product_id", product);
    span.record("has_image", image.is_some());

    let updated = state
        .app
        .products
        .update_product(session, product.into(), draft, image)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = product, "updated product");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopdesk_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::products_service;

    use super::{super::tests::make_product, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("products/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_without_image_leaves_url_unset() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|_, product, draft, image| {
                *product == ProductId::new(4)
                    && draft.name == "Wool Sock"
                    && draft.image_url.is_none()
                    && image.is_none()
            })
            .return_once(|_, _, _, _| Ok(make_product(4, "Wool Sock", 30)));

        let mut res = TestClient::put("http://example.com/products/4")
            .form(&[("name", "Wool Sock"), ("selling_price", "9.99"), ("stock_quantity", "30")])
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Wool Sock");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _, _, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put("http://example.com/products/99")
            .form(&[("name", "Ghost"), ("selling_price", "1")])
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_non_numeric_id_returns_400() {
        let res = TestClient::put("http://example.com/products/shoe")
            .form(&[("name", "Ghost"), ("selling_price", "1")])
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
