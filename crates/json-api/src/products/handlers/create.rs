//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    forms,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

use super::product_form;

/// Create Product
///
/// Accepts a url-encoded or multipart form. An `image` file, when present, is
/// uploaded first and its public URL stored on the product.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid form"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty, has_image = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let form = forms::form_data(req).await?;
    let draft = product_form(form).parse().map_err(into_status_error)?;
    let image = forms::file(form, "image").await?;

    let span = tracing::Span::current();

    span.record("has_image", image.is_some());

    let product = state
        .app
        .products
        .create_product(session, draft, image)
        .await
        .map_err(into_status_error)?;

    span.record("product_id", product.id.get());

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopdesk_app::domain::{
        categories::records::CategoryId,
        products::{MockProductsService, ProductsServiceError},
    };

    use crate::test_helpers::products_service;

    use super::{super::tests::make_product, *};

    const BOUNDARY: &str = "shopdesk-boundary";

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    fn form_fields() -> [(&'static str, &'static str); 6] {
        [
            ("name", "Canvas Shoe"),
            ("selling_price", "2499.50"),
            ("variant", "40, 41"),
            ("category", "2"),
            ("description", ""),
            ("stock_quantity", "12"),
        ]
    }

    #[tokio::test]
    async fn test_create_product_from_form() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|session, draft, image| {
                session.user.email.as_deref() == Some("staff@shopdesk.test")
                    && draft.name == "Canvas Shoe"
                    && draft.selling_price == Decimal::new(249_950, 2)
                    && draft.variant.as_slice() == ["40", "41"]
                    && draft.category == Some(CategoryId::new(2))
                    && draft.description.is_none()
                    && draft.stock_quantity == 12
                    && image.is_none()
            })
            .return_once(|_, _, _| Ok(make_product(7, "Canvas Shoe", 12)));

        let mut res = TestClient::post("http://example.com/products")
            .form(&form_fields())
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/7"));
        assert_eq!(body.id, 7);
        assert_eq!(body.stock_level, "Fair Stock");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_with_image_upload() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|_, _, image| {
                image.as_ref().is_some_and(|image| {
                    image.file_name == "shoe.png"
                        && image.content_type == "image/png"
                        && image.bytes == b"png-bytes"
                })
            })
            .return_once(|_, _, _| Ok(make_product(8, "Canvas Shoe", 12)));

        let mut body = String::new();

        for (name, value) in form_fields() {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }

        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"shoe.png\"\r\nContent-Type: image/png\r\n\r\npng-bytes\r\n--{BOUNDARY}--\r\n"
        ));

        let res = TestClient::post("http://example.com/products")
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(body)
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_bad_price_returns_400() {
        let res = TestClient::post("http://example.com/products")
            .form(&[("name", "Canvas Shoe"), ("selling_price", "lots")])
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_product_unknown_category_returns_400() {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/products")
            .form(&form_fields())
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_product_upload_failure_returns_500() {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_, _, _| {
            Err(ProductsServiceError::Upload(
                shopdesk_app::platform::PlatformError::api(403, "Unauthorized", "bucket policy"),
            ))
        });

        let res = TestClient::post("http://example.com/products")
            .form(&form_fields())
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
