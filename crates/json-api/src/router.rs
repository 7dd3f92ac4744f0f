//! App Router

use salvo::Router;

use crate::{
    categories, collections, dashboard, fallback, orders, products, session, users,
};

/// Session routes that must work without a session.
fn open_router() -> Router {
    Router::with_path("session")
        .post(session::create::handler)
        .push(Router::with_path("refresh").post(session::refresh::handler))
}

/// Every page, behind the session guard.
fn guarded_router() -> Router {
    Router::new()
        .hoop(session::middleware::handler)
        .push(
            Router::with_path("session")
                .get(session::get::handler)
                .delete(session::delete::handler),
        )
        .push(Router::with_path("dashboard").get(dashboard::get::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("featured").post(products::toggle::featured))
                        .push(Router::with_path("popular").post(products::toggle::popular)),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{category}")
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .push(
                    Router::with_path("{user}")
                        .delete(users::delete::handler)
                        .push(Router::with_path("orders").get(users::orders::handler)),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(
                    Router::with_path("{order}")
                        .delete(orders::delete::handler)
                        .push(Router::with_path("order-status").put(orders::status::order_status))
                        .push(
                            Router::with_path("payment-status")
                                .put(orders::status::payment_status),
                        ),
                ),
        )
        .push(
            Router::with_path("featured-products")
                .get(collections::index::featured)
                .push(Router::with_path("{product}").delete(collections::delete::featured)),
        )
        .push(
            Router::with_path("popular-products")
                .get(collections::index::popular)
                .push(Router::with_path("{product}").delete(collections::delete::popular)),
        )
}

/// Session and page routes.
pub(crate) fn app_router() -> Router {
    Router::new().push(open_router()).push(guarded_router())
}

/// Catch-all: redirect signed-in staff to the dashboard, 401 otherwise.
/// Must be pushed after every other route.
pub(crate) fn fallback_router() -> Router {
    Router::new()
        .hoop(session::middleware::handler)
        .push(Router::with_path("{**rest}").goal(fallback::handler))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use salvo::{
        affix_state::inject,
        http::{StatusCode, header::LOCATION},
        test::{RequestBuilder, ResponseExt, TestClient},
        Service,
    };
    use serde_json::json;
    use testresult::TestResult;

    use shopdesk_app::{
        context::AppContext,
        platform::memory::{MemoryIdentityProvider, MemoryObjectStore, MemoryTableStore},
    };

    use crate::{
        collections::models::{CollectionResponse, MembershipResponse},
        dashboard::models::DashboardResponse,
        products::models::{ProductResponse, ProductsResponse},
        session::models::SessionResponse,
        state::State,
    };

    use super::*;

    const EMAIL: &str = "staff@shopdesk.test";
    const PASSWORD: &str = "correct horse battery staple";

    fn memory_service() -> Service {
        let app = AppContext::with_stores(
            Arc::new(MemoryTableStore::new()),
            Arc::new(MemoryObjectStore::new()),
            Arc::new(MemoryIdentityProvider::new().with_account(EMAIL, PASSWORD)),
            Duration::from_secs(60),
        );

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(app_router())
                .push(fallback_router()),
        )
    }

    fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.add_header("authorization", format!("Bearer {token}"), true)
    }

    async fn sign_in(service: &Service) -> TestResult<String> {
        let session: SessionResponse = TestClient::post("http://example.com/session")
            .json(&json!({ "email": EMAIL, "password": PASSWORD }))
            .send(service)
            .await
            .take_json()
            .await?;

        Ok(session.access_token)
    }

    #[tokio::test]
    async fn test_pages_require_a_session() {
        let service = memory_service();

        for path in ["/dashboard", "/products", "/orders", "/users", "/featured-products"] {
            let res = TestClient::get(format!("http://example.com{path}"))
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let res = bearer(TestClient::get("http://example.com/dashboard"), "forged")
            .send(&memory_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_unknown_path_redirects_only_when_signed_in() -> TestResult {
        let service = memory_service();
        let token = sign_in(&service).await?;

        let anonymous = TestClient::get("http://example.com/reports")
            .send(&service)
            .await;

        let signed_in = bearer(TestClient::get("http://example.com/reports"), &token)
            .send(&service)
            .await;

        let location = signed_in
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok());

        assert_eq!(anonymous.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(signed_in.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/dashboard"));

        Ok(())
    }

    #[tokio::test]
    async fn test_featuring_a_new_product_end_to_end() -> TestResult {
        let service = memory_service();
        let token = sign_in(&service).await?;

        let created: ProductResponse =
            bearer(TestClient::post("http://example.com/products"), &token)
                .form(&[
                    ("name", "Canvas Shoe"),
                    ("selling_price", "49.90"),
                    ("variant", "40,41"),
                    ("stock_quantity", "3"),
                ])
                .send(&service)
                .await
                .take_json()
                .await?;

        let toggled: MembershipResponse = bearer(
            TestClient::post(format!("http://example.com/products/{}/featured", created.id)),
            &token,
        )
        .send(&service)
        .await
        .take_json()
        .await?;

        let featured: CollectionResponse =
            bearer(TestClient::get("http://example.com/featured-products"), &token)
                .send(&service)
                .await
                .take_json()
                .await?;

        let page: ProductsResponse = bearer(TestClient::get("http://example.com/products"), &token)
            .send(&service)
            .await
            .take_json()
            .await?;

        let dashboard: DashboardResponse =
            bearer(TestClient::get("http://example.com/dashboard"), &token)
                .send(&service)
                .await
                .take_json()
                .await?;

        assert!(toggled.member, "first toggle should add the product");
        assert_eq!(
            featured.products.iter().map(|p| p.id).collect::<Vec<_>>(),
            [created.id]
        );
        assert_eq!(
            page.products
                .iter()
                .map(|row| (row.product.id, row.featured, row.popular))
                .collect::<Vec<_>>(),
            [(created.id, true, false)]
        );
        assert_eq!(
            page.low_stock.iter().map(|p| p.id).collect::<Vec<_>>(),
            [created.id]
        );
        assert_eq!(dashboard.products, 1);
        assert_eq!(dashboard.sales, "0");

        Ok(())
    }

    #[tokio::test]
    async fn test_signing_out_revokes_the_token() -> TestResult {
        let service = memory_service();
        let token = sign_in(&service).await?;

        let signed_out = bearer(TestClient::delete("http://example.com/session"), &token)
            .send(&service)
            .await;

        let afterwards = bearer(TestClient::get("http://example.com/dashboard"), &token)
            .send(&service)
            .await;

        assert_eq!(signed_out.status_code, Some(StatusCode::NO_CONTENT));
        assert_eq!(afterwards.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
