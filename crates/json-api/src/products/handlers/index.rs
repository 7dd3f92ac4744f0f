//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use shopdesk_app::domain::{
    collections::records::Collection,
    products::{
        listing::{build_listings, search_products},
        stock::low_stock,
    },
};

use crate::{
    collections, extensions::*, products::errors::into_status_error,
    products::models::ProductsResponse, state::State,
};

/// List Products
///
/// Returns every product matching `search` with its stock level and
/// collection flags, plus the low-stock alert over all products.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Products page"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let products = state
        .app
        .products
        .list_products(session)
        .await
        .map_err(into_status_error)?;

    let featured = state
        .app
        .collections
        .member_ids(session, Collection::Featured)
        .await
        .map_err(collections::errors::into_status_error)?;

    let popular = state
        .app
        .collections
        .member_ids(session, Collection::Popular)
        .await
        .map_err(collections::errors::into_status_error)?;

    let low_stock = low_stock(&products).cloned().map(Into::into).collect();

    let products = match search.into_inner() {
        Some(term) => search_products(products, &term),
        None => products,
    };

    Ok(Json(ProductsResponse {
        products: build_listings(products, &featured, &popular)
            .into_iter()
            .map(Into::into)
            .collect(),
        low_stock,
    }))
}
