//! Product Handlers

use salvo::http::form::FormData;

use shopdesk_app::domain::products::data::ProductForm;

use crate::forms::text;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod toggle;
pub(crate) mod update;

/// Product fields from an add/edit form body.
fn product_form(form: &FormData) -> ProductForm {
    ProductForm {
        name: text(form, "name"),
        selling_price: text(form, "selling_price"),
        variant: text(form, "variant"),
        category: text(form, "category"),
        description: text(form, "description"),
        stock_quantity: text(form, "stock_quantity"),
    }
}
