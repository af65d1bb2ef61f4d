use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(handlers::list_customers))
        .route("/api/customers/stats", get(handlers::get_customer_stats))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/stats", get(handlers::get_product_stats))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/invoices", get(handlers::list_invoices))
        .route("/api/invoices/:id", delete(handlers::delete_invoice))
        .route("/api/invoices/:id/share", post(handlers::share_invoice))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .route("/api/telegram/message", post(handlers::send_telegram_message))
        .route("/api/telegram/test", post(handlers::test_telegram_connection))
        .with_state(state)
}
