use crate::errors::AppError;
use crate::models::{
    CategoryCount, CategoryQuery, CompanySettings, ConnectionResponse, Customer, CustomerStats,
    DeliveryResponse, Invoice, MessageRequest, Product, ProductStatsResponse, TelegramSettings,
};
use crate::settings::{load_settings, save_settings};
use crate::state::AppState;
use crate::stats::{
    ALL_CATEGORIES, category_breakdown, count_in_category, customer_stats, inventory_summary,
};
use crate::storage::persist_data;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::info;

pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    let data = state.data.lock().await;
    Json(data.customers.clone())
}

pub async fn get_customer_stats(State(state): State<AppState>) -> Json<CustomerStats> {
    let data = state.data.lock().await;
    Json(customer_stats(&data.customers))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Product>> {
    let category = query.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let data = state.data.lock().await;
    let products = data
        .products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .cloned()
        .collect();
    Json(products)
}

pub async fn get_product_stats(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<ProductStatsResponse> {
    let category = query.category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let data = state.data.lock().await;
    Json(ProductStatsResponse {
        category_count: count_in_category(&data.products, &category),
        summary: inventory_summary(&data.products),
        category,
    })
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    let data = state.data.lock().await;
    Json(category_breakdown(&data.products))
}

pub async fn list_invoices(State(state): State<AppState>) -> Json<Vec<Invoice>> {
    let data = state.data.lock().await;
    Json(data.invoices.clone())
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let index = data
        .invoices
        .iter()
        .position(|invoice| invoice.id == id)
        .ok_or_else(|| AppError::not_found(format!("invoice {id} not found")))?;

    let removed = data.invoices.remove(index);
    if let Err(err) = persist_data(&state.data_path, &data).await {
        data.invoices.insert(index, removed);
        return Err(err);
    }
    info!(invoice = %removed.invoice_number, "deleted invoice");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn share_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(settings): Json<TelegramSettings>,
) -> Result<Json<DeliveryResponse>, AppError> {
    let invoice = {
        let data = state.data.lock().await;
        data.invoices
            .iter()
            .find(|invoice| invoice.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("invoice {id} not found")))?
    };

    let payload = serde_json::to_vec_pretty(&invoice).map_err(AppError::internal)?;
    let filename = format!("invoice-{}.json", invoice.invoice_number);
    let ok = state.telegram.send_file(payload, &filename, &settings).await;

    Ok(Json(DeliveryResponse { ok }))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<CompanySettings> {
    Json(load_settings(state.settings.as_ref()))
}

pub async fn put_settings(
    State(state): State<AppState>,
    Json(settings): Json<CompanySettings>,
) -> Result<Json<CompanySettings>, AppError> {
    save_settings(state.settings.as_ref(), &settings)?;
    info!("saved company settings");
    Ok(Json(settings))
}

pub async fn send_telegram_message(
    State(state): State<AppState>,
    Json(payload): Json<MessageRequest>,
) -> Result<Json<DeliveryResponse>, AppError> {
    if payload.text.trim().is_empty() {
        return Err(AppError::bad_request("text must not be empty"));
    }

    let ok = state
        .telegram
        .send_message(&payload.text, &payload.settings)
        .await;
    Ok(Json(DeliveryResponse { ok }))
}

pub async fn test_telegram_connection(
    State(state): State<AppState>,
    Json(settings): Json<TelegramSettings>,
) -> Json<ConnectionResponse> {
    let report = state.telegram.check_connection(&settings).await;
    Json(ConnectionResponse {
        ok: report.ok(),
        report,
    })
}
