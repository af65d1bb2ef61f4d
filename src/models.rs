use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: CustomerStatus,
    #[serde(default)]
    pub gstin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub customer_id: String,
    pub issue_date: NaiveDate,
    pub total_amount: f64,
    pub status: String,
}

/// Everything the data file holds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub company_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub gstin: String,
    pub pan: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub invoice_prefix: String,
    pub currency_symbol: String,
    pub date_format: String,
    pub invoice_footer: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: "Your Company Name".to_string(),
            address_line1: "123 Business Street".to_string(),
            address_line2: String::new(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "info@yourcompany.com".to_string(),
            website: String::new(),
            gstin: String::new(),
            pan: String::new(),
            bank_name: String::new(),
            account_number: String::new(),
            ifsc_code: String::new(),
            invoice_prefix: "INV".to_string(),
            currency_symbol: "₹".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            invoice_footer: "Thank you for your business!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub with_gstin: usize,
    pub gstin_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_value: f64,
    pub total_value_display: String,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductStatsResponse {
    pub category: String,
    pub category_count: usize,
    pub summary: InventorySummary,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub settings: TelegramSettings,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeliveryResponse {
    pub ok: bool,
}

/// Outcome of a connection check, with each step reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConnectionReport {
    pub credentials_valid: bool,
    pub message_delivered: bool,
}

impl ConnectionReport {
    pub fn ok(&self) -> bool {
        self.credentials_valid && self.message_delivered
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub report: ConnectionReport,
}
