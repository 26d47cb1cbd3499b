//! Core entities for the order event document sent to UTMify.

use serde::{Deserialize, Serialize};

/// OrderStatus represents the lifecycle state of a reported order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// OrderStatusWaitingPayment indicates a PIX charge was generated but not yet paid.
    WaitingPayment,
    /// OrderStatusPaid indicates the payment was confirmed.
    Paid,
}

/// Customer is the buyer sub-document.
///
/// The bot has no real PII, so name and email are synthesized from the
/// Telegram user id. Phone and document stay null until real data exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Name is a synthetic display name ("User {user_id}").
    pub name: String,
    /// Email is a synthetic address ("{user_id}@telegram.user").
    pub email: String,
    /// Phone is always null in the current scope.
    pub phone: Option<String>,
    /// Document (CPF/CNPJ) is always null in the current scope.
    pub document: Option<String>,
    /// Country is fixed to "BR".
    pub country: String,
    /// IP captured at first bot interaction, if known.
    pub ip: Option<String>,
}

impl Customer {
    /// Builds the synthetic customer for a Telegram user.
    pub fn synthetic(user_id: &str, ip: Option<String>) -> Self {
        Self {
            name: format!("User {}", user_id),
            email: format!("{}@telegram.user", user_id),
            phone: None,
            document: None,
            country: "BR".to_string(),
            ip,
        }
    }
}

/// Product is a single purchased plan line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// ID is derived from the bot id ("plan_{bot_id}").
    pub id: String,
    /// Name is the plan display name, defaulted when the plan has none.
    pub name: String,
    /// PlanID is always null in the current scope.
    pub plan_id: Option<String>,
    /// PlanName is always null in the current scope.
    pub plan_name: Option<String>,
    /// Quantity is fixed to 1.
    pub quantity: u32,
    /// PriceInCents is the plan value truncated to integer cents.
    pub price_in_cents: i64,
}

/// TrackingParameters carries the UTM/ad-attribution fields.
/// Every field is independently nullable; a user with no captured
/// attribution produces an all-null block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingParameters {
    pub src: Option<String>,
    pub sck: Option<String>,
    pub utm_source: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_content: Option<String>,
    pub utm_term: Option<String>,
}

/// Commission is the monetary breakdown, all values in integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub total_price_in_cents: i64,
    pub gateway_fee_in_cents: i64,
    pub user_commission_in_cents: i64,
    /// Currency is fixed to "BRL".
    pub currency: String,
}

/// OrderEvent is the full document POSTed to the UTMify orders endpoint.
///
/// Built fresh on every call and never stored locally; the remote API is
/// the sole system of record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    /// OrderID is the caller-supplied opaque identifier.
    pub order_id: String,
    /// Platform is the configured reporting-system label.
    pub platform: String,
    /// PaymentMethod is fixed to "pix".
    pub payment_method: String,
    /// Status is the lifecycle state being reported.
    pub status: OrderStatus,
    /// CreatedAt is a UTC "YYYY-MM-DD HH:MM:SS" string. Immutable per
    /// order: the paid update must carry the original value verbatim.
    pub created_at: String,
    /// ApprovedDate is null until the order is paid, then set exactly once.
    pub approved_date: Option<String>,
    /// RefundedAt is always null (no refund flow).
    pub refunded_at: Option<String>,
    pub customer: Customer,
    pub products: Vec<Product>,
    pub tracking_parameters: TrackingParameters,
    pub commission: Commission,
    /// IsTest is always false in the current scope.
    pub is_test: bool,
}
