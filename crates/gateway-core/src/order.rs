//! # Order Types
//!
//! Provider order types for the razorgate payment facade.
//! Orders live in the provider's system; nothing here is persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
///
/// The facade is single-currency: every order is denominated in Indian
/// rupees, with amounts carried in paise on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    INR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Number of minor units per major unit (paise per rupee)
    pub fn minor_units_per_major(&self) -> i64 {
        100
    }

    /// Convert a major-unit amount (rupees) to minor units (paise).
    ///
    /// Returns `None` on overflow.
    pub fn to_minor_units(&self, amount: i64) -> Option<i64> {
        amount.checked_mul(self.minor_units_per_major())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-side order lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, awaiting payment
    Created,
    /// A payment attempt was made
    Attempted,
    /// Payment captured
    Paid,
    /// Any status value this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    /// Returns the provider's wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Attempted => "attempted",
            OrderStatus::Paid => "paid",
            OrderStatus::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An order as confirmed by the payment provider.
///
/// The facade keeps no record of these; the caller round-trips `id` into a
/// later signature verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Provider-assigned order ID (e.g. `order_MkQhgfkEkRnCxV`)
    pub id: String,

    /// Amount in minor currency units (paise)
    pub amount: i64,

    /// Currency
    pub currency: Currency,

    /// Provider-reported status
    pub status: OrderStatus,

    /// Caller-supplied receipt reference, echoed back by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,

    /// Provider-side creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
