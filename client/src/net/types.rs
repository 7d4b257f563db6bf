//! Wire DTOs for the marketplace REST backend.
//!
//! DESIGN
//! ======
//! Records mirror backend JSON 1:1 (camelCase). Enumerated statuses tolerate
//! values this client does not know yet so a backend rollout never breaks
//! list rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::resources::Entity;

// =============================================================================
// ENVELOPE
// =============================================================================

/// Response body that is either bare or wrapped as `{"data": ...}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. Only the token is consumed; the user view is
/// always re-derived from its claims.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

// =============================================================================
// CATEGORY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
}

impl Entity for Category {
    type Input = CategoryInput;
    const COLLECTION: &'static str = "/categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn set_created_at(&mut self, ts: String) {
        self.created_at = Some(ts);
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// A bookable repair service offered on the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    pub is_active: bool,
}

impl Entity for Service {
    type Input = ServiceInput;
    const COLLECTION: &'static str = "/services";
    const LABEL: &'static str = "Service";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn set_created_at(&mut self, ts: String) {
        self.created_at = Some(ts);
    }
}

// =============================================================================
// DISPUTE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStatus {
    #[default]
    Open,
    UnderReview,
    Resolved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl DisputeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::UnderReview => "Under review",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }

    /// Resolved and rejected disputes accept no further status changes.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

/// A customer/provider disagreement about a booking, handled by support.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub status: DisputeStatus,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeUpdate {
    pub status: DisputeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Entity for Dispute {
    type Input = DisputeUpdate;
    const COLLECTION: &'static str = "/disputes";
    const LABEL: &'static str = "Dispute";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

// =============================================================================
// PAYOUT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Approved,
    Paid,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PayoutStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

/// Money owed to a service provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub status: PayoutStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Payout {
    /// Amount with its currency code, two decimals.
    pub fn display_amount(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PayoutUpdate {
    pub status: PayoutStatus,
}

impl Entity for Payout {
    type Input = PayoutUpdate;
    const COLLECTION: &'static str = "/payouts";
    const LABEL: &'static str = "Payout";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

// =============================================================================
// ACTIVITY LOG
// =============================================================================

/// Audit trail entry. Read-only from the portals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    #[serde(default)]
    pub actor_email: Option<String>,
    pub action: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Entity for ActivityLog {
    type Input = serde_json::Value;
    const COLLECTION: &'static str = "/activity-logs";
    const LABEL: &'static str = "Activity log";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "USD".to_owned()
}
