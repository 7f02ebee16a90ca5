//! Admin console data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discount applied to yearly billing, in percent
pub const YEARLY_DISCOUNT_PERCENT: u64 = 20;

/// Format an amount in cents as `12.34`
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Yearly price for a monthly price, with the yearly discount applied
pub fn yearly_price_cents(monthly_cents: u64) -> u64 {
    monthly_cents * 12 * (100 - YEARLY_DISCOUNT_PERCENT) / 100
}

// ============================================================================
// Plans
// ============================================================================

/// Subscription plan sold to schools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub monthly_price_cents: u64,
    /// `None` means unlimited
    pub max_students: Option<u32>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    pub fn yearly_price_cents(&self) -> u64 {
        yearly_price_cents(self.monthly_price_cents)
    }

    pub fn student_limit_label(&self) -> String {
        match self.max_students {
            Some(n) => n.to_string(),
            None => "Unlimited".to_string(),
        }
    }

    /// Student limit as marketing copy
    pub fn students_label(&self) -> String {
        match self.max_students {
            Some(n) => format!("Up to {n} students"),
            None => "Unlimited students".to_string(),
        }
    }
}

/// Input for creating a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPlan {
    pub name: String,
    pub monthly_price_cents: u64,
    pub max_students: Option<u32>,
    pub features: Vec<String>,
}

// ============================================================================
// Tenants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum TenantStatus {
    #[display("active")]
    Active,
    #[display("trial")]
    Trial,
    #[display("suspended")]
    Suspended,
}

/// A school using the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub plan_id: String,
    pub status: TenantStatus,
    pub students: u32,
}

// ============================================================================
// Domains
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum DomainKind {
    #[display("subdomain")]
    Subdomain,
    #[display("custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum DnsStatus {
    #[display("verified")]
    Verified,
    #[display("pending")]
    Pending,
    #[display("misconfigured")]
    Misconfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SslStatus {
    #[display("active")]
    Active,
    #[display("provisioning")]
    Provisioning,
    #[display("expired")]
    Expired,
}

/// Hostname a tenant is served on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub tenant_id: String,
    pub hostname: String,
    pub kind: DomainKind,
    pub dns: DnsStatus,
    pub ssl: SslStatus,
    pub added_at: DateTime<Utc>,
}

// ============================================================================
// Payments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PaymentStatus {
    #[display("paid")]
    Paid,
    #[display("pending")]
    Pending,
    #[display("failed")]
    Failed,
    #[display("refunded")]
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PaymentMethod {
    #[display("card")]
    Card,
    #[display("bank transfer")]
    BankTransfer,
    #[display("invoice")]
    Invoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub tenant_id: String,
    pub invoice: String,
    pub amount_cents: u64,
    pub currency: String,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
}

/// Sum of payment amounts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentTotals {
    pub paid_cents: u64,
    pub pending_cents: u64,
    pub failed_cents: u64,
    pub refunded_cents: u64,
}

impl PaymentTotals {
    pub fn for_status(&self, status: PaymentStatus) -> u64 {
        match status {
            PaymentStatus::Paid => self.paid_cents,
            PaymentStatus::Pending => self.pending_cents,
            PaymentStatus::Failed => self.failed_cents,
            PaymentStatus::Refunded => self.refunded_cents,
        }
    }
}

// ============================================================================
// Activity log
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ActivityCategory {
    #[display("plan")]
    Plan,
    #[display("tenant")]
    Tenant,
    #[display("domain")]
    Domain,
    #[display("payment")]
    Payment,
    #[display("settings")]
    Settings,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Plan,
        ActivityCategory::Tenant,
        ActivityCategory::Domain,
        ActivityCategory::Payment,
        ActivityCategory::Settings,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub at: DateTime<Utc>,
    pub actor: String,
    pub category: ActivityCategory,
    pub message: String,
}

// ============================================================================
// Settings
// ============================================================================

/// Platform-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub platform_name: String,
    pub support_email: String,
    pub default_trial_days: u32,
    pub currency: String,
    pub maintenance_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform_name: "Campusly".to_string(),
            support_email: "support@campusly.app".to_string(),
            default_trial_days: 14,
            currency: "USD".to_string(),
            maintenance_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(1205), "12.05");
        assert_eq!(format_cents(99_900), "999.00");
    }

    #[test]
    fn test_yearly_price_applies_discount() {
        // 10.00/month -> 120.00/year -> 96.00 with 20% off
        assert_eq!(yearly_price_cents(1_000), 9_600);
        assert_eq!(yearly_price_cents(0), 0);
    }

    #[test]
    fn test_unlimited_student_label() {
        let plan = Plan {
            id: "p".to_string(),
            name: "Enterprise".to_string(),
            monthly_price_cents: 0,
            max_students: None,
            features: Vec::new(),
            is_active: true,
            created_at: DateTime::default(),
        };
        assert_eq!(plan.student_limit_label(), "Unlimited");
        assert_eq!(plan.students_label(), "Unlimited students");

        let capped = Plan {
            max_students: Some(200),
            ..plan
        };
        assert_eq!(capped.student_limit_label(), "200");
        assert_eq!(capped.students_label(), "Up to 200 students");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PaymentStatus::Refunded.to_string(), "refunded");
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "bank transfer");
        assert_eq!(DnsStatus::Misconfigured.to_string(), "misconfigured");
    }

    #[test]
    fn test_settings_serialize_to_json() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"platform_name\":\"Campusly\""));
        assert!(json.contains("\"default_trial_days\":14"));
    }
}
