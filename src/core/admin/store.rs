//! In-memory admin store
//!
//! Stands in for the backend. Each mutation validates its input, updates the
//! local collections, emits a `tracing` event where a real API call would go,
//! and appends one entry to the activity log.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::diagnostics::{DiagnosticReport, diagnose};
use super::error::AdminError;
use super::models::{
    ActivityCategory, ActivityEntry, DnsStatus, Domain, DomainKind, NewPlan, Payment,
    PaymentStatus, PaymentTotals, Plan, Settings, SslStatus, Tenant, TenantStatus,
};

/// Actor recorded on console actions
pub const CONSOLE_ACTOR: &str = "admin@campusly.app";

/// Suffix of platform-managed subdomains
pub const PLATFORM_DOMAIN_SUFFIX: &str = ".campusly.app";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminStore {
    pub plans: Vec<Plan>,
    pub tenants: Vec<Tenant>,
    pub domains: Vec<Domain>,
    pub payments: Vec<Payment>,
    pub activity: Vec<ActivityEntry>,
    pub settings: Settings,
    next_activity_id: u64,
}

impl AdminStore {
    pub fn new(
        plans: Vec<Plan>,
        tenants: Vec<Tenant>,
        domains: Vec<Domain>,
        payments: Vec<Payment>,
        activity: Vec<ActivityEntry>,
    ) -> Self {
        let next_activity_id = activity.iter().map(|e| e.id + 1).max().unwrap_or(1);
        Self {
            plans,
            tenants,
            domains,
            payments,
            activity,
            settings: Settings::default(),
            next_activity_id,
        }
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn tenant(&self, id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == id)
    }

    pub fn tenant_name(&self, id: &str) -> String {
        self.tenant(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn tenants_on_plan(&self, plan_id: &str) -> usize {
        self.tenants.iter().filter(|t| t.plan_id == plan_id).count()
    }

    pub fn payment_totals(&self) -> PaymentTotals {
        self.payments
            .iter()
            .fold(PaymentTotals::default(), |mut totals, p| {
                match p.status {
                    PaymentStatus::Paid => totals.paid_cents += p.amount_cents,
                    PaymentStatus::Pending => totals.pending_cents += p.amount_cents,
                    PaymentStatus::Failed => totals.failed_cents += p.amount_cents,
                    PaymentStatus::Refunded => totals.refunded_cents += p.amount_cents,
                }
                totals
            })
    }

    /// Monthly recurring revenue from active tenants
    pub fn monthly_recurring_cents(&self) -> u64 {
        self.tenants
            .iter()
            .filter(|t| t.status == TenantStatus::Active)
            .filter_map(|t| self.plan(&t.plan_id))
            .map(|p| p.monthly_price_cents)
            .sum()
    }

    // ------------------------------------------------------------------------
    // Plans
    // ------------------------------------------------------------------------

    pub fn create_plan(&mut self, input: NewPlan) -> Result<Plan, AdminError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AdminError::EmptyName);
        }
        if self
            .plans
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&name))
        {
            return Err(AdminError::DuplicatePlan(name));
        }

        let plan = Plan {
            id: Uuid::new_v4().to_string(),
            name,
            monthly_price_cents: input.monthly_price_cents,
            max_students: input.max_students,
            features: input
                .features
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            is_active: true,
            created_at: Utc::now(),
        };

        tracing::info!(plan_id = %plan.id, name = %plan.name, "create plan");
        self.record(
            ActivityCategory::Plan,
            format!("Created plan \"{}\"", plan.name),
        );
        self.plans.push(plan.clone());
        Ok(plan)
    }

    pub fn set_plan_active(&mut self, id: &str, active: bool) -> Result<(), AdminError> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::not_found("plan", id))?;

        if plan.is_active == active {
            return Ok(());
        }
        plan.is_active = active;
        let message = format!(
            "{} plan \"{}\"",
            if active { "Activated" } else { "Deactivated" },
            plan.name
        );

        tracing::info!(plan_id = id, active, "update plan");
        self.record(ActivityCategory::Plan, message);
        Ok(())
    }

    pub fn delete_plan(&mut self, id: &str) -> Result<Plan, AdminError> {
        let position = self
            .plans
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AdminError::not_found("plan", id))?;

        let tenants = self.tenants_on_plan(id);
        if tenants > 0 {
            return Err(AdminError::PlanInUse {
                name: self.plans[position].name.clone(),
                tenants,
            });
        }

        let plan = self.plans.remove(position);
        tracing::info!(plan_id = id, "delete plan");
        self.record(
            ActivityCategory::Plan,
            format!("Deleted plan \"{}\"", plan.name),
        );
        Ok(plan)
    }

    // ------------------------------------------------------------------------
    // Tenants
    // ------------------------------------------------------------------------

    pub fn suspend_tenant(&mut self, id: &str) -> Result<(), AdminError> {
        let tenant = self.tenant_mut(id)?;
        if tenant.status == TenantStatus::Suspended {
            return Err(AdminError::transition("tenant", id, "suspend", tenant.status));
        }
        tenant.status = TenantStatus::Suspended;
        let message = format!("Suspended tenant {}", tenant.name);

        tracing::info!(tenant_id = id, "suspend tenant");
        self.record(ActivityCategory::Tenant, message);
        Ok(())
    }

    pub fn reactivate_tenant(&mut self, id: &str) -> Result<(), AdminError> {
        let tenant = self.tenant_mut(id)?;
        if tenant.status != TenantStatus::Suspended {
            return Err(AdminError::transition("tenant", id, "reactivate", tenant.status));
        }
        tenant.status = TenantStatus::Active;
        let message = format!("Reactivated tenant {}", tenant.name);

        tracing::info!(tenant_id = id, "reactivate tenant");
        self.record(ActivityCategory::Tenant, message);
        Ok(())
    }

    fn tenant_mut(&mut self, id: &str) -> Result<&mut Tenant, AdminError> {
        self.tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AdminError::not_found("tenant", id))
    }

    // ------------------------------------------------------------------------
    // Domains
    // ------------------------------------------------------------------------

    pub fn add_domain(&mut self, tenant_id: &str, hostname: &str) -> Result<Domain, AdminError> {
        let hostname = normalize_hostname(hostname)?;
        if self.tenant(tenant_id).is_none() {
            return Err(AdminError::not_found("tenant", tenant_id));
        }
        if self.domains.iter().any(|d| d.hostname == hostname) {
            return Err(AdminError::DuplicateDomain(hostname));
        }

        // Platform subdomains are covered by the wildcard record and certificate.
        let domain = if hostname.ends_with(PLATFORM_DOMAIN_SUFFIX) {
            Domain {
                id: Uuid::new_v4().to_string(),
                tenant_id: tenant_id.to_string(),
                hostname,
                kind: DomainKind::Subdomain,
                dns: DnsStatus::Verified,
                ssl: SslStatus::Active,
                added_at: Utc::now(),
            }
        } else {
            Domain {
                id: Uuid::new_v4().to_string(),
                tenant_id: tenant_id.to_string(),
                hostname,
                kind: DomainKind::Custom,
                dns: DnsStatus::Pending,
                ssl: SslStatus::Provisioning,
                added_at: Utc::now(),
            }
        };

        tracing::info!(domain = %domain.hostname, tenant_id, "add domain");
        self.record(
            ActivityCategory::Domain,
            format!("Added domain {} for {}", domain.hostname, self.tenant_name(tenant_id)),
        );
        self.domains.push(domain.clone());
        Ok(domain)
    }

    /// Complete verification of a pending domain
    pub fn verify_domain(&mut self, id: &str) -> Result<Domain, AdminError> {
        let domain = self
            .domains
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AdminError::not_found("domain", id))?;

        if domain.dns == DnsStatus::Verified {
            return Err(AdminError::transition("domain", id, "verify", domain.dns));
        }
        domain.dns = DnsStatus::Verified;
        domain.ssl = SslStatus::Active;
        let domain = domain.clone();

        tracing::info!(domain = %domain.hostname, "verify domain");
        self.record(
            ActivityCategory::Domain,
            format!("Verified domain {}", domain.hostname),
        );
        Ok(domain)
    }

    pub fn remove_domain(&mut self, id: &str) -> Result<Domain, AdminError> {
        let position = self
            .domains
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AdminError::not_found("domain", id))?;

        let domain = self.domains.remove(position);
        tracing::info!(domain = %domain.hostname, "remove domain");
        self.record(
            ActivityCategory::Domain,
            format!("Removed domain {}", domain.hostname),
        );
        Ok(domain)
    }

    /// Diagnostics do not mutate and are not logged
    pub fn diagnose_domain(&self, id: &str) -> Result<DiagnosticReport, AdminError> {
        let domain = self
            .domains
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| AdminError::not_found("domain", id))?;
        let status = self
            .tenant(&domain.tenant_id)
            .map(|t| t.status)
            .unwrap_or(TenantStatus::Active);

        Ok(diagnose(domain, status))
    }

    // ------------------------------------------------------------------------
    // Payments
    // ------------------------------------------------------------------------

    /// Queue a failed payment for another attempt
    pub fn retry_payment(&mut self, id: &str) -> Result<Payment, AdminError> {
        let payment = self.payment_mut(id)?;
        if payment.status != PaymentStatus::Failed {
            return Err(AdminError::transition("payment", id, "retry", payment.status));
        }
        payment.status = PaymentStatus::Pending;
        payment.attempts += 1;
        let payment = payment.clone();

        tracing::info!(invoice = %payment.invoice, attempt = payment.attempts, "retry payment");
        self.record(
            ActivityCategory::Payment,
            format!("Retried payment {} (attempt {})", payment.invoice, payment.attempts),
        );
        Ok(payment)
    }

    /// Settle a pending payment
    pub fn settle_payment(&mut self, id: &str, succeeded: bool) -> Result<Payment, AdminError> {
        let payment = self.payment_mut(id)?;
        if payment.status != PaymentStatus::Pending {
            return Err(AdminError::transition("payment", id, "settle", payment.status));
        }
        payment.status = if succeeded {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Failed
        };
        let payment = payment.clone();

        tracing::info!(invoice = %payment.invoice, status = %payment.status, "settle payment");
        self.record(
            ActivityCategory::Payment,
            format!("Payment {} is now {}", payment.invoice, payment.status),
        );
        Ok(payment)
    }

    pub fn refund_payment(&mut self, id: &str) -> Result<Payment, AdminError> {
        let payment = self.payment_mut(id)?;
        if payment.status != PaymentStatus::Paid {
            return Err(AdminError::transition("payment", id, "refund", payment.status));
        }
        payment.status = PaymentStatus::Refunded;
        let payment = payment.clone();

        tracing::info!(invoice = %payment.invoice, "refund payment");
        self.record(
            ActivityCategory::Payment,
            format!("Refunded payment {}", payment.invoice),
        );
        Ok(payment)
    }

    fn payment_mut(&mut self, id: &str) -> Result<&mut Payment, AdminError> {
        self.payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::not_found("payment", id))
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    pub fn update_settings(&mut self, settings: Settings) -> Result<(), AdminError> {
        validate_settings(&settings)?;
        if settings == self.settings {
            return Ok(());
        }

        let maintenance_changed = settings.maintenance_mode != self.settings.maintenance_mode;
        self.settings = settings;

        tracing::info!(
            maintenance = self.settings.maintenance_mode,
            "update settings"
        );
        let message = if maintenance_changed {
            format!(
                "Maintenance mode {}",
                if self.settings.maintenance_mode { "enabled" } else { "disabled" }
            )
        } else {
            "Updated platform settings".to_string()
        };
        self.record(ActivityCategory::Settings, message);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Activity
    // ------------------------------------------------------------------------

    fn record(&mut self, category: ActivityCategory, message: String) {
        self.record_at(Utc::now(), CONSOLE_ACTOR, category, message);
    }

    pub fn record_at(
        &mut self,
        at: DateTime<Utc>,
        actor: &str,
        category: ActivityCategory,
        message: String,
    ) {
        let id = self.next_activity_id.max(1);
        self.next_activity_id = id + 1;
        self.activity.push(ActivityEntry {
            id,
            at,
            actor: actor.to_string(),
            category,
            message,
        });
    }
}

/// Trim, lowercase and validate a hostname
pub fn normalize_hostname(input: &str) -> Result<String, AdminError> {
    let hostname = input.trim().trim_end_matches('.').to_lowercase();
    let invalid = || AdminError::InvalidHostname(input.trim().to_string());

    if hostname.is_empty() || hostname.len() > 253 {
        return Err(invalid());
    }

    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    for label in &labels {
        let valid = !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(invalid());
        }
    }

    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(invalid());
    }

    Ok(hostname)
}

fn validate_settings(settings: &Settings) -> Result<(), AdminError> {
    if settings.platform_name.trim().is_empty() {
        return Err(AdminError::InvalidSettings(
            "platform name must not be empty".to_string(),
        ));
    }

    let email = settings.support_email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(user, host)| !user.is_empty() && host.contains('.') && !host.starts_with('.'));
    if !valid_email {
        return Err(AdminError::InvalidSettings(format!(
            "'{email}' is not a valid support email"
        )));
    }

    if settings.default_trial_days > 90 {
        return Err(AdminError::InvalidSettings(
            "trial cannot exceed 90 days".to_string(),
        ));
    }

    let currency = settings.currency.trim();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(AdminError::InvalidSettings(format!(
            "'{currency}' is not an ISO 4217 currency code"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::seed::seed_store;

    fn new_plan(name: &str) -> NewPlan {
        NewPlan {
            name: name.to_string(),
            monthly_price_cents: 4_900,
            max_students: Some(500),
            features: vec!["Attendance".to_string(), "  ".to_string()],
        }
    }

    #[test]
    fn test_create_plan_appends_and_logs() {
        let mut store = seed_store();
        let plans_before = store.plans.len();
        let log_before = store.activity.len();

        let plan = store.create_plan(new_plan("  Growth ")).unwrap();

        assert_eq!(plan.name, "Growth");
        assert_eq!(plan.features, vec!["Attendance".to_string()]);
        assert!(plan.is_active);
        assert_eq!(store.plans.len(), plans_before + 1);
        assert_eq!(store.activity.len(), log_before + 1);
        assert_eq!(
            store.activity.last().map(|e| e.category),
            Some(ActivityCategory::Plan)
        );
    }

    #[test]
    fn test_create_plan_rejects_empty_and_duplicate_names() {
        let mut store = seed_store();
        let existing = store.plans[0].name.to_uppercase();
        let log_before = store.activity.len();

        assert_eq!(store.create_plan(new_plan("   ")), Err(AdminError::EmptyName));
        assert!(matches!(
            store.create_plan(new_plan(&existing)),
            Err(AdminError::DuplicatePlan(_))
        ));
        assert_eq!(store.activity.len(), log_before);
    }

    #[test]
    fn test_delete_plan_in_use_fails() {
        let mut store = seed_store();
        let in_use = store.tenants[0].plan_id.clone();

        assert!(matches!(
            store.delete_plan(&in_use),
            Err(AdminError::PlanInUse { .. })
        ));
    }

    #[test]
    fn test_delete_unused_plan() {
        let mut store = seed_store();
        let plan = store.create_plan(new_plan("Temporary")).unwrap();

        assert!(store.delete_plan(&plan.id).is_ok());
        assert!(store.plan(&plan.id).is_none());
        assert!(matches!(
            store.delete_plan(&plan.id),
            Err(AdminError::NotFound { kind: "plan", .. })
        ));
    }

    #[test]
    fn test_toggle_plan_active_logs_only_changes() {
        let mut store = seed_store();
        let id = store.plans[0].id.clone();
        let log_before = store.activity.len();

        store.set_plan_active(&id, true).unwrap();
        assert_eq!(store.activity.len(), log_before);

        store.set_plan_active(&id, false).unwrap();
        assert!(!store.plan(&id).unwrap().is_active);
        assert_eq!(store.activity.len(), log_before + 1);
    }

    #[test]
    fn test_suspend_and_reactivate_tenant() {
        let mut store = seed_store();
        let id = store.tenants[0].id.clone();

        store.suspend_tenant(&id).unwrap();
        assert_eq!(store.tenant(&id).unwrap().status, TenantStatus::Suspended);
        assert!(matches!(
            store.suspend_tenant(&id),
            Err(AdminError::InvalidTransition { .. })
        ));

        store.reactivate_tenant(&id).unwrap();
        assert_eq!(store.tenant(&id).unwrap().status, TenantStatus::Active);
    }

    #[test]
    fn test_add_custom_domain_starts_pending() {
        let mut store = seed_store();
        let tenant = store.tenants[0].id.clone();

        let domain = store.add_domain(&tenant, " Portal.Example-School.org. ").unwrap();

        assert_eq!(domain.hostname, "portal.example-school.org");
        assert_eq!(domain.kind, DomainKind::Custom);
        assert_eq!(domain.dns, DnsStatus::Pending);

        let verified = store.verify_domain(&domain.id).unwrap();
        assert_eq!(verified.dns, DnsStatus::Verified);
        assert_eq!(verified.ssl, SslStatus::Active);
        assert!(store.verify_domain(&domain.id).is_err());
    }

    #[test]
    fn test_add_platform_subdomain_is_live() {
        let mut store = seed_store();
        let tenant = store.tenants[0].id.clone();

        let domain = store.add_domain(&tenant, "newschool.campusly.app").unwrap();
        assert_eq!(domain.kind, DomainKind::Subdomain);
        assert_eq!(domain.dns, DnsStatus::Verified);
    }

    #[test]
    fn test_add_domain_validation() {
        let mut store = seed_store();
        let tenant = store.tenants[0].id.clone();
        let existing = store.domains[0].hostname.clone();

        assert!(matches!(
            store.add_domain(&tenant, &existing),
            Err(AdminError::DuplicateDomain(_))
        ));
        assert!(matches!(
            store.add_domain("nobody", "fine.example.com"),
            Err(AdminError::NotFound { kind: "tenant", .. })
        ));
        assert!(matches!(
            store.add_domain(&tenant, "not a host"),
            Err(AdminError::InvalidHostname(_))
        ));
    }

    #[test]
    fn test_normalize_hostname() {
        assert_eq!(normalize_hostname("A.B.com").unwrap(), "a.b.com");
        for bad in ["", "localhost", "-a.com", "a-.com", "a..com", "a.c0m", "a.c", "a_b.com"] {
            assert!(normalize_hostname(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_remove_domain() {
        let mut store = seed_store();
        let id = store.domains[0].id.clone();
        let count = store.domains.len();

        store.remove_domain(&id).unwrap();
        assert_eq!(store.domains.len(), count - 1);
        assert!(store.diagnose_domain(&id).is_err());
    }

    #[test]
    fn test_payment_retry_then_settle() {
        let mut store = seed_store();
        let failed = store
            .payments
            .iter()
            .find(|p| p.status == PaymentStatus::Failed)
            .cloned()
            .expect("seed has a failed payment");

        let retried = store.retry_payment(&failed.id).unwrap();
        assert_eq!(retried.status, PaymentStatus::Pending);
        assert_eq!(retried.attempts, failed.attempts + 1);

        let settled = store.settle_payment(&failed.id, true).unwrap();
        assert_eq!(settled.status, PaymentStatus::Paid);

        assert!(matches!(
            store.retry_payment(&failed.id),
            Err(AdminError::InvalidTransition { action: "retry", .. })
        ));
    }

    #[test]
    fn test_refund_only_paid() {
        let mut store = seed_store();
        let paid = store
            .payments
            .iter()
            .find(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.id.clone())
            .unwrap();

        assert_eq!(
            store.refund_payment(&paid).unwrap().status,
            PaymentStatus::Refunded
        );
        assert!(store.refund_payment(&paid).is_err());
    }

    #[test]
    fn test_payment_totals_cover_every_payment() {
        let store = seed_store();
        let totals = store.payment_totals();
        let sum: u64 = PaymentStatus::ALL.iter().map(|s| totals.for_status(*s)).sum();
        let expected: u64 = store.payments.iter().map(|p| p.amount_cents).sum();
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_update_settings_validation() {
        let mut store = seed_store();

        let mut bad = store.settings.clone();
        bad.support_email = "nobody".to_string();
        assert!(matches!(
            store.update_settings(bad),
            Err(AdminError::InvalidSettings(_))
        ));

        let mut bad = store.settings.clone();
        bad.currency = "usd".to_string();
        assert!(store.update_settings(bad).is_err());

        let mut good = store.settings.clone();
        good.maintenance_mode = true;
        let log_before = store.activity.len();
        store.update_settings(good).unwrap();
        assert!(store.settings.maintenance_mode);
        assert_eq!(store.activity.len(), log_before + 1);
        assert_eq!(
            store.activity.last().unwrap().message,
            "Maintenance mode enabled"
        );
    }

    #[test]
    fn test_activity_ids_are_unique_and_increasing() {
        let mut store = seed_store();
        let tenant = store.tenants[1].id.clone();
        store.suspend_tenant(&tenant).unwrap();
        store.reactivate_tenant(&tenant).unwrap();

        let ids: Vec<u64> = store.activity.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
