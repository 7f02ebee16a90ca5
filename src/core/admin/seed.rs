//! Mock data the admin console starts from

use chrono::{DateTime, Utc};

use super::models::{
    ActivityCategory, ActivityEntry, DnsStatus, Domain, DomainKind, Payment, PaymentMethod,
    PaymentStatus, Plan, SslStatus, Tenant, TenantStatus,
};
use super::store::AdminStore;

/// 2025-01-01T00:00:00Z
const EPOCH: i64 = 1_735_689_600;
const DAY: i64 = 86_400;

fn day(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH + offset * DAY, 0).unwrap_or_default()
}

fn plan(id: &str, name: &str, price: u64, max: Option<u32>, features: &[&str], age: i64) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        monthly_price_cents: price,
        max_students: max,
        features: features.iter().map(|f| f.to_string()).collect(),
        is_active: true,
        created_at: day(age),
    }
}

fn tenant(id: &str, name: &str, plan_id: &str, status: TenantStatus, students: u32) -> Tenant {
    Tenant {
        id: id.to_string(),
        name: name.to_string(),
        plan_id: plan_id.to_string(),
        status,
        students,
    }
}

fn domain(
    id: &str,
    tenant_id: &str,
    hostname: &str,
    kind: DomainKind,
    dns: DnsStatus,
    ssl: SslStatus,
    added: i64,
) -> Domain {
    Domain {
        id: id.to_string(),
        tenant_id: tenant_id.to_string(),
        hostname: hostname.to_string(),
        kind,
        dns,
        ssl,
        added_at: day(added),
    }
}

pub fn seed_plans() -> Vec<Plan> {
    vec![
        plan(
            "plan-starter",
            "Starter",
            2_900,
            Some(200),
            &["Attendance", "Gradebook", "Parent portal"],
            0,
        ),
        plan(
            "plan-growth",
            "Growth",
            7_900,
            Some(1_000),
            &["Everything in Starter", "Timetabling", "Fee collection", "SMS alerts"],
            3,
        ),
        plan(
            "plan-district",
            "District",
            19_900,
            None,
            &["Everything in Growth", "Multi-campus", "SSO", "Dedicated success manager"],
            10,
        ),
    ]
}

pub fn seed_tenants() -> Vec<Tenant> {
    vec![
        tenant("oakridge", "Oakridge Academy", "plan-growth", TenantStatus::Active, 640),
        tenant("riverside", "Riverside High", "plan-starter", TenantStatus::Active, 180),
        tenant("northfield", "Northfield District", "plan-district", TenantStatus::Active, 5_200),
        tenant("maple", "Maple Montessori", "plan-starter", TenantStatus::Trial, 75),
        tenant("sunrise", "Sunrise Prep", "plan-growth", TenantStatus::Suspended, 410),
    ]
}

pub fn seed_domains() -> Vec<Domain> {
    use DnsStatus as Dns;
    use DomainKind as Kind;
    use SslStatus as Ssl;

    vec![
        domain("dom-1", "oakridge", "oakridge.campusly.app", Kind::Subdomain, Dns::Verified, Ssl::Active, 4),
        domain("dom-2", "oakridge", "portal.oakridge.edu", Kind::Custom, Dns::Verified, Ssl::Active, 12),
        domain("dom-3", "riverside", "riverside.campusly.app", Kind::Subdomain, Dns::Verified, Ssl::Active, 20),
        domain("dom-4", "northfield", "learn.northfield.k12.us", Kind::Custom, Dns::Pending, Ssl::Provisioning, 41),
        domain("dom-5", "maple", "maple.campusly.app", Kind::Subdomain, Dns::Verified, Ssl::Active, 55),
        domain("dom-6", "sunrise", "sunriseprep.org", Kind::Custom, Dns::Misconfigured, Ssl::Expired, 30),
    ]
}

pub fn seed_payments() -> Vec<Payment> {
    let tenants = ["oakridge", "riverside", "northfield", "sunrise"];
    let amounts = [7_900, 2_900, 19_900, 7_900];
    let methods = [
        PaymentMethod::Card,
        PaymentMethod::Card,
        PaymentMethod::Invoice,
        PaymentMethod::BankTransfer,
    ];

    (0..24)
        .map(|i| {
            let who = i % tenants.len();
            let status = match i {
                7 | 19 => PaymentStatus::Failed,
                23 => PaymentStatus::Pending,
                11 => PaymentStatus::Refunded,
                // Sunrise stopped paying before suspension
                _ if who == 3 && i > 14 => PaymentStatus::Failed,
                _ => PaymentStatus::Paid,
            };
            Payment {
                id: format!("pay-{:03}", i + 1),
                tenant_id: tenants[who].to_string(),
                invoice: format!("INV-2025-{:04}", i + 1),
                amount_cents: amounts[who],
                currency: "USD".to_string(),
                status,
                method: methods[who],
                attempts: if status == PaymentStatus::Failed { 2 } else { 1 },
                created_at: day(i as i64 * 7),
            }
        })
        .collect()
}

pub fn seed_activity() -> Vec<ActivityEntry> {
    let entries: [(i64, &str, ActivityCategory, &str); 8] = [
        (0, "system", ActivityCategory::Plan, "Seeded default plans"),
        (4, "ops@campusly.app", ActivityCategory::Tenant, "Onboarded Oakridge Academy"),
        (12, "ops@campusly.app", ActivityCategory::Domain, "Added domain portal.oakridge.edu for Oakridge Academy"),
        (20, "ops@campusly.app", ActivityCategory::Tenant, "Onboarded Riverside High"),
        (41, "ops@campusly.app", ActivityCategory::Domain, "Added domain learn.northfield.k12.us for Northfield District"),
        (49, "billing-bot", ActivityCategory::Payment, "Payment INV-2025-0008 failed: card declined"),
        (77, "billing-bot", ActivityCategory::Payment, "Refunded payment INV-2025-0012"),
        (140, "admin@campusly.app", ActivityCategory::Tenant, "Suspended tenant Sunrise Prep"),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (offset, actor, category, message))| ActivityEntry {
            id: i as u64 + 1,
            at: day(*offset),
            actor: actor.to_string(),
            category: *category,
            message: message.to_string(),
        })
        .collect()
}

/// Store populated with every seed collection
pub fn seed_store() -> AdminStore {
    AdminStore::new(
        seed_plans(),
        seed_tenants(),
        seed_domains(),
        seed_payments(),
        seed_activity(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tenant_references_a_plan() {
        let store = seed_store();
        for tenant in &store.tenants {
            assert!(store.plan(&tenant.plan_id).is_some(), "{}", tenant.id);
        }
    }

    #[test]
    fn test_every_domain_references_a_tenant() {
        let store = seed_store();
        for domain in &store.domains {
            assert!(store.tenant(&domain.tenant_id).is_some(), "{}", domain.hostname);
        }
    }

    #[test]
    fn test_seed_covers_every_payment_status() {
        let payments = seed_payments();
        for status in PaymentStatus::ALL {
            assert!(payments.iter().any(|p| p.status == status), "{status}");
        }
    }

    #[test]
    fn test_activity_ids_continue_after_seed() {
        let mut store = seed_store();
        let last = store.activity.last().unwrap().id;
        store.suspend_tenant("oakridge").unwrap();
        assert_eq!(store.activity.last().unwrap().id, last + 1);
    }
}
