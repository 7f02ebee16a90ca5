//! Simulated domain diagnostics
//!
//! Nothing is resolved over the network. The checks read the recorded DNS
//! and SSL state of a domain and the status of its tenant.

use super::models::{DnsStatus, Domain, DomainKind, SslStatus, TenantStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Verdict {
    #[display("pass")]
    Pass,
    #[display("warning")]
    Warn,
    #[display("fail")]
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CheckKind {
    #[display("DNS records")]
    Dns,
    #[display("CNAME target")]
    Cname,
    #[display("TLS certificate")]
    Certificate,
    #[display("Reachability")]
    Reachability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCheck {
    pub kind: CheckKind,
    pub verdict: Verdict,
    pub detail: String,
}

impl DiagnosticCheck {
    fn new(kind: CheckKind, verdict: Verdict, detail: impl Into<String>) -> Self {
        Self {
            kind,
            verdict,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub hostname: String,
    pub checks: Vec<DiagnosticCheck>,
}

impl DiagnosticReport {
    /// Worst verdict across all checks
    pub fn overall(&self) -> Verdict {
        self.checks
            .iter()
            .map(|c| c.verdict)
            .max()
            .unwrap_or(Verdict::Pass)
    }
}

/// Platform host every custom domain must CNAME to
pub const CNAME_TARGET: &str = "tenants.campusly.app";

pub fn diagnose(domain: &Domain, tenant_status: TenantStatus) -> DiagnosticReport {
    let mut checks = Vec::with_capacity(4);

    checks.push(match domain.dns {
        DnsStatus::Verified => {
            DiagnosticCheck::new(CheckKind::Dns, Verdict::Pass, "TXT verification record found")
        }
        DnsStatus::Pending => DiagnosticCheck::new(
            CheckKind::Dns,
            Verdict::Warn,
            "Verification record not visible yet; propagation can take up to 48h",
        ),
        DnsStatus::Misconfigured => DiagnosticCheck::new(
            CheckKind::Dns,
            Verdict::Fail,
            "Verification record has an unexpected value",
        ),
    });

    if domain.kind == DomainKind::Custom {
        checks.push(match domain.dns {
            DnsStatus::Misconfigured => DiagnosticCheck::new(
                CheckKind::Cname,
                Verdict::Fail,
                format!("CNAME does not point to {CNAME_TARGET}"),
            ),
            _ => DiagnosticCheck::new(
                CheckKind::Cname,
                Verdict::Pass,
                format!("CNAME points to {CNAME_TARGET}"),
            ),
        });
    }

    checks.push(match domain.ssl {
        SslStatus::Active => {
            DiagnosticCheck::new(CheckKind::Certificate, Verdict::Pass, "Certificate valid")
        }
        SslStatus::Provisioning => DiagnosticCheck::new(
            CheckKind::Certificate,
            Verdict::Warn,
            "Certificate is being issued",
        ),
        SslStatus::Expired => {
            DiagnosticCheck::new(CheckKind::Certificate, Verdict::Fail, "Certificate expired")
        }
    });

    checks.push(match (tenant_status, domain.dns) {
        (TenantStatus::Suspended, _) => DiagnosticCheck::new(
            CheckKind::Reachability,
            Verdict::Warn,
            "Tenant is suspended; visitors see the suspension page",
        ),
        (_, DnsStatus::Verified) => {
            DiagnosticCheck::new(CheckKind::Reachability, Verdict::Pass, "HTTP 200 in 120 ms")
        }
        _ => DiagnosticCheck::new(
            CheckKind::Reachability,
            Verdict::Fail,
            "Host does not resolve to the platform",
        ),
    });

    DiagnosticReport {
        hostname: domain.hostname.clone(),
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn domain(kind: DomainKind, dns: DnsStatus, ssl: SslStatus) -> Domain {
        Domain {
            id: "d1".to_string(),
            tenant_id: "t1".to_string(),
            hostname: "portal.oakridge.edu".to_string(),
            kind,
            dns,
            ssl,
            added_at: DateTime::default(),
        }
    }

    #[test]
    fn test_healthy_custom_domain_passes() {
        let report = diagnose(
            &domain(DomainKind::Custom, DnsStatus::Verified, SslStatus::Active),
            TenantStatus::Active,
        );
        assert_eq!(report.checks.len(), 4);
        assert_eq!(report.overall(), Verdict::Pass);
    }

    #[test]
    fn test_subdomain_skips_cname_check() {
        let report = diagnose(
            &domain(DomainKind::Subdomain, DnsStatus::Verified, SslStatus::Active),
            TenantStatus::Active,
        );
        assert!(report.checks.iter().all(|c| c.kind != CheckKind::Cname));
    }

    #[test]
    fn test_pending_dns_is_failing_reachability() {
        let report = diagnose(
            &domain(DomainKind::Custom, DnsStatus::Pending, SslStatus::Provisioning),
            TenantStatus::Trial,
        );
        assert_eq!(report.overall(), Verdict::Fail);
        assert_eq!(report.checks[0].verdict, Verdict::Warn);
    }

    #[test]
    fn test_suspended_tenant_warns() {
        let report = diagnose(
            &domain(DomainKind::Subdomain, DnsStatus::Verified, SslStatus::Active),
            TenantStatus::Suspended,
        );
        assert_eq!(report.overall(), Verdict::Warn);
    }
}
