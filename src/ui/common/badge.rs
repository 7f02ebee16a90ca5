use std::fmt::Display;

use leptos::prelude::*;

use crate::core::admin::diagnostics::Verdict;
use crate::core::admin::{DnsStatus, PaymentStatus, SslStatus, TenantStatus};

/// Badge variant types for different use cases
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default neutral badge
    Default,
    /// Primary color badge
    Primary,
    /// Success/positive badge (green)
    Success,
    /// Warning badge (yellow/orange)
    Warning,
    /// Danger/error badge (red)
    Danger,
    /// Info badge (blue)
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Danger => "badge-danger",
            BadgeVariant::Info => "badge-info",
        }
    }
}

/// Badge component for labels and status indicators
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Whether badge is rounded/pill-shaped
    #[prop(default = true)]
    rounded: bool,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let shape_class = if rounded { " badge-rounded" } else { "" };
    let full_classes = format!("badge badge-sm {}{} {}", variant.class(), shape_class, class);

    view! {
        <span class=full_classes.trim_end().to_string()>
            {children()}
        </span>
    }
}

/// Colour used when a status is shown as a badge
pub trait BadgeTone {
    fn tone(&self) -> BadgeVariant;
}

impl BadgeTone for PaymentStatus {
    fn tone(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Paid => BadgeVariant::Success,
            PaymentStatus::Pending => BadgeVariant::Info,
            PaymentStatus::Failed => BadgeVariant::Danger,
            PaymentStatus::Refunded => BadgeVariant::Default,
        }
    }
}

impl BadgeTone for DnsStatus {
    fn tone(&self) -> BadgeVariant {
        match self {
            DnsStatus::Verified => BadgeVariant::Success,
            DnsStatus::Pending => BadgeVariant::Warning,
            DnsStatus::Misconfigured => BadgeVariant::Danger,
        }
    }
}

impl BadgeTone for SslStatus {
    fn tone(&self) -> BadgeVariant {
        match self {
            SslStatus::Active => BadgeVariant::Success,
            SslStatus::Provisioning => BadgeVariant::Warning,
            SslStatus::Expired => BadgeVariant::Danger,
        }
    }
}

impl BadgeTone for TenantStatus {
    fn tone(&self) -> BadgeVariant {
        match self {
            TenantStatus::Active => BadgeVariant::Success,
            TenantStatus::Trial => BadgeVariant::Primary,
            TenantStatus::Suspended => BadgeVariant::Danger,
        }
    }
}

impl BadgeTone for Verdict {
    fn tone(&self) -> BadgeVariant {
        match self {
            Verdict::Pass => BadgeVariant::Success,
            Verdict::Warn => BadgeVariant::Warning,
            Verdict::Fail => BadgeVariant::Danger,
        }
    }
}

/// Badge coloured by the status it shows
pub fn status_badge<T: BadgeTone + Display>(status: T) -> impl IntoView {
    let variant = status.tone();
    let label = status.to_string();
    view! { <Badge variant=variant>{label}</Badge> }
}

/// Active/inactive badge for boolean flags
#[component]
pub fn ActiveBadge(
    /// Whether status is active/true
    active: bool,
    /// Text to show when active
    #[prop(default = "Active")]
    active_text: &'static str,
    /// Text to show when inactive
    #[prop(default = "Inactive")]
    inactive_text: &'static str,
) -> impl IntoView {
    let (variant, text) = if active {
        (BadgeVariant::Success, active_text)
    } else {
        (BadgeVariant::Default, inactive_text)
    };

    view! { <Badge variant=variant>{text}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_states_are_danger() {
        assert_eq!(PaymentStatus::Failed.tone(), BadgeVariant::Danger);
        assert_eq!(DnsStatus::Misconfigured.tone(), BadgeVariant::Danger);
        assert_eq!(SslStatus::Expired.tone(), BadgeVariant::Danger);
        assert_eq!(TenantStatus::Suspended.tone(), BadgeVariant::Danger);
        assert_eq!(Verdict::Fail.tone(), BadgeVariant::Danger);
    }

    #[test]
    fn test_variant_classes_are_distinct() {
        let classes = [
            BadgeVariant::Default,
            BadgeVariant::Primary,
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Danger,
            BadgeVariant::Info,
        ]
        .map(|v| v.class());
        let mut unique = classes.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), classes.len());
    }
}
