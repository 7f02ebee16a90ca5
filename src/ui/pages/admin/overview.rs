use leptos::prelude::*;
use leptos_router::components::A;

use super::use_admin_context;
use super::widgets::PageHeader;
use crate::core::admin::table::format_datetime;
use crate::core::admin::{DnsStatus, PaymentStatus, SslStatus, TenantStatus, format_cents};
use crate::ui::common::{Badge, BadgeVariant};

/// Entries shown in the recent activity card
const RECENT_ACTIVITY: usize = 5;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    let active_tenants = Memo::new(move |_| {
        store.with(|s| {
            s.tenants
                .iter()
                .filter(|t| t.status != TenantStatus::Suspended)
                .count()
        })
    });
    let mrr = Memo::new(move |_| store.with(|s| s.monthly_recurring_cents()));
    let failed = Memo::new(move |_| {
        store.with(|s| {
            let count = s
                .payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Failed)
                .count();
            (count, s.payment_totals().failed_cents)
        })
    });
    let domain_issues = Memo::new(move |_| {
        store.with(|s| {
            s.domains
                .iter()
                .filter(|d| d.dns != DnsStatus::Verified || d.ssl != SslStatus::Active)
                .count()
        })
    });
    let recent = Memo::new(move |_| {
        store.with(|s| {
            let mut entries = s.activity.clone();
            entries.sort_by(|a, b| b.at.cmp(&a.at).then(b.id.cmp(&a.id)));
            entries.truncate(RECENT_ACTIVITY);
            entries
        })
    });

    view! {
        <PageHeader title="Overview" subtitle="Platform health at a glance"/>

        <div class="admin-stat-grid">
            <StatCard
                label="Active schools"
                value=Signal::derive(move || active_tenants.get().to_string())
                href="/admin/domains"
            />
            <StatCard
                label="Monthly recurring revenue"
                value=Signal::derive(move || format!("${}", format_cents(mrr.get())))
                href="/admin/plans"
            />
            <StatCard
                label="Failed payments"
                value=Signal::derive(move || {
                    let (count, cents) = failed.get();
                    format!("{count} (${})", format_cents(cents))
                })
                href="/admin/payments"
            />
            <StatCard
                label="Domains needing attention"
                value=Signal::derive(move || domain_issues.get().to_string())
                href="/admin/domains"
            />
        </div>

        <section class="card mt-6">
            <div class="card-header">
                <h2 class="title-lg">"Recent activity"</h2>
                <A href="/admin/activity" attr:class="text-sm text-theme-accent">"View all"</A>
            </div>
            <ul class="divide-y divide-theme">
                <For
                    each=move || recent.get()
                    key=|entry| entry.id
                    children=move |entry| view! {
                        <li class="flex items-center gap-3 px-6 py-3">
                            <Badge variant=BadgeVariant::Default>{entry.category.to_string()}</Badge>
                            <span class="flex-1 text-sm text-theme-primary">{entry.message}</span>
                            <span class="text-xs text-theme-muted">{format_datetime(&entry.at)}</span>
                        </li>
                    }
                />
            </ul>
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>, href: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="card admin-stat">
            <p class="text-sm text-theme-muted">{label}</p>
            <p class="text-2xl font-bold text-theme-primary">{move || value.get()}</p>
        </A>
    }
}
