//! Tenant domains and the tenants that own them

use leptos::prelude::*;

use super::widgets::{ExportButton, PageHeader, PageInfo, Pagination, SearchInput, SortHeader};
use super::{SIMULATED_LATENCY_MS, use_admin_context};
use crate::core::admin::csv::to_csv;
use crate::core::admin::diagnostics::DiagnosticReport;
use crate::core::admin::table::{DomainColumn, SortDirection, TableQuery, format_date};
use crate::core::admin::{DnsStatus, Domain, DomainKind, Tenant, TenantStatus};
use crate::ui::common::{BaseModal, ConfirmDialog, FormField, PendingButton, SelectField, status_badge};
use crate::ui::icon::{Icon, icons};
use crate::ui::latency::after_delay;

/// Value of the "all statuses" filter option
const ANY_STATUS: &str = "any";

fn dns_filter_matches(filter: &str, domain: &Domain) -> bool {
    filter == ANY_STATUS || domain.dns.to_string() == filter
}

#[component]
pub fn DomainsPage() -> impl IntoView {
    let ctx = use_admin_context();
    let query = RwSignal::new(TableQuery::sorted_by(DomainColumn::Added, SortDirection::Desc));
    let dns_filter = RwSignal::new(ANY_STATUS.to_string());
    let page = Memo::new(move |_| {
        let filter = dns_filter.get();
        ctx.store
            .with(|s| query.with(|q| q.apply(&s.domains, |d| dns_filter_matches(&filter, d))))
    });
    let info = Signal::derive(move || page.with(PageInfo::of));

    // Row whose simulated call is in flight
    let busy = RwSignal::new(None::<String>);
    let report = RwSignal::new(None::<DiagnosticReport>);
    let pending_removal = RwSignal::new(None::<Domain>);

    let verify = move |id: String| {
        busy.set(Some(id.clone()));
        after_delay(SIMULATED_LATENCY_MS * 2, move || {
            busy.try_set(None);
            if let Some(domain) = ctx.apply("Verification failed", |s| s.verify_domain(&id)) {
                ctx.notify.success(
                    "Domain verified",
                    format!("{} now serves over HTTPS", domain.hostname),
                );
            }
        });
    };

    let diagnose = move |id: String| {
        busy.set(Some(id.clone()));
        after_delay(SIMULATED_LATENCY_MS, move || {
            busy.try_set(None);
            let result = ctx.store.with_untracked(|s| s.diagnose_domain(&id));
            match result {
                Ok(found) => {
                    report.try_set(Some(found));
                }
                Err(err) => ctx.notify.error("Diagnostics failed", err.to_string()),
            }
        });
    };

    let confirm_removal = Callback::new(move |_| {
        let Some(domain) = pending_removal.get_untracked() else {
            return;
        };
        pending_removal.set(None);
        if let Some(removed) = ctx.apply("Could not remove domain", |s| s.remove_domain(&domain.id)) {
            ctx.notify.info("Domain removed", removed.hostname);
        }
    });

    let export = Callback::new(move |_| ctx.store.with(|s| to_csv(&s.domains)));

    let status_options = std::iter::once((ANY_STATUS.to_string(), "All DNS states".to_string()))
        .chain(
            [DnsStatus::Verified, DnsStatus::Pending, DnsStatus::Misconfigured]
                .map(|status| (status.to_string(), status.to_string())),
        )
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Domains" subtitle="Subdomains and custom domains of every school">
            <ExportButton filename="domains.csv" contents=export/>
        </PageHeader>

        <AddDomainForm/>

        <section class="card mt-6">
            <div class="card-header gap-4">
                <SearchInput query=query placeholder="Search hostnames"/>
                <div class="w-56">
                    <SelectField
                        label="DNS status"
                        id="domain-dns-filter"
                        value=dns_filter.into()
                        on_change=Callback::new(move |v| {
                            dns_filter.set(v);
                            query.update(|q| q.page = 0);
                        })
                        options=status_options
                    />
                </div>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <SortHeader label="Hostname" column=DomainColumn::Hostname query=query/>
                        <SortHeader label="School" column=DomainColumn::Tenant query=query/>
                        <th scope="col">"Type"</th>
                        <th scope="col">"DNS"</th>
                        <th scope="col">"SSL"</th>
                        <SortHeader label="Added" column=DomainColumn::Added query=query/>
                        <th scope="col"><span class="sr-only">"Actions"</span></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().rows
                        key=|d| (d.id.clone(), d.dns, d.ssl)
                        children=move |domain| {
                            let tenant = ctx.store.with_untracked(|s| s.tenant_name(&domain.tenant_id));
                            let row_busy = {
                                let id = domain.id.clone();
                                move || busy.with(|b| b.as_deref() == Some(id.as_str()))
                            };
                            let can_verify = domain.dns != DnsStatus::Verified;
                            let is_custom = domain.kind == DomainKind::Custom;
                            let (verify_id, diagnose_id) = (domain.id.clone(), domain.id.clone());
                            let remove = domain.clone();
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{domain.hostname.clone()}</td>
                                    <td>{tenant}</td>
                                    <td>{domain.kind.to_string()}</td>
                                    <td>{status_badge(domain.dns)}</td>
                                    <td>{status_badge(domain.ssl)}</td>
                                    <td>{format_date(&domain.added_at)}</td>
                                    <td class="text-right whitespace-nowrap">
                                        {can_verify.then(|| view! {
                                            <PendingButton
                                                text="Verify"
                                                pending_text="Checking..."
                                                class="btn-ghost"
                                                pending=Signal::derive(row_busy.clone())
                                                on_click=Callback::new(move |_| verify(verify_id.clone()))
                                            />
                                        })}
                                        <button
                                            class="btn-ghost"
                                            disabled=row_busy.clone()
                                            on:click=move |_| diagnose(diagnose_id.clone())
                                        >
                                            "Diagnose"
                                        </button>
                                        {is_custom.then(|| view! {
                                            <button
                                                class="btn-icon"
                                                title="Remove domain"
                                                on:click=move |_| pending_removal.set(Some(remove.clone()))
                                            >
                                                <Icon name=icons::TRASH class="icon-standalone"/>
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pagination info=info query=query/>
        </section>

        <TenantsSection/>

        <DiagnosticsModal report=report/>

        <ConfirmDialog
            title="Remove domain"
            message=Signal::derive(move || {
                pending_removal.with(|d| {
                    d.as_ref()
                        .map(|d| format!("Stop serving {}? Visitors will get an error page.", d.hostname))
                        .unwrap_or_default()
                })
            })
            is_open=Signal::derive(move || pending_removal.with(Option::is_some))
            on_confirm=confirm_removal
            on_cancel=Callback::new(move |_| pending_removal.set(None))
            confirm_text="Remove"
            is_destructive=true
        />
    }
}

#[component]
fn AddDomainForm() -> impl IntoView {
    let ctx = use_admin_context();
    let tenant_options = ctx.store.with_untracked(|s| {
        s.tenants
            .iter()
            .map(|t| (t.id.clone(), t.name.clone()))
            .collect::<Vec<_>>()
    });
    let tenant_id = RwSignal::new(
        tenant_options
            .first()
            .map(|(id, _)| id.clone())
            .unwrap_or_default(),
    );
    let hostname = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let tenant = tenant_id.get_untracked();
        let host = hostname.get_untracked();
        saving.set(true);
        after_delay(SIMULATED_LATENCY_MS, move || {
            saving.try_set(false);
            if let Some(domain) = ctx.apply("Could not add domain", |s| s.add_domain(&tenant, &host)) {
                let next_step = if domain.dns == DnsStatus::Verified {
                    "It is live now.".to_string()
                } else {
                    format!("Point a CNAME for {} at our edge, then verify.", domain.hostname)
                };
                ctx.notify.success("Domain added", next_step);
                hostname.try_set(String::new());
            }
        });
    });

    view! {
        <section class="card p-6">
            <h2 class="title-lg mb-4">"Add domain"</h2>
            <div class="grid md:grid-cols-3 gap-4 items-end">
                <SelectField
                    label="School"
                    id="domain-tenant"
                    value=tenant_id.into()
                    on_change=Callback::new(move |v| tenant_id.set(v))
                    options=tenant_options
                />
                <FormField
                    label="Hostname"
                    id="domain-hostname"
                    required=true
                    placeholder="portal.school.edu"
                    value=hostname.into()
                    on_input=Callback::new(move |v| hostname.set(v))
                />
                <div>
                    <PendingButton text="Add domain" pending_text="Adding..." pending=saving on_click=submit/>
                </div>
            </div>
        </section>
    }
}

/// Tenants with suspend/reactivate actions
#[component]
fn TenantsSection() -> impl IntoView {
    let ctx = use_admin_context();
    let tenants = Memo::new(move |_| ctx.store.with(|s| s.tenants.clone()));

    let set_suspended = move |tenant: Tenant, suspend: bool| {
        let result = if suspend {
            ctx.apply("Could not suspend school", |s| s.suspend_tenant(&tenant.id))
        } else {
            ctx.apply("Could not reactivate school", |s| s.reactivate_tenant(&tenant.id))
        };
        if result.is_some() {
            let verb = if suspend { "suspended" } else { "reactivated" };
            ctx.notify.warning("School updated", format!("{} was {}", tenant.name, verb));
        }
    };

    view! {
        <section class="card mt-6">
            <div class="card-header">
                <h2 class="title-lg">"Schools"</h2>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Plan"</th>
                        <th scope="col">"Students"</th>
                        <th scope="col">"Status"</th>
                        <th scope="col"><span class="sr-only">"Actions"</span></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || tenants.get()
                        key=|t| (t.id.clone(), t.status)
                        children=move |tenant| {
                            let plan = ctx.store.with_untracked(|s| {
                                s.plan(&tenant.plan_id)
                                    .map(|p| p.name.clone())
                                    .unwrap_or_else(|| tenant.plan_id.clone())
                            });
                            let suspended = tenant.status == TenantStatus::Suspended;
                            let target = tenant.clone();
                            view! {
                                <tr>
                                    <td>{tenant.name.clone()}</td>
                                    <td>{plan}</td>
                                    <td>{tenant.students}</td>
                                    <td>{status_badge(tenant.status)}</td>
                                    <td class="text-right">
                                        <button
                                            class=if suspended { "btn-ghost" } else { "btn-ghost text-theme-error" }
                                            on:click=move |_| set_suspended(target.clone(), !suspended)
                                        >
                                            {if suspended { "Reactivate" } else { "Suspend" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn DiagnosticsModal(report: RwSignal<Option<DiagnosticReport>>) -> impl IntoView {
    view! {
        <BaseModal
            title="Domain diagnostics"
            subtitle=Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.hostname.clone())))
            is_open=Signal::derive(move || report.with(Option::is_some))
            on_close=Callback::new(move |_| report.set(None))
            max_width="max-w-lg"
        >
            {move || {
                report.get().map(|r| {
                    let overall = r.overall();
                    view! {
                        <div class="flex items-center gap-2 mb-4">
                            <span class="text-sm text-theme-secondary">"Overall"</span>
                            {status_badge(overall)}
                        </div>
                        <ul class="space-y-3">
                            {r.checks
                                .into_iter()
                                .map(|check| view! {
                                    <li class="flex items-start gap-3">
                                        {status_badge(check.verdict)}
                                        <div>
                                            <p class="font-medium text-theme-primary">{check.kind.to_string()}</p>
                                            <p class="text-sm text-theme-secondary">{check.detail}</p>
                                        </div>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                })
            }}
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::seed::seed_domains;

    #[test]
    fn test_dns_filter() {
        let domains = seed_domains();
        assert!(domains.iter().all(|d| dns_filter_matches(ANY_STATUS, d)));

        let pending = domains
            .iter()
            .filter(|d| dns_filter_matches("pending", d))
            .collect::<Vec<_>>();
        assert!(pending.iter().all(|d| d.dns == DnsStatus::Pending));
    }
}
