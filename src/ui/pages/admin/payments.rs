//! Payments: totals by status, filtering, retry and refund

use leptos::prelude::*;

use super::widgets::{ExportButton, PageHeader, PageInfo, Pagination, SearchInput, SortHeader};
use super::{SIMULATED_LATENCY_MS, use_admin_context};
use crate::core::admin::csv::to_csv;
use crate::core::admin::table::{PaymentColumn, SortDirection, TableQuery, format_date};
use crate::core::admin::{Payment, PaymentStatus, format_cents};
use crate::ui::common::{ConfirmDialog, SelectField, Spinner, SpinnerSize, status_badge};
use crate::ui::latency::after_delay;

const ANY_STATUS: &str = "any";

fn status_filter_matches(filter: &str, payment: &Payment) -> bool {
    filter == ANY_STATUS || payment.status.to_string() == filter
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let ctx = use_admin_context();
    let query = RwSignal::new(TableQuery::sorted_by(PaymentColumn::Date, SortDirection::Desc));
    let status_filter = RwSignal::new(ANY_STATUS.to_string());
    let page = Memo::new(move |_| {
        let filter = status_filter.get();
        ctx.store.with(|s| {
            query.with(|q| q.apply(&s.payments, |p| status_filter_matches(&filter, p)))
        })
    });
    let info = Signal::derive(move || page.with(PageInfo::of));
    let totals = Memo::new(move |_| ctx.store.with(|s| s.payment_totals()));

    let retrying = RwSignal::new(None::<String>);
    let pending_refund = RwSignal::new(None::<Payment>);

    // A retry is queued at once and settles after the simulated round trip
    let retry = move |id: String| {
        if ctx.apply("Could not retry payment", |s| s.retry_payment(&id)).is_none() {
            return;
        }
        retrying.set(Some(id.clone()));
        after_delay(SIMULATED_LATENCY_MS * 2, move || {
            retrying.try_set(None);
            if let Some(payment) = ctx.apply("Retry failed", |s| s.settle_payment(&id, true)) {
                ctx.notify.success(
                    "Payment collected",
                    format!("{} paid ${}", payment.invoice, format_cents(payment.amount_cents)),
                );
            }
        });
    };

    let confirm_refund = Callback::new(move |_| {
        let Some(payment) = pending_refund.get_untracked() else {
            return;
        };
        pending_refund.set(None);
        if let Some(refunded) = ctx.apply("Could not refund payment", |s| s.refund_payment(&payment.id)) {
            ctx.notify.info(
                "Payment refunded",
                format!("{} refunded ${}", refunded.invoice, format_cents(refunded.amount_cents)),
            );
        }
    });

    let export = Callback::new(move |_| ctx.store.with(|s| to_csv(&s.payments)));

    let status_options = std::iter::once((ANY_STATUS.to_string(), "All statuses".to_string()))
        .chain(
            PaymentStatus::ALL
                .iter()
                .map(|status| (status.to_string(), status.to_string())),
        )
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Payments" subtitle="Subscription invoices across all schools">
            <ExportButton filename="payments.csv" contents=export/>
        </PageHeader>

        <div class="admin-stat-grid">
            {PaymentStatus::ALL
                .into_iter()
                .map(|status| view! {
                    <button
                        class="card admin-stat text-left"
                        class:admin-stat-selected=move || status_filter.get() == status.to_string()
                        on:click=move |_| {
                            status_filter.set(status.to_string());
                            query.update(|q| q.page = 0);
                        }
                    >
                        <div class="flex items-center justify-between">
                            {status_badge(status)}
                        </div>
                        <p class="text-2xl font-bold text-theme-primary mt-2">
                            {move || format!("${}", format_cents(totals.get().for_status(status)))}
                        </p>
                    </button>
                })
                .collect_view()}
        </div>

        <section class="card mt-6">
            <div class="card-header gap-4">
                <SearchInput query=query placeholder="Search invoice or school"/>
                <div class="w-56">
                    <SelectField
                        label="Status"
                        id="payment-status-filter"
                        value=status_filter.into()
                        on_change=Callback::new(move |v| {
                            status_filter.set(v);
                            query.update(|q| q.page = 0);
                        })
                        options=status_options
                    />
                </div>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <SortHeader label="Invoice" column=PaymentColumn::Invoice query=query/>
                        <SortHeader label="School" column=PaymentColumn::Tenant query=query/>
                        <SortHeader label="Amount" column=PaymentColumn::Amount query=query/>
                        <th scope="col">"Method"</th>
                        <th scope="col">"Status"</th>
                        <th scope="col">"Attempts"</th>
                        <SortHeader label="Date" column=PaymentColumn::Date query=query/>
                        <th scope="col"><span class="sr-only">"Actions"</span></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().rows
                        key=|p| (p.id.clone(), p.status, p.attempts)
                        children=move |payment| {
                            let tenant = ctx.store.with_untracked(|s| s.tenant_name(&payment.tenant_id));
                            let id = payment.id.clone();
                            let is_retrying = Signal::derive(move || {
                                retrying.with(|r| r.as_deref() == Some(id.as_str()))
                            });
                            let action = match payment.status {
                                PaymentStatus::Failed => {
                                    let id = payment.id.clone();
                                    Some(view! {
                                        <button class="btn-ghost" on:click=move |_| retry(id.clone())>
                                            "Retry"
                                        </button>
                                    }.into_any())
                                }
                                PaymentStatus::Paid => {
                                    let target = payment.clone();
                                    Some(view! {
                                        <button
                                            class="btn-ghost"
                                            on:click=move |_| pending_refund.set(Some(target.clone()))
                                        >
                                            "Refund"
                                        </button>
                                    }.into_any())
                                }
                                PaymentStatus::Pending => Some(view! {
                                    <Show when=move || is_retrying.get()>
                                        <span class="text-sm text-theme-muted">
                                            <Spinner size=SpinnerSize::Small class="mr-2"/>
                                            "Retrying..."
                                        </span>
                                    </Show>
                                }.into_any()),
                                PaymentStatus::Refunded => None,
                            };
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{payment.invoice.clone()}</td>
                                    <td>{tenant}</td>
                                    <td>{format!("{} {}", format_cents(payment.amount_cents), payment.currency)}</td>
                                    <td>{payment.method.to_string()}</td>
                                    <td>{status_badge(payment.status)}</td>
                                    <td>{payment.attempts}</td>
                                    <td>{format_date(&payment.created_at)}</td>
                                    <td class="text-right">{action}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pagination info=info query=query/>
        </section>

        <ConfirmDialog
            title="Refund payment"
            message=Signal::derive(move || {
                pending_refund.with(|p| {
                    p.as_ref()
                        .map(|p| format!(
                            "Refund {} for {} {}? The school is notified by email.",
                            p.invoice,
                            format_cents(p.amount_cents),
                            p.currency
                        ))
                        .unwrap_or_default()
                })
            })
            is_open=Signal::derive(move || pending_refund.with(Option::is_some))
            on_confirm=confirm_refund
            on_cancel=Callback::new(move |_| pending_refund.set(None))
            confirm_text="Refund"
            is_destructive=true
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::seed::seed_payments;

    #[test]
    fn test_status_filter() {
        let payments = seed_payments();
        let failed = payments
            .iter()
            .filter(|p| status_filter_matches("failed", p))
            .count();
        let expected = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Failed)
            .count();
        assert_eq!(failed, expected);
        assert!(failed > 0);
        assert!(payments.iter().all(|p| status_filter_matches(ANY_STATUS, p)));
    }
}
