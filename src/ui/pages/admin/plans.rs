//! Plan catalogue: list, create, activate/deactivate, delete

use leptos::prelude::*;

use super::widgets::{ExportButton, PageHeader, PageInfo, Pagination, SearchInput, SortHeader};
use super::{SIMULATED_LATENCY_MS, use_admin_context};
use crate::core::admin::csv::to_csv;
use crate::core::admin::table::{PlanColumn, SortDirection, TableQuery, format_date};
use crate::core::admin::{NewPlan, Plan, format_cents};
use crate::ui::common::{ActiveBadge, ConfirmDialog, FormField, PendingButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::latency::after_delay;

/// Parse a dollar amount such as `29`, `29.5` or `$29.99` into cents
pub fn parse_price_cents(input: &str) -> Option<u64> {
    let input = input.trim().trim_start_matches('$');
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };
    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let dollars: u64 = whole.parse().ok()?;
    let cents: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    dollars.checked_mul(100)?.checked_add(cents)
}

/// Empty input means unlimited
pub fn parse_student_limit(input: &str) -> Result<Option<u32>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u32>() {
        Ok(0) | Err(_) => Err("Student limit must be a positive whole number".to_string()),
        Ok(n) => Ok(Some(n)),
    }
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let ctx = use_admin_context();
    let query = RwSignal::new(TableQuery::sorted_by(PlanColumn::Price, SortDirection::Asc));
    let page = Memo::new(move |_| ctx.store.with(|s| query.with(|q| q.apply(&s.plans, |_| true))));
    let info = Signal::derive(move || page.with(PageInfo::of));

    let pending_delete = RwSignal::new(None::<Plan>);
    let delete_message = Signal::derive(move || {
        pending_delete.with(|p| {
            p.as_ref()
                .map(|plan| format!("Delete the \"{}\" plan? This cannot be undone.", plan.name))
                .unwrap_or_default()
        })
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(plan) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if let Some(removed) = ctx.apply("Could not delete plan", |s| s.delete_plan(&plan.id)) {
            ctx.notify
                .success("Plan deleted", format!("\"{}\" was removed", removed.name));
        }
    });

    let toggle_active = move |plan: Plan| {
        let active = !plan.is_active;
        if ctx
            .apply("Could not update plan", |s| s.set_plan_active(&plan.id, active))
            .is_some()
        {
            let verb = if active { "activated" } else { "deactivated" };
            ctx.notify.info("Plan updated", format!("\"{}\" {}", plan.name, verb));
        }
    };

    let export = Callback::new(move |_| ctx.store.with(|s| to_csv(&s.plans)));

    view! {
        <PageHeader title="Plans" subtitle="What schools can subscribe to">
            <ExportButton filename="plans.csv" contents=export/>
        </PageHeader>

        <NewPlanForm/>

        <section class="card mt-6">
            <div class="card-header">
                <SearchInput query=query placeholder="Search plans or features"/>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <SortHeader label="Name" column=PlanColumn::Name query=query/>
                        <SortHeader label="Monthly" column=PlanColumn::Price query=query/>
                        <th scope="col">"Yearly"</th>
                        <SortHeader label="Students" column=PlanColumn::Students query=query/>
                        <th scope="col">"Schools"</th>
                        <th scope="col">"Status"</th>
                        <SortHeader label="Created" column=PlanColumn::Created query=query/>
                        <th scope="col"><span class="sr-only">"Actions"</span></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().rows
                        key=|plan| (plan.id.clone(), plan.is_active)
                        children=move |plan| {
                            let tenants = ctx.store.with_untracked(|s| s.tenants_on_plan(&plan.id));
                            let toggle_plan = plan.clone();
                            let delete_plan = plan.clone();
                            view! {
                                <tr>
                                    <td>
                                        <div class="font-medium">{plan.name.clone()}</div>
                                        <div class="text-xs text-theme-muted">{plan.features.join(", ")}</div>
                                    </td>
                                    <td>{format!("${}", format_cents(plan.monthly_price_cents))}</td>
                                    <td>{format!("${}", format_cents(plan.yearly_price_cents()))}</td>
                                    <td>{plan.student_limit_label()}</td>
                                    <td>{tenants}</td>
                                    <td><ActiveBadge active=plan.is_active/></td>
                                    <td>{format_date(&plan.created_at)}</td>
                                    <td class="text-right whitespace-nowrap">
                                        <button class="btn-ghost" on:click=move |_| toggle_active(toggle_plan.clone())>
                                            {if plan.is_active { "Deactivate" } else { "Activate" }}
                                        </button>
                                        <button
                                            class="btn-icon"
                                            title="Delete plan"
                                            aria-label=format!("Delete {}", plan.name)
                                            on:click=move |_| pending_delete.set(Some(delete_plan.clone()))
                                        >
                                            <Icon name=icons::TRASH class="icon-standalone"/>
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pagination info=info query=query/>
        </section>

        <ConfirmDialog
            title="Delete plan"
            message=delete_message
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            on_confirm=confirm_delete
            on_cancel=Callback::new(move |_| pending_delete.set(None))
            confirm_text="Delete"
            is_destructive=true
        />
    }
}

#[component]
fn NewPlanForm() -> impl IntoView {
    let ctx = use_admin_context();

    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let students = RwSignal::new(String::new());
    let features = RwSignal::new(String::new());
    let price_error = RwSignal::new(None::<String>);
    let students_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let monthly_price_cents = parse_price_cents(&price.get_untracked());
        price_error.set(
            monthly_price_cents
                .is_none()
                .then(|| "Enter a price such as 49 or 49.99".to_string()),
        );
        let max_students = parse_student_limit(&students.get_untracked());
        students_error.set(max_students.clone().err());

        let (Some(monthly_price_cents), Ok(max_students)) = (monthly_price_cents, max_students) else {
            return;
        };

        let input = NewPlan {
            name: name.get_untracked(),
            monthly_price_cents,
            max_students,
            features: features
                .get_untracked()
                .split(',')
                .map(str::to_string)
                .collect(),
        };

        saving.set(true);
        after_delay(SIMULATED_LATENCY_MS, move || {
            saving.try_set(false);
            if let Some(plan) = ctx.apply("Could not create plan", |s| s.create_plan(input)) {
                ctx.notify.success("Plan created", format!("\"{}\" is now available", plan.name));
                name.try_set(String::new());
                price.try_set(String::new());
                students.try_set(String::new());
                features.try_set(String::new());
            }
        });
    });

    view! {
        <section class="card p-6">
            <h2 class="title-lg mb-4">"New plan"</h2>
            <div class="grid md:grid-cols-4 gap-4">
                <FormField
                    label="Name"
                    id="plan-name"
                    required=true
                    value=name.into()
                    on_input=Callback::new(move |v| name.set(v))
                />
                <FormField
                    label="Monthly price (USD)"
                    id="plan-price"
                    required=true
                    placeholder="49.00"
                    value=price.into()
                    on_input=Callback::new(move |v| price.set(v))
                    error=price_error
                />
                <FormField
                    label="Student limit"
                    id="plan-students"
                    input_type="number"
                    placeholder="Unlimited"
                    hint="Leave empty for unlimited"
                    value=students.into()
                    on_input=Callback::new(move |v| students.set(v))
                    error=students_error
                />
                <FormField
                    label="Features"
                    id="plan-features"
                    placeholder="Gradebook, SMS alerts"
                    hint="Comma separated"
                    value=features.into()
                    on_input=Callback::new(move |v| features.set(v))
                />
            </div>
            <div class="flex justify-end mt-4">
                <PendingButton text="Create plan" pending_text="Creating..." pending=saving on_click=submit/>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional_prices() {
        assert_eq!(parse_price_cents("29"), Some(2_900));
        assert_eq!(parse_price_cents(" $29.5 "), Some(2_950));
        assert_eq!(parse_price_cents("29.99"), Some(2_999));
        assert_eq!(parse_price_cents("0"), Some(0));
    }

    #[test]
    fn test_reject_malformed_prices() {
        for input in ["", "abc", "29.999", "-5", ".50", "1,000"] {
            assert_eq!(parse_price_cents(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_student_limit() {
        assert_eq!(parse_student_limit(""), Ok(None));
        assert_eq!(parse_student_limit(" 250 "), Ok(Some(250)));
        assert!(parse_student_limit("0").is_err());
        assert!(parse_student_limit("many").is_err());
    }
}
