//! Pricing table with a monthly/yearly billing toggle
//!
//! Prices come from the same plan catalogue the admin console manages, so the
//! marketing page and the console never disagree.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::admin::seed::seed_plans;
use crate::core::admin::{Plan, YEARLY_DISCOUNT_PERCENT, format_cents};
use crate::ui::icon::{Icon, icons};

/// Billing period shown in the pricing table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    /// Price for one billing period, in cents
    pub fn price_cents(self, plan: &Plan) -> u64 {
        match self {
            BillingCycle::Monthly => plan.monthly_price_cents,
            BillingCycle::Yearly => plan.yearly_price_cents(),
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }

    /// Headline price, whole dollars when there are no cents
    pub fn price_label(self, plan: &Plan) -> String {
        let cents = self.price_cents(plan);
        if cents % 100 == 0 {
            format!("${}", cents / 100)
        } else {
            format!("${}", format_cents(cents))
        }
    }
}

/// Plan the table marks as most popular
const HIGHLIGHTED_PLAN: &str = "plan-growth";

#[component]
pub fn PricingSection() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::Monthly);
    let plans = seed_plans()
        .into_iter()
        .filter(|plan| plan.is_active)
        .collect::<Vec<_>>();

    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Pricing per school, not per seat"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Every plan includes all roles, unlimited staff accounts and your own subdomain."
                    </p>
                </div>

                <div class="flex items-center justify-center gap-3 mb-12" role="group" aria-label="Billing period">
                    <span class:font-semibold=move || cycle.get() == BillingCycle::Monthly>"Monthly"</span>
                    <button
                        class="pricing-toggle"
                        class:pricing-toggle-on=move || cycle.get() == BillingCycle::Yearly
                        role="switch"
                        aria-checked=move || (cycle.get() == BillingCycle::Yearly).to_string()
                        aria-label="Bill yearly"
                        on:click=move |_| cycle.update(|c| *c = c.toggled())
                    >
                        <span class="pricing-toggle-knob"></span>
                    </button>
                    <span class:font-semibold=move || cycle.get() == BillingCycle::Yearly>
                        "Yearly"
                        <span class="ml-2 text-sm text-green-600">
                            {format!("save {}%", YEARLY_DISCOUNT_PERCENT)}
                        </span>
                    </span>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {plans
                        .into_iter()
                        .map(|plan| {
                            let highlighted = plan.id == HIGHLIGHTED_PLAN;
                            view! { <PricingCard plan=plan cycle=cycle.into() highlighted=highlighted/> }
                        })
                        .collect_view()}
                </div>

                <p class="text-center text-theme-tertiary text-sm mt-8">
                    "All plans include a 14-day free trial. No credit card required."
                </p>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: Plan, cycle: Signal<BillingCycle>, highlighted: bool) -> impl IntoView {
    let card_class = if highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };
    let price_plan = plan.clone();
    let features = plan.features.clone();

    view! {
        <div class=card_class>
            {highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name.clone()}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">
                        {move || cycle.get().price_label(&price_plan)}
                    </span>
                    <span class="text-theme-secondary">{move || cycle.get().period_label()}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.students_label()}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {features
                    .into_iter()
                    .map(|feature| view! {
                        <li class="flex items-center gap-3">
                            <Icon name=icons::CHECK class="w-5 h-5 text-green-500 flex-shrink-0"/>
                            <span class="text-theme-primary">{feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>

            <A
                href="/demo"
                attr:class=if highlighted {
                    "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
                } else {
                    "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
                }
            >
                "Start free trial"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str) -> Plan {
        seed_plans()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_monthly_price_label() {
        assert_eq!(BillingCycle::Monthly.price_label(&plan("plan-starter")), "$29");
    }

    #[test]
    fn test_yearly_price_is_discounted() {
        let starter = plan("plan-starter");
        let yearly = BillingCycle::Yearly.price_cents(&starter);
        assert!(yearly < starter.monthly_price_cents * 12);
        assert_eq!(yearly, starter.yearly_price_cents());
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggled().toggled(), BillingCycle::Yearly);
    }

    #[test]
    fn test_highlighted_plan_exists() {
        assert!(seed_plans().iter().any(|p| p.id == HIGHLIGHTED_PLAN));
    }
}
