//! Platform settings form with JSON export

use leptos::prelude::*;

use super::widgets::{ExportButton, PageHeader};
use super::{SIMULATED_LATENCY_MS, use_admin_context};
use crate::core::admin::Settings;
use crate::ui::common::{CheckboxField, FormField, PendingButton, SelectField};
use crate::ui::latency::after_delay;

const CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "KZT"];

/// Editable copy of [`Settings`], kept as raw input text
#[derive(Clone, Copy)]
struct Draft {
    platform_name: RwSignal<String>,
    support_email: RwSignal<String>,
    trial_days: RwSignal<String>,
    currency: RwSignal<String>,
    maintenance_mode: RwSignal<bool>,
}

impl Draft {
    fn new(settings: &Settings) -> Self {
        Self {
            platform_name: RwSignal::new(settings.platform_name.clone()),
            support_email: RwSignal::new(settings.support_email.clone()),
            trial_days: RwSignal::new(settings.default_trial_days.to_string()),
            currency: RwSignal::new(settings.currency.clone()),
            maintenance_mode: RwSignal::new(settings.maintenance_mode),
        }
    }

    fn load(&self, settings: &Settings) {
        self.platform_name.set(settings.platform_name.clone());
        self.support_email.set(settings.support_email.clone());
        self.trial_days.set(settings.default_trial_days.to_string());
        self.currency.set(settings.currency.clone());
        self.maintenance_mode.set(settings.maintenance_mode);
    }

    fn to_settings(self) -> Result<Settings, String> {
        let trial_days = parse_trial_days(&self.trial_days.get_untracked())?;
        Ok(Settings {
            platform_name: self.platform_name.get_untracked(),
            support_email: self.support_email.get_untracked(),
            default_trial_days: trial_days,
            currency: self.currency.get_untracked(),
            maintenance_mode: self.maintenance_mode.get_untracked(),
        })
    }
}

fn parse_trial_days(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| "Trial length must be a whole number of days".to_string())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_admin_context();
    let draft = Draft::new(&ctx.store.with_untracked(|s| s.settings.clone()));
    let trial_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = Callback::new(move |_| {
        let settings = match draft.to_settings() {
            Ok(settings) => settings,
            Err(message) => {
                trial_error.set(Some(message));
                return;
            }
        };
        trial_error.set(None);
        saving.set(true);
        after_delay(SIMULATED_LATENCY_MS, move || {
            saving.try_set(false);
            if ctx
                .apply("Settings not saved", |s| s.update_settings(settings))
                .is_some()
            {
                ctx.notify.success("Settings saved", "Changes apply to new schools right away");
            }
        });
    });

    let reset = move |_| ctx.store.with_untracked(|s| draft.load(&s.settings));

    let export = Callback::new(move |_| {
        ctx.store.with_untracked(|s| {
            serde_json::to_string_pretty(&s.settings).unwrap_or_else(|err| {
                ctx.notify.error("Export failed", err.to_string());
                String::new()
            })
        })
    });

    let currency_options = CURRENCIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Settings" subtitle="Defaults for the whole platform">
            <ExportButton label="Export JSON" filename="settings.json" mime="application/json" contents=export/>
        </PageHeader>

        <section class="card p-6 max-w-2xl space-y-5">
            <FormField
                label="Platform name"
                id="settings-name"
                required=true
                value=draft.platform_name.into()
                on_input=Callback::new(move |v| draft.platform_name.set(v))
                disabled=saving
            />
            <FormField
                label="Support email"
                id="settings-email"
                input_type="email"
                required=true
                value=draft.support_email.into()
                on_input=Callback::new(move |v| draft.support_email.set(v))
                disabled=saving
            />
            <FormField
                label="Default trial (days)"
                id="settings-trial"
                input_type="number"
                hint="Between 0 and 90"
                value=draft.trial_days.into()
                on_input=Callback::new(move |v| draft.trial_days.set(v))
                error=trial_error
                disabled=saving
            />
            <SelectField
                label="Billing currency"
                id="settings-currency"
                value=draft.currency.into()
                on_change=Callback::new(move |v| draft.currency.set(v))
                options=currency_options
                disabled=saving
            />
            <CheckboxField
                label="Maintenance mode"
                id="settings-maintenance"
                checked=draft.maintenance_mode.into()
                on_change=Callback::new(move |v| draft.maintenance_mode.set(v))
                description="Tenant sites show a maintenance page while this is on."
                disabled=saving
            />

            <div class="flex justify-end gap-2 divider-top pt-4">
                <button class="btn-secondary" on:click=reset disabled=move || saving.get()>
                    "Discard changes"
                </button>
                <PendingButton text="Save settings" pending_text="Saving..." pending=saving on_click=save/>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trial_days() {
        assert_eq!(parse_trial_days(" 30 "), Ok(30));
        assert!(parse_trial_days("two weeks").is_err());
        assert!(parse_trial_days("-1").is_err());
    }
}
