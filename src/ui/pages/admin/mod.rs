//! Operator console
//!
//! All pages share one in-memory [`AdminStore`] through [`AdminContext`].
//! Mutations go through [`AdminContext::apply`], which reports failures as
//! toasts; pages add their own success toasts.

mod activity;
mod domains;
mod layout;
mod overview;
mod payments;
mod plans;
mod settings;
mod widgets;

use leptos::prelude::*;

use crate::core::admin::seed::seed_store;
use crate::core::admin::{AdminError, AdminStore};
use crate::ui::notifications::{NotificationManager, use_notifications};

pub use activity::ActivityPage;
pub use domains::DomainsPage;
pub use layout::AdminLayout;
pub use overview::OverviewPage;
pub use payments::PaymentsPage;
pub use plans::PlansPage;
pub use settings::SettingsPage;

/// Latency added to simulated backend calls, in milliseconds
pub(crate) const SIMULATED_LATENCY_MS: u32 = 900;

#[derive(Clone, Copy)]
pub struct AdminContext {
    pub store: RwSignal<AdminStore>,
    pub notify: NotificationManager,
}

impl AdminContext {
    /// Run a mutation; an error becomes an error toast titled `failure_title`
    pub fn apply<T>(
        self,
        failure_title: &'static str,
        action: impl FnOnce(&mut AdminStore) -> Result<T, AdminError>,
    ) -> Option<T> {
        match self.store.try_update(action)? {
            Ok(value) => Some(value),
            Err(err) => {
                leptos::logging::warn!("{}: {}", failure_title, err);
                self.notify.error(failure_title, err.to_string());
                None
            }
        }
    }
}

/// Seed the store and make it available to the console pages
pub fn provide_admin_context() -> AdminContext {
    let ctx = AdminContext {
        store: RwSignal::new(seed_store()),
        notify: use_notifications(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_admin_context() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext should be provided by AdminLayout")
}
