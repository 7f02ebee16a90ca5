//! Common reusable UI components shared by the marketing pages, the demo and
//! the admin console.

pub mod badge;
pub mod form;
pub mod keyboard;
pub mod modal;
pub mod spinner;

pub use badge::{ActiveBadge, Badge, BadgeTone, BadgeVariant, status_badge};
pub use form::{CheckboxField, FormField, SelectField};
pub use keyboard::{KeyboardHint, KeyboardHints};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{PendingButton, Spinner, SpinnerSize};
