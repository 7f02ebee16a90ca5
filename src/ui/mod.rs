pub mod common;
pub mod download;
pub mod icon;
pub mod latency;
pub mod notifications;
pub mod pages;
pub mod theme;
pub mod walkthrough;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, provide_notifications, use_notifications};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
