//! Core domain logic: the guided walkthrough and the admin console model

pub mod admin;
#[cfg(feature = "ssr")]
pub mod config;
pub mod walkthrough;
