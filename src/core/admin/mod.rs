//! Admin console domain: mock data, table queries and simulated mutations

pub mod csv;
pub mod diagnostics;
mod error;
pub mod models;
pub mod seed;
mod store;
pub mod table;

pub use error::AdminError;
pub use models::*;
pub use store::{AdminStore, CONSOLE_ACTOR, PLATFORM_DOMAIN_SUFFIX, normalize_hostname};
