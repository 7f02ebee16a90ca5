//! Application pages
//!
//! - Landing page (home)
//! - Guided product demo
//! - Operator console under `/admin`
//! - 404 page

pub mod admin;
mod demo;
mod landing;
mod not_found;
mod pricing;
mod testimonials;

pub use demo::DemoPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
