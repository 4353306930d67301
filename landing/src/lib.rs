//! # saas-landing
//!
//! Marketing landing page for the SaaS Platform, written with
//! [Leptos](https://leptos.dev/) 0.8 and rendered client side (CSR).
//!
//! The page is a fixed column of sections fed by literal content:
//!
//! ```text
//! App
//! ├── Hero
//! ├── Features      (content::FEATURES)
//! ├── Testimonials  (content::TESTIMONIALS)
//! ├── Pricing       (content::PRICING)
//! ├── FaqSection    (content::FAQS + FaqSelection)
//! └── Footer
//! ```
//!
//! The only state is [`FaqSelection`], owned by [`App`] and toggled by the
//! FAQ headers.
//!
//! ## Building
//!
//! ```text
//! cd landing && trunk serve
//! ```
//!
//! Append `?log=debug` to the page URL to see toggle events in the console.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod mount;
pub mod sections;
pub mod selection;
pub mod telemetry;

pub use app::App;
pub use config::SiteConfig;
pub use error::LandingError;
pub use mount::mount;
pub use selection::FaqSelection;
