//! Core domain models and business logic for the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod pricing;
pub mod splash;
pub mod theme;

pub use error::ParseError;
pub use page::{Page, Section};
pub use pricing::{BillingCycle, PricingSelection, Quote, Tier, UserCount, calculate_price};
pub use splash::{SplashPhase, SplashSchedule};
pub use theme::{Theme, ThemePreference, ThemeStore};
