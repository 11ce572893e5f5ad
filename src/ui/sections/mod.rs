//! Landing page sections
//!
//! Each section is a self-contained block rendered between the navigation
//! bar and the footer. Only the pricing calculator owns state.

mod blog;
mod contact;
mod features;
mod footer;
mod hero;
mod pricing;

pub use blog::BlogSection;
pub use contact::ContactSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use pricing::PricingCalculator;
