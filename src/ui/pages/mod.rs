//! Application pages module
//!
//! - Landing page (the whole single-page site)
//! - Not found page for any other path

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
