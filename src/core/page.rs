//! Page selection and section dispatch.
//!
//! The landing page swaps its main content in place rather than routing:
//! the selected [`Page`] decides which [`Section`]s render between the
//! navigation bar and the footer.

use serde::{Deserialize, Serialize};

/// Entries of the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Features,
    Pricing,
    Blog,
    Contact,
}

/// Content blocks a page is composed of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Pricing,
    Blog,
    Contact,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Features,
        Page::Pricing,
        Page::Blog,
        Page::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Features => "features",
            Page::Pricing => "pricing",
            Page::Blog => "blog",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Pricing => "Pricing",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
        }
    }

    /// Resolve a page id; anything unknown falls back to home
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or_default()
    }

    pub fn sections(&self) -> &'static [Section] {
        match self {
            Page::Home => &[
                Section::Hero,
                Section::Features,
                Section::Pricing,
                Section::Blog,
            ],
            Page::Features => &[Section::Features],
            Page::Pricing => &[Section::Pricing],
            Page::Blog => &[Section::Blog],
            Page::Contact => &[Section::Contact],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_id_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_home() {
        assert_eq!(Page::from_id("careers"), Page::Home);
        assert_eq!(Page::from_id(""), Page::Home);
        assert_eq!(Page::from_id("Pricing"), Page::Home);
    }

    #[test]
    fn test_home_renders_four_sections_in_order() {
        assert_eq!(
            Page::Home.sections(),
            &[
                Section::Hero,
                Section::Features,
                Section::Pricing,
                Section::Blog
            ]
        );
    }

    #[test]
    fn test_single_section_pages() {
        assert_eq!(Page::Features.sections(), &[Section::Features]);
        assert_eq!(Page::Pricing.sections(), &[Section::Pricing]);
        assert_eq!(Page::Blog.sections(), &[Section::Blog]);
        assert_eq!(Page::Contact.sections(), &[Section::Contact]);
    }

    #[test]
    fn test_navigation_labels() {
        let labels: Vec<_> = Page::ALL.iter().map(Page::label).collect();
        assert_eq!(labels, ["Home", "Features", "Pricing", "Blog", "Contact"]);
    }
}
