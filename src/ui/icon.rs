use leptos::prelude::*;

/// Inline stroke icon on a 24x24 grid
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = icons::paths(name);

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Named icons used across the page
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const PLAY: &str = "play";
    pub const SPARKLES: &str = "sparkles";
    pub const ZAP: &str = "zap";
    pub const BRAIN: &str = "brain";
    pub const SHIELD: &str = "shield";
    pub const BAR_CHART: &str = "bar-chart";
    pub const WORKFLOW: &str = "workflow";
    pub const GLOBE: &str = "globe";
    pub const CLOCK: &str = "clock";
    pub const USERS: &str = "users";
    pub const USER: &str = "user";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CALCULATOR: &str = "calculator";
    pub const CROWN: &str = "crown";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const TWITTER: &str = "twitter";
    pub const LINKEDIN: &str = "linkedin";
    pub const GITHUB: &str = "github";

    /// SVG path data for an icon name; unknown names render nothing
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            ARROW_RIGHT => &["M5 12h14", "m12 5 7 7-7 7"],
            PLAY => &["M6 3l14 9-14 9V3z"],
            SPARKLES => &[
                "M9.94 14.06 8 20l-1.94-5.94L0 12l6.06-1.94L8 4l1.94 6.06L16 12z",
                "M20 3v4",
                "M22 5h-4",
            ],
            ZAP => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            BRAIN => &[
                "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 4.44-1.54",
                "M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-4.44-1.54",
            ],
            SHIELD => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            BAR_CHART => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            WORKFLOW => &[
                "M3 3h8v8H3z",
                "M7 11v4a2 2 0 0 0 2 2h4",
                "M13 13h8v8h-8z",
            ],
            GLOBE => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            CLOCK => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
            USERS => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            USER => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
            ],
            CALENDAR => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            CHECK => &["M20 6 9 17l-5-5"],
            CALCULATOR => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M8 6h8",
                "M16 14v4",
                "M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M8 18h.01M12 18h.01",
            ],
            CROWN => &["m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z", "M5 20h14"],
            SUN => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            ],
            MOON => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            MAIL => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-10 7L2 7",
            ],
            PHONE => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            MAP_PIN => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            TWITTER => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            LINKEDIN => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            GITHUB => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::icons;
    use crate::core::content::{CONTACT_DETAILS, FEATURE_STATS, FEATURES, PLANS, SOCIAL_LINKS};

    #[test]
    fn test_content_icons_resolve() {
        let names = FEATURES
            .iter()
            .map(|f| f.icon)
            .chain(PLANS.iter().map(|p| p.icon))
            .chain(FEATURE_STATS.iter().filter_map(|s| s.icon))
            .chain(SOCIAL_LINKS.iter().map(|s| s.icon))
            .chain(CONTACT_DETAILS.iter().map(|c| c.icon));

        for name in names {
            assert!(!icons::paths(name).is_empty(), "no paths for icon {name:?}");
        }
    }

    #[test]
    fn test_unknown_icon_is_empty() {
        assert!(icons::paths("does-not-exist").is_empty());
    }
}
