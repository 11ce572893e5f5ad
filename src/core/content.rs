//! Static marketing copy rendered by the landing page sections.
//!
//! Icons are referenced by name; the UI layer resolves names to SVG paths.

use chrono::NaiveDate;

use super::pricing::Tier;

pub const BRAND_NAME: &str = "AI SaaS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub tier: Tier,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    /// ISO-8601 calendar date
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

impl BlogPost {
    /// Long US date, e.g. "January 15, 2024". Falls back to the raw string
    /// when the date does not parse.
    pub fn formatted_date(&self) -> String {
        format_post_date(self.date)
    }
}

/// Format an ISO date as "Month D, YYYY"
pub fn format_post_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { number: "10M+", label: "AI Operations Daily", icon: None },
    Stat { number: "99.9%", label: "Uptime Guarantee", icon: None },
    Stat { number: "500+", label: "Enterprise Clients", icon: None },
];

pub const FEATURE_STATS: &[Stat] = &[
    Stat { number: "10M+", label: "API Calls Daily", icon: Some("zap") },
    Stat { number: "500+", label: "Enterprise Clients", icon: Some("users") },
    Stat { number: "99.99%", label: "Uptime SLA", icon: Some("clock") },
    Stat { number: "15+", label: "Global Regions", icon: Some("globe") },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "brain",
        title: "Advanced AI Models",
        description: "Leverage cutting-edge machine learning algorithms trained on massive datasets for superior performance and accuracy.",
        benefits: &["99.9% accuracy", "Real-time processing", "Custom model training"],
    },
    Feature {
        icon: "zap",
        title: "Lightning Fast Processing",
        description: "Process millions of operations per second with our optimized infrastructure and intelligent caching systems.",
        benefits: &["Sub-second response", "Auto-scaling", "Global CDN"],
    },
    Feature {
        icon: "shield",
        title: "Enterprise Security",
        description: "Bank-grade security with end-to-end encryption, compliance certifications, and advanced threat protection.",
        benefits: &["SOC 2 compliant", "256-bit encryption", "Zero-trust architecture"],
    },
    Feature {
        icon: "bar-chart",
        title: "Real-time Analytics",
        description: "Comprehensive insights and analytics dashboard to monitor performance, usage, and business metrics.",
        benefits: &["Live dashboards", "Custom reports", "Predictive analytics"],
    },
    Feature {
        icon: "workflow",
        title: "Seamless Integration",
        description: "Connect with 500+ popular tools and platforms through our robust API and pre-built integrations.",
        benefits: &["REST & GraphQL APIs", "Webhook support", "No-code connectors"],
    },
    Feature {
        icon: "globe",
        title: "Global Infrastructure",
        description: "Deployed across 15+ regions worldwide for optimal performance and compliance with local regulations.",
        benefits: &["99.99% uptime", "Edge computing", "Data residency"],
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        tier: Tier::Starter,
        icon: "zap",
        description: "Perfect for small teams getting started",
        features: &[
            "Up to 50 AI operations/day",
            "Basic analytics",
            "Email support",
            "Standard integrations",
        ],
        popular: false,
    },
    Plan {
        tier: Tier::Standard,
        icon: "users",
        description: "Ideal for growing businesses",
        features: &[
            "Up to 500 AI operations/day",
            "Advanced analytics",
            "Priority support",
            "Custom integrations",
            "Team collaboration",
        ],
        popular: true,
    },
    Plan {
        tier: Tier::Premium,
        icon: "crown",
        description: "For enterprises with advanced needs",
        features: &[
            "Unlimited AI operations",
            "Real-time analytics",
            "24/7 dedicated support",
            "Custom AI models",
            "Advanced security",
            "White-label options",
        ],
        popular: false,
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of AI in Business Automation",
        excerpt: "Discover how artificial intelligence is revolutionizing business processes and driving unprecedented efficiency gains across industries.",
        image: "/images/blog_thumbnail_1.svg",
        author: "Sarah Chen",
        date: "2024-01-15",
        read_time: "5 min read",
        category: "AI Technology",
    },
    BlogPost {
        id: 2,
        title: "Building Scalable SaaS Solutions with AI",
        excerpt: "Learn the essential strategies for creating robust, scalable SaaS platforms that leverage AI to deliver exceptional user experiences.",
        image: "/images/blog_thumbnail_2.svg",
        author: "Michael Rodriguez",
        date: "2024-01-12",
        read_time: "7 min read",
        category: "SaaS Development",
    },
    BlogPost {
        id: 3,
        title: "Machine Learning Algorithms Explained",
        excerpt: "A comprehensive guide to understanding the most important machine learning algorithms and their real-world applications.",
        image: "/images/blog_thumbnail_3.svg",
        author: "Dr. Emily Watson",
        date: "2024-01-10",
        read_time: "10 min read",
        category: "Machine Learning",
    },
];

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Product",
        links: &["Features", "Pricing", "API", "Documentation"],
    },
    FooterSection {
        title: "Company",
        links: &["About", "Blog", "Careers", "Contact"],
    },
    FooterSection {
        title: "Resources",
        links: &["Help Center", "Community", "Tutorials", "Webinars"],
    },
    FooterSection {
        title: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Cookie Policy", "GDPR"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "twitter", href: "#", label: "Twitter" },
    SocialLink { icon: "linkedin", href: "#", label: "LinkedIn" },
    SocialLink { icon: "github", href: "#", label: "GitHub" },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "mail", text: "hello@aisaas.com" },
    ContactDetail { icon: "phone", text: "+1 (555) 123-4567" },
    ContactDetail { icon: "map-pin", text: "San Francisco, CA" },
];

/// Card shown for a tier in the plans grid
pub fn plan_for(tier: Tier) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.tier == tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_post_date("2024-01-10"), "January 10, 2024");
        assert_eq!(format_post_date("2023-07-04"), "July 4, 2023");
    }

    #[test]
    fn test_format_post_date_invalid_passthrough() {
        assert_eq!(format_post_date("soon"), "soon");
        assert_eq!(format_post_date("2024-13-40"), "2024-13-40");
    }

    #[test]
    fn test_blog_posts_have_valid_dates() {
        for post in BLOG_POSTS {
            assert!(
                NaiveDate::parse_from_str(post.date, "%Y-%m-%d").is_ok(),
                "post {} has a malformed date",
                post.id
            );
        }
        assert_eq!(BLOG_POSTS[0].formatted_date(), "January 15, 2024");
    }

    #[test]
    fn test_every_tier_has_a_plan_card() {
        for tier in Tier::ALL {
            assert!(plan_for(tier).is_some(), "missing plan for {tier:?}");
        }
    }

    #[test]
    fn test_plan_cards_follow_tier_order() {
        let cards: Vec<_> = Tier::ALL.into_iter().filter_map(plan_for).collect();
        assert_eq!(cards.len(), PLANS.len());
        assert!(cards.iter().zip(PLANS).all(|(card, plan)| card == &plan));
    }

    #[test]
    fn test_only_standard_is_popular() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.tier).collect();
        assert_eq!(popular, vec![Tier::Standard]);
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(FEATURE_STATS.len(), 4);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(FOOTER_SECTIONS.len(), 4);
        assert!(FOOTER_SECTIONS.iter().all(|s| s.links.len() == 4));
    }
}
