//! Landing page component
//!
//! Owns the page-level UI state:
//! - whether the loading screen is still up
//! - which [`Page`] is selected (in memory only, home on every load)
//! - the theme, through [`ThemeContext`](crate::ui::theme::ThemeContext)

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::BRAND_NAME;
use crate::core::page::{Page, Section};
use crate::core::pricing::{BillingCycle, Tier};
use crate::ui::custom_cursor::CustomCursor;
use crate::ui::loading_screen::LoadingScreen;
use crate::ui::navigation::Navigation;
use crate::ui::sections::{
    BlogSection, ContactSection, FeaturesSection, Footer, HeroSection, PricingCalculator,
};
use crate::ui::styles::{LandingStyles, ScrollAnimationScript};
use crate::ui::theme::use_theme_context;

const DESCRIPTION: &str = "Transform your business with AI power. Streamline operations, boost productivity, and stay ahead of the competition.";

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let (is_loading, set_is_loading) = signal(true);
    let current_page = RwSignal::new(Page::default());

    let on_loading_complete = Callback::new(move |_: ()| set_is_loading.set(false));

    // Page switches start at the top, like a navigation would
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |prev: Option<Page>| {
            let page = current_page.get();
            if prev.is_some_and(|p| p != page) {
                window().scroll_to_with_x_and_y(0.0, 0.0);
            }
            page
        });
    }

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="App">
            <CustomCursor />

            <Show when=move || is_loading.get()>
                <LoadingScreen on_complete=on_loading_complete />
            </Show>

            <Show when=move || !is_loading.get()>
                <div class="page-enter">
                    <Navigation current_page=current_page theme=theme />

                    <main class="pt-20">
                        {move || {
                            current_page
                                .get()
                                .sections()
                                .iter()
                                .map(|section| render_section(*section))
                                .collect_view()
                        }}
                    </main>

                    <Footer />
                </div>
            </Show>
        </div>

        <ScrollAnimationScript />
    }
}

fn render_section(section: Section) -> AnyView {
    match section {
        Section::Hero => view! { <HeroSection /> }.into_any(),
        Section::Features => view! { <FeaturesSection /> }.into_any(),
        Section::Pricing => view! { <PricingCalculator /> }.into_any(),
        Section::Blog => view! { <BlogSection /> }.into_any(),
        Section::Contact => view! { <ContactSection /> }.into_any(),
    }
}

/// SEO meta tags and JSON-LD description of the product
#[component]
fn SeoMeta() -> impl IntoView {
    let structured_data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": BRAND_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": DESCRIPTION,
        "offers": Tier::ALL
            .iter()
            .map(|tier| serde_json::json!({
                "@type": "Offer",
                "name": tier.display_name(),
                "price": tier.base_price(BillingCycle::Monthly),
                "priceCurrency": "USD",
            }))
            .collect::<Vec<_>>(),
    })
    .to_string();

    view! {
        <Title text="AI SaaS - Transform Your Business with AI Power" />
        <Meta name="description" content=DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="AI SaaS - Transform Your Business with AI Power" />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta name="twitter:card" content="summary_large_image" />
        <script type="application/ld+json" inner_html=structured_data></script>
    }
}
