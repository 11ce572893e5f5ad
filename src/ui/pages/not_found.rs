//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::BRAND_NAME;
use crate::ui::styles::LandingStyles;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - AI SaaS" />
        <LandingStyles />

        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center fade-in-up">
                // Error code
                <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-foreground mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="cta-button hover-scale inline-block">
                    "Go Home"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted-foreground">
                    "© 2024 " {BRAND_NAME} " Platform"
                </p>
            </div>
        </div>
    }
}
