use leptos::prelude::*;

/// Placeholder shown for the Contact page
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center">
            <div class="text-center fade-in-up">
                <h1 class="text-4xl font-bold text-foreground mb-4">"Contact Us"</h1>
                <p class="text-muted-foreground">"Get in touch with our team"</p>
            </div>
        </section>
    }
}
