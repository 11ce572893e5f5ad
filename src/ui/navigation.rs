use leptos::prelude::*;

use crate::core::content::BRAND_NAME;
use crate::core::page::Page;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeContext;

/// Fixed top bar with page links, theme toggle and call to action
#[component]
pub fn Navigation(
    /// Currently selected page
    current_page: RwSignal<Page>,
    theme: ThemeContext,
) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-border nav-slide-in">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <button
                        class="text-2xl font-bold text-primary hover-scale"
                        on:click=move |_| current_page.set(Page::Home)
                    >
                        {BRAND_NAME}
                    </button>

                    <div class="hidden md:flex items-center space-x-2">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <button
                                        class="nav-button hover-scale"
                                        class:active=move || current_page.get() == page
                                        on:click=move |_| current_page.set(page)
                                        aria-current=move || (current_page.get() == page).then_some("page")
                                    >
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4">
                        <ThemeToggle theme=theme />
                        <button class="cta-button hidden sm:block hover-scale">"Get Started"</button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Sliding sun/moon switch
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="theme-toggle hover-scale"
            class:dark=move || theme.is_dark.get()
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            <span
                class="theme-toggle-icon"
                style=move || if theme.is_dark.get() { "opacity: 0;" } else { "opacity: 1;" }
            >
                <Icon name=icons::SUN class="w-3 h-3 text-white" />
            </span>
            <span
                class="theme-toggle-icon"
                style=move || if theme.is_dark.get() { "opacity: 1;" } else { "opacity: 0;" }
            >
                <Icon name=icons::MOON class="w-3 h-3 text-white" />
            </span>
        </button>
    }
}
