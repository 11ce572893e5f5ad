use leptos::prelude::*;

use crate::core::content::{BRAND_NAME, CONTACT_DETAILS, FOOTER_SECTIONS, SOCIAL_LINKS};
use crate::ui::icon::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-card border-t border-border">
            <div class="max-w-7xl mx-auto px-6 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-8 mb-8">
                    // Company info
                    <div class="lg:col-span-2">
                        <div class="text-2xl font-bold text-primary mb-4 hover-scale inline-block">{BRAND_NAME}</div>
                        <p class="text-muted-foreground mb-4 max-w-sm">
                            "Transform your business with cutting-edge AI technology. "
                            "Streamline operations, boost productivity, and unlock new possibilities."
                        </p>
                        <div class="space-y-2">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-center text-sm text-muted-foreground">
                                            <Icon name=detail.icon class="w-4 h-4 mr-2 text-primary" />
                                            {detail.text}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div>
                                    <h3 class="font-semibold text-foreground mb-4">{section.title}</h3>
                                    <ul class="space-y-2">
                                        {section
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href="#" class="text-sm text-muted-foreground hover:text-primary transition-colors hover-nudge inline-block">
                                                            {*link}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="border-t border-border pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-sm text-muted-foreground mb-4 md:mb-0">
                            "© 2024 AI SaaS Platform. All rights reserved."
                        </p>

                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            class="text-muted-foreground hover:text-primary transition-colors hover-pop"
                                            aria-label=social.label
                                        >
                                            <Icon name=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
