use leptos::prelude::*;

use crate::core::content::HERO_STATS;
use crate::ui::icon::{Icon, icons};

/// Full-height hero with floating illustrations, CTAs and headline stats
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-background via-background to-primary/5">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-20 right-20 w-64 h-64 opacity-20 float-slow">
                    <img src="/images/ai_illustration_1.svg" alt="AI Illustration" class="w-full h-full object-contain" />
                </div>
                <div class="absolute bottom-20 left-20 w-48 h-48 opacity-15 float-slow" style="animation-delay: 2s;">
                    <img src="/images/ai_illustration_2.svg" alt="AI Illustration" class="w-full h-full object-contain" />
                </div>

                <div class="absolute top-1/4 left-1/4 text-primary/20 spin" style="animation-duration: 20s;">
                    <Icon name=icons::SPARKLES class="w-8 h-8" />
                </div>
                <div class="absolute top-1/3 right-1/3 text-primary/20 spin-reverse" style="animation-duration: 25s;">
                    <Icon name=icons::ZAP class="w-7 h-7" />
                </div>
                <div class="absolute bottom-1/3 right-1/4 text-primary/20 spin" style="animation-duration: 30s;">
                    <Icon name=icons::BRAIN class="w-9 h-9" />
                </div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-20">
                <div class="text-center">
                    <div class="mb-6 fade-in-up delay-300">
                        <span class="inline-block px-4 py-2 bg-primary/10 text-primary rounded-full text-sm font-medium mb-6 hover-scale">
                            "🚀 Next-Generation AI Platform"
                        </span>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-foreground leading-tight">
                            "Transform Your Business"
                            <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-primary/60">
                                "with AI Power"
                            </span>
                        </h1>
                    </div>

                    <p class="text-xl md:text-2xl text-muted-foreground max-w-3xl mx-auto mb-8 leading-relaxed fade-in-up delay-500">
                        "Unlock unprecedented efficiency and innovation with our cutting-edge AI solutions. "
                        "Streamline operations, boost productivity, and stay ahead of the competition."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12 fade-in-up delay-700">
                        <button class="cta-button flex items-center gap-2 text-lg px-8 py-4 hover-scale">
                            "Start Free Trial"
                            <Icon name=icons::ARROW_RIGHT />
                        </button>
                        <button class="demo-button flex items-center gap-2 text-lg px-8 py-4 hover-scale">
                            <Icon name=icons::PLAY />
                            "Watch Demo"
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto fade-in-up delay-900">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center hover-scale">
                                        <div class="text-3xl md:text-4xl font-bold text-primary mb-2">
                                            {stat.number}
                                        </div>
                                        <div class="text-muted-foreground">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 bob" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-primary rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-primary rounded-full mt-2 scroll-dot"></div>
                </div>
            </div>
        </section>
    }
}
