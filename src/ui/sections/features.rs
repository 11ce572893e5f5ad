use leptos::prelude::*;

use crate::core::content::{FEATURE_STATS, FEATURES, Feature};
use crate::ui::icon::{Icon, icons};

/// Stats strip, feature grid and closing call to action
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-background to-primary/5">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 scroll-animate">
                    <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">
                        "Powerful Features for Modern Businesses"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Everything you need to transform your business with AI-powered automation and intelligence"
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-20 scroll-animate" style="transition-delay: 0.2s;">
                    {FEATURE_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center hover-scale">
                                    <div class="bg-primary/10 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4">
                                        {stat.icon.map(|name| view! { <Icon name=name class="w-8 h-8 text-primary" /> })}
                                    </div>
                                    <div class="text-3xl md:text-4xl font-bold text-primary mb-2">{stat.number}</div>
                                    <div class="text-muted-foreground font-medium">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-16 scroll-animate" style="transition-delay: 0.4s;">
                    <h3 class="text-2xl md:text-3xl font-bold text-foreground mb-4">
                        "Ready to Transform Your Business?"
                    </h3>
                    <p class="text-muted-foreground mb-8 max-w-2xl mx-auto">
                        "Join thousands of companies already using our AI platform to drive growth and innovation"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="cta-button hover-scale">"Start Free Trial"</button>
                        <button class="demo-button hover-scale">"Schedule Demo"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let delay = format!("transition-delay: {:.1}s;", index as f64 * 0.1);

    view! {
        <div class="bg-card rounded-2xl p-8 border border-border hover:shadow-xl transition-all duration-300 group scroll-animate hover-lift" style=delay>
            <div class="bg-primary/10 w-16 h-16 rounded-xl flex items-center justify-center mb-6 group-hover:bg-primary/20 transition-colors">
                <Icon name=feature.icon class="w-8 h-8 text-primary" />
            </div>

            <h3 class="text-xl font-bold text-foreground mb-4">{feature.title}</h3>

            <p class="text-muted-foreground mb-6 leading-relaxed">{feature.description}</p>

            <ul class="space-y-2 mb-6">
                {feature
                    .benefits
                    .iter()
                    .map(|benefit| {
                        view! {
                            <li class="flex items-center gap-2 text-sm">
                                <div class="w-1.5 h-1.5 bg-primary rounded-full"></div>
                                <span class="text-foreground">{*benefit}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button class="text-primary hover:text-primary/80 font-medium flex items-center gap-2 group-hover:gap-3 transition-all hover-nudge">
                "Learn More"
                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
            </button>
        </div>
    }
}
