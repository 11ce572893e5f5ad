use leptos::prelude::*;

use crate::core::content::{BLOG_POSTS, BlogPost};
use crate::ui::icon::{Icon, icons};

/// Demo teaser plus the latest blog posts
#[component]
pub fn BlogSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-background">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 scroll-animate">
                    <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">"Latest Insights"</h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Stay updated with the latest trends, insights, and best practices in AI and SaaS technology"
                    </p>
                </div>

                <DemoTeaser />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {BLOG_POSTS
                        .iter()
                        .enumerate()
                        .map(|(index, post)| view! { <BlogCard post=*post index=index /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-12 scroll-animate" style="transition-delay: 0.4s;">
                    <button class="demo-button hover-scale">"View All Articles"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DemoTeaser() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-primary/10 to-primary/5 rounded-2xl p-8 mb-16 border border-primary/20 scroll-animate" style="transition-delay: 0.2s;">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                <div>
                    <h3 class="text-3xl font-bold text-foreground mb-4">"Watch Our AI Platform Demo"</h3>
                    <p class="text-muted-foreground mb-6 text-lg">
                        "See how our AI-powered platform can transform your business operations "
                        "in just 5 minutes. Get a comprehensive walkthrough of all features."
                    </p>
                    <button class="cta-button flex items-center gap-2 hover-scale">
                        "Watch Demo"
                        <Icon name=icons::ARROW_RIGHT />
                    </button>
                </div>
                <div class="relative">
                    <div class="relative rounded-xl overflow-hidden shadow-2xl hover-grow">
                        <img
                            src="/images/demo_presenter.svg"
                            alt="AI Platform Demo Presenter"
                            class="w-full h-64 object-cover"
                        />
                        <div class="absolute inset-0 bg-black/20 flex items-center justify-center">
                            <div class="w-16 h-16 bg-white/90 rounded-full flex items-center justify-center cursor-pointer hover-scale">
                                <div class="play-triangle ml-1"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BlogCard(post: BlogPost, index: usize) -> impl IntoView {
    let delay = format!("transition-delay: {:.1}s;", index as f64 * 0.1);

    view! {
        <article class="bg-card rounded-2xl overflow-hidden border border-border hover:shadow-xl transition-all duration-300 scroll-animate hover-lift" style=delay>
            <div class="relative overflow-hidden">
                <img src=post.image alt=post.title class="w-full h-48 object-cover hover-grow" />
                <div class="absolute top-4 left-4">
                    <span class="bg-primary text-primary-foreground px-3 py-1 rounded-full text-xs font-medium">
                        {post.category}
                    </span>
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold text-foreground mb-3 line-clamp-2 hover:text-primary transition-colors">
                    {post.title}
                </h3>

                <p class="text-muted-foreground mb-4 line-clamp-3">{post.excerpt}</p>

                <div class="flex items-center justify-between text-sm text-muted-foreground mb-4">
                    <div class="flex items-center gap-2">
                        <Icon name=icons::USER class="w-4 h-4" />
                        <span>{post.author}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon name=icons::CLOCK class="w-4 h-4" />
                        <span>{post.read_time}</span>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Icon name=icons::CALENDAR class="w-4 h-4" />
                        <time datetime=post.date>{post.formatted_date()}</time>
                    </div>

                    <button class="text-primary hover:text-primary/80 font-medium flex items-center gap-1 hover-nudge">
                        "Read More"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </button>
                </div>
            </div>
        </article>
    }
}
