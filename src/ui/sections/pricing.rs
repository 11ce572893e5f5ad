//! Pricing calculator section
//!
//! Holds the only derived state on the page: a [`PricingSelection`] signal
//! and the [`Quote`](crate::core::pricing::Quote) memoized from it. Raw input
//! values are parsed here, at the boundary, before they reach the calculator.

use leptos::prelude::*;

use crate::core::content::{Plan, plan_for};
use crate::core::pricing::{BillingCycle, MAX_USERS, MIN_USERS, PricingSelection, Tier, UserCount};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PricingCalculator() -> impl IntoView {
    let selection = RwSignal::new(PricingSelection::default());
    let quote = Memo::new(move |_| selection.get().quote());

    view! {
        <section class="py-20 bg-gradient-to-br from-background to-primary/5">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 scroll-animate">
                    <div class="flex items-center justify-center gap-2 mb-4">
                        <Icon name=icons::CALCULATOR class="w-8 h-8 text-primary" />
                        <h2 class="text-4xl md:text-5xl font-bold text-foreground">"Pricing Calculator"</h2>
                    </div>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Calculate your perfect plan based on your team size and needs"
                    </p>
                </div>

                // Calculator controls
                <div class="bg-card rounded-2xl p-8 mb-12 border border-border shadow-lg scroll-animate" style="transition-delay: 0.2s;">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <div>
                            <label for="pricing-users" class="block text-sm font-medium text-foreground mb-4">
                                "Number of Users: "
                                <span class="text-primary font-bold">{move || selection.get().users.get()}</span>
                            </label>
                            <input
                                id="pricing-users"
                                type="range"
                                min=MIN_USERS.to_string()
                                max=MAX_USERS.to_string()
                                prop:value=move || selection.get().users.get().to_string()
                                on:input=move |ev| {
                                    match UserCount::parse_input(&event_target_value(&ev)) {
                                        Ok(users) => selection.update(|s| s.users = users),
                                        Err(e) => leptos::logging::warn!("ignoring slider value: {}", e),
                                    }
                                }
                                class="w-full h-2 bg-muted rounded-lg appearance-none cursor-pointer slider"
                            />
                            <div class="flex justify-between text-xs text-muted-foreground mt-2">
                                <span>{MIN_USERS}</span>
                                <span>{MAX_USERS}</span>
                            </div>
                        </div>

                        <div>
                            <label for="pricing-tier" class="block text-sm font-medium text-foreground mb-4">
                                "Plan Type"
                            </label>
                            <select
                                id="pricing-tier"
                                prop:value=move || selection.get().tier.as_str()
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<Tier>() {
                                        Ok(tier) => selection.update(|s| s.tier = tier),
                                        Err(e) => leptos::logging::warn!("ignoring plan value: {}", e),
                                    }
                                }
                                class="w-full p-3 bg-background border border-border rounded-lg focus:ring-2 focus:ring-primary focus:border-transparent"
                            >
                                {Tier::ALL
                                    .into_iter()
                                    .map(|tier| {
                                        view! {
                                            <option
                                                value=tier.as_str()
                                                selected=move || selection.get().tier == tier
                                            >
                                                {tier.display_name()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div>
                            <span class="block text-sm font-medium text-foreground mb-4">"Billing Cycle"</span>
                            <div class="flex bg-muted rounded-lg p-1" role="group" aria-label="Billing cycle">
                                <BillingButton selection=selection billing=BillingCycle::Monthly>
                                    "Monthly"
                                </BillingButton>
                                <BillingButton selection=selection billing=BillingCycle::Yearly>
                                    "Yearly"
                                    <span class="ml-1 text-xs bg-green-500 text-white px-1 rounded">"-20%"</span>
                                </BillingButton>
                            </div>
                        </div>
                    </div>

                    // Price display, rebuilt per quote so .price-pop replays
                    <div class="mt-8 text-center">
                        {move || {
                            let quote = quote.get();
                            view! {
                                <div class="price-pop">
                                    <div class="text-4xl md:text-6xl font-bold text-primary mb-2">
                                        {quote.price_label()}
                                        <span class="text-lg text-muted-foreground">
                                            "/" {quote.billing.period_label()}
                                        </span>
                                    </div>
                                    {quote.savings_label().map(|label| view! {
                                        <p class="text-green-600 font-medium">{label}</p>
                                    })}
                                </div>
                            }
                        }}
                    </div>
                </div>

                // Plans grid
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {Tier::ALL
                        .into_iter()
                        .filter_map(plan_for)
                        .enumerate()
                        .map(|(index, plan)| view! { <PlanCard plan=*plan index=index selection=selection /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One half of the monthly/yearly segmented control
#[component]
fn BillingButton(
    selection: RwSignal<PricingSelection>,
    billing: BillingCycle,
    children: Children,
) -> impl IntoView {
    let is_active = move || selection.get().billing == billing;

    view! {
        <button
            class="flex-1 py-2 px-4 rounded-md text-sm font-medium transition-all"
            class=("bg-primary", is_active)
            class=("text-primary-foreground", is_active)
            class=("shadow-sm", is_active)
            class=("text-muted-foreground", move || !is_active())
            class=("hover:text-foreground", move || !is_active())
            aria-pressed=move || is_active().to_string()
            on:click=move |_| selection.update(|s| s.billing = billing)
        >
            {children()}
        </button>
    }
}

#[component]
fn PlanCard(plan: Plan, index: usize, selection: RwSignal<PricingSelection>) -> impl IntoView {
    let tier = plan.tier;
    let is_selected = move || selection.get().tier == tier;

    let card_class = if plan.popular {
        "relative bg-card rounded-2xl p-8 border transition-all duration-300 hover:shadow-xl scroll-animate hover-lift border-primary shadow-lg scale-105"
    } else {
        "relative bg-card rounded-2xl p-8 border transition-all duration-300 hover:shadow-xl scroll-animate hover-lift border-border hover:border-primary/50"
    };
    let button_class = if plan.popular {
        "w-full py-3 px-6 rounded-lg font-medium transition-all hover-press bg-primary text-primary-foreground hover:bg-primary/90"
    } else {
        "w-full py-3 px-6 rounded-lg font-medium transition-all hover-press bg-muted text-foreground hover:bg-primary hover:text-primary-foreground"
    };
    let delay = format!("transition-delay: {:.1}s;", index as f64 * 0.1);

    view! {
        <div class=card_class style=delay>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2">
                    <span class="bg-primary text-primary-foreground px-4 py-1 rounded-full text-sm font-medium">
                        "Most Popular"
                    </span>
                </div>
            })}

            <div class="text-center mb-6">
                <div class="flex justify-center mb-4">
                    <Icon name=plan.icon class="w-12 h-12 text-primary" />
                </div>
                <h3 class="text-2xl font-bold text-foreground mb-2">{tier.display_name()}</h3>
                <p class="text-muted-foreground">{plan.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-3">
                                <Icon name=icons::CHECK class="w-5 h-5 text-primary flex-shrink-0" />
                                <span class="text-foreground">{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class=button_class
                on:click=move |_| selection.update(|s| s.tier = tier)
            >
                {move || if is_selected() { "Selected" } else { "Choose Plan" }}
            </button>
        </div>
    }
}
