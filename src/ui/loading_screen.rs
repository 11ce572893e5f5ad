//! Splash screen shown on first load.
//!
//! Driven by [`SplashSchedule::advance`]: the browser timers only report elapsed time,
//! the schedule decides whether `on_complete` may run.

use leptos::prelude::*;

use crate::core::splash::{SPLASH_FADE_MS, SplashSchedule};

#[component]
pub fn LoadingScreen(
    /// Fired once the splash has finished fading out
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let schedule = StoredValue::new(SplashSchedule::new());
    let (is_fading, set_is_fading) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::splash::{SPLASH_VISIBLE_MS, SplashEvent};
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        // A disposed schedule means the splash was torn down; report nothing
        let tick = move |elapsed_ms: u32| {
            schedule
                .try_update_value(|s| s.advance(elapsed_ms))
                .unwrap_or_default()
        };

        spawn_local(async move {
            let mut elapsed = 0;
            for wait in [SPLASH_VISIBLE_MS, SPLASH_FADE_MS] {
                TimeoutFuture::new(wait).await;
                elapsed += wait;
                for event in tick(elapsed) {
                    match event {
                        SplashEvent::FadeStarted => set_is_fading.set(true),
                        SplashEvent::Completed => on_complete.run(()),
                    }
                }
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (on_complete, set_is_fading);
    }

    on_cleanup(move || {
        schedule.try_update_value(|s| s.cancel());
    });

    let fade_style = format!("transition: opacity {}ms ease;", SPLASH_FADE_MS);

    view! {
        <div
            class="loading-container"
            style=move || {
                let opacity = if is_fading.get() { 0 } else { 1 };
                format!("{} opacity: {};", fade_style, opacity)
            }
            role="status"
            aria-label="Loading"
        >
            <div class="loading-lines">
                <div class="loading-line"></div>
                <div class="loading-line"></div>
                <div class="loading-line"></div>
                <div class="loading-line"></div>
            </div>
        </div>
    }
}
