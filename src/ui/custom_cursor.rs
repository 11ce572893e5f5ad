//! Decorative cursor that follows the pointer.
//!
//! Hidden on coarse pointers via CSS; the native cursor stays usable.

use leptos::prelude::*;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let (position, set_position) = signal((-100i32, -100i32));
    let (is_pressed, set_is_pressed) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            set_position.set((ev.client_x(), ev.client_y()));
        });
        let down_handle = window_event_listener(leptos::ev::mousedown, move |_| {
            set_is_pressed.set(true);
        });
        let up_handle = window_event_listener(leptos::ev::mouseup, move |_| {
            set_is_pressed.set(false);
        });

        on_cleanup(move || {
            move_handle.remove();
            down_handle.remove();
            up_handle.remove();
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (set_position, set_is_pressed);
    }

    let transform = move || {
        let (x, y) = position.get();
        let scale = if is_pressed.get() { 0.8 } else { 1.0 };
        format!("transform: translate3d({x}px, {y}px, 0) translate(-50%, -50%) scale({scale});")
    };

    view! {
        <div class="custom-cursor-ring" style=transform aria-hidden="true"></div>
        <div
            class="custom-cursor-dot"
            style=move || {
                let (x, y) = position.get();
                format!("transform: translate3d({x}px, {y}px, 0) translate(-50%, -50%);")
            }
            aria-hidden="true"
        ></div>
    }
}
