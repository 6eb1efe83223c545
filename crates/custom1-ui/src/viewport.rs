//! Viewport width tracking.

use custom1_core::layout::DEFAULT_VIEWPORT_WIDTH;
use leptos::prelude::*;

/// Current viewport width in CSS pixels.
///
/// Falls back to [`DEFAULT_VIEWPORT_WIDTH`] when there is no window to measure.
pub fn sample_viewport_width() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        if let Some(width) = width {
            return width.max(0.0) as u32;
        }
    }

    DEFAULT_VIEWPORT_WIDTH
}

/// Reactive viewport width for the calling component.
///
/// Samples once on creation and again on every `resize` event. The listener
/// belongs to the calling component and is removed when it unmounts.
pub fn use_viewport_width() -> ReadSignal<u32> {
    let (width, set_width) = signal(sample_viewport_width());

    #[cfg(target_arch = "wasm32")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            set_width.set(sample_viewport_width());
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_width;

    width
}
