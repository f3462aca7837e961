//=============================================================================
// File: src/hooks/use_scroll_offset.rs
//=============================================================================

// The browser build listens on `window` through web_sys. Webview platforms
// (desktop, mobile) get the offset pushed from a small script via `eval`.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::webview::*;

/// # WebAssembly (WASM) Implementation
/// A `scroll` listener on `window` forwards offsets over a channel. The
/// listener lives inside the hook's task, so it is detached when the owning
/// component unmounts.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use dioxus::prelude::*;
    use futures::channel::mpsc;
    use futures::StreamExt;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    struct ScrollListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        fn attach(tx: mpsc::UnboundedSender<f64>) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::<dyn FnMut()>::new(move || {
                let _ = tx.unbounded_send(current_offset());
            });
            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }

    fn current_offset() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    pub fn use_scroll_offset() -> Signal<f64> {
        let mut offset = use_signal(current_offset);

        use_future(move || async move {
            let (tx, mut rx) = mpsc::unbounded();
            let Some(_listener) = ScrollListener::attach(tx) else {
                dioxus_logger::tracing::warn!("no window to watch for scrolling");
                return;
            };
            while let Some(y) = rx.next().await {
                offset.set(y);
            }
        });

        offset
    }
}

/// # Webview Implementation
/// Installs a listener with `eval` and receives offsets over the eval channel.
/// The listener is removed again on unmount.
#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use dioxus::prelude::*;

    const SUBSCRIBE_JS: &str = r#"
        window.__storefrontScroll = () => dioxus.send(window.scrollY);
        window.addEventListener("scroll", window.__storefrontScroll, { passive: true });
        dioxus.send(window.scrollY);
    "#;

    const UNSUBSCRIBE_JS: &str = r#"
        if (window.__storefrontScroll) {
            window.removeEventListener("scroll", window.__storefrontScroll);
            delete window.__storefrontScroll;
        }
    "#;

    pub fn use_scroll_offset() -> Signal<f64> {
        let mut offset = use_signal(|| 0.0);

        use_future(move || async move {
            let mut eval = document::eval(SUBSCRIBE_JS);
            while let Ok(y) = eval.recv::<f64>().await {
                offset.set(y);
            }
        });

        use_drop(|| {
            let _ = document::eval(UNSUBSCRIBE_JS);
        });

        offset
    }
}
