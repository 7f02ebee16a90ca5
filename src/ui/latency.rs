//! Simulated backend latency for admin actions

/// Run `action` after `ms` milliseconds in the browser.
/// On the server it runs immediately; event handlers never fire there.
pub fn after_delay(ms: u32, action: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            action();
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = ms;
        action();
    }
}
