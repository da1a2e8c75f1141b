//! Sleeping that works both in the browser and during server rendering.

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    let _ = ms;
}
