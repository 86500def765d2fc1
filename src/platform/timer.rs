use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
