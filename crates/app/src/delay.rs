use std::time::Duration;

/// Pause between a successful auth form submit and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
