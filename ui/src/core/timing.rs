//! Timer primitives shared by widgets that advance on their own.

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u32::MAX as u64) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Calendar year used by the footer's copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
