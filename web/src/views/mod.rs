mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod tickets;
pub use tickets::Tickets;

/// Short pause between showing a result toast and navigating away, so the
/// message is actually seen.
pub(crate) async fn toast_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
}
