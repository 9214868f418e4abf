//! Timer abstraction for paced UI work.
//!
//! In the browser, sleeps are `gloo-timers` timeouts driven by the JS event
//! loop. Native builds resolve immediately so render logic can be driven to
//! completion in tests.

#![allow(clippy::unused_async)]

use std::future::Future;

/// Source of cooperative delays.
pub trait Clock {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// `setTimeout`-backed clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, ms: u32) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ms;
        }
    }
}
