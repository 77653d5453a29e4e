//! `setTimeout`-backed [`Delay`] for the waitlist flow.

use std::time::Duration;

use econest::Delay;
use js_sys::Promise;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolves after the requested duration using `window.setTimeout`.
///
/// Without a window (or if scheduling fails) it resolves immediately so the
/// flow never hangs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        let Some(window) = web_sys::window() else {
            warn!("no window, skipping delay");
            return;
        };
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            if let Err(err) = scheduled {
                warn!(?err, "setTimeout failed, resolving immediately");
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}
