//! Toast host - renders the shared toast queue and sweeps expired toasts.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use onboard_ui::ToastStack;

use crate::context::use_toasts;

/// How often expired toasts are swept.
const SWEEP_INTERVAL: Duration = Duration::from_millis(250);

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    use_future(move || async move {
        loop {
            tokio::time::sleep(SWEEP_INTERVAL).await;
            let now = Instant::now();
            // peek: checking must not subscribe or trigger a re-render
            if toasts.peek().any_expired(now) {
                let removed = toasts.write().expire(now);
                tracing::trace!("Swept {} expired toast(s)", removed);
            }
        }
    });

    rsx! {
        ToastStack { toasts }
    }
}
