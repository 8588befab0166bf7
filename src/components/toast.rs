//! Transient auto-dismissing notification.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
const TOAST_MS: u32 = 3_000;

/// Toast element pinned to the corner of the page.
///
/// Every `show` bumps `seq`; the dismiss timer re-checks it so a newer toast
/// is never hidden by an older timer firing late.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    // Track only the sequence number: the timer's own `visible = false`
    // write must not re-trigger the effect and spawn another timer.
    let current_seq = Memo::new(move |_| toast.get().seq);

    Effect::new(move || {
        let seq = current_seq.get();
        if seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                toast.update(|t| {
                    if t.seq == seq {
                        t.visible = false;
                    }
                });
            });
        }
    });

    let class = move || {
        let state = toast.get();
        let kind = state.kind.css_class();
        if state.visible {
            format!("toast {kind} toast--visible")
        } else {
            format!("toast {kind}")
        }
    };

    view! {
        <div class=class role="status">
            {move || toast.get().message}
        </div>
    }
}
