//! Root application component with shared state contexts.

use leptos::prelude::*;

use crate::components::toast::Toast;
use crate::net::api;
use crate::pages::home::HomePage;
use crate::state::form::FormState;
use crate::state::leads::LeadsState;
use crate::state::toast::{ToastKind, ToastState};

/// Root application component.
///
/// Provides the shared view-model contexts and runs the one-shot liveness
/// probe against the backend on mount.
#[component]
pub fn App() -> impl IntoView {
    let leads = RwSignal::new(LeadsState::default());
    let form = RwSignal::new(FormState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(leads);
    provide_context(form);
    provide_context(toast);

    // Liveness probe at page load; a dead backend gets one warning toast and
    // the UI stays usable for when it comes back.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if !api::check_health().await {
                #[cfg(feature = "csr")]
                log::warn!("API server not reachable at {}", api::API_BASE_URL);
                toast.update(|t| {
                    t.show(
                        "API server not connected. Please start the API server.",
                        ToastKind::Warning,
                    );
                });
            }
        });
    });

    view! {
        <div class="app">
            <HomePage/>
            <Toast/>
        </div>
    }
}
