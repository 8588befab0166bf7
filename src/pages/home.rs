//! The single page: lead form, action buttons, and the collapsible leads
//! section with stats and table.

use leptos::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::leads_table::{LeadsTable, reload};
use crate::components::stats_bar::StatsBar;
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::leads::LeadsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util;

/// Home page. The leads section starts hidden; View Leads reveals it, loads
/// the list, and scrolls to it. Export streams the spreadsheet and hands it
/// to the browser as a date-stamped download.
#[component]
pub fn HomePage() -> impl IntoView {
    let leads = expect_context::<RwSignal<LeadsState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let exporting = RwSignal::new(false);

    let on_view = move |_| {
        leads.update(|l| l.visible = true);
        leptos::task::spawn_local(async move {
            reload(leads, toast).await;
            util::browser::scroll_to("leads-section");
        });
    };

    let on_close = move |_| leads.update(|l| l.visible = false);

    let on_export = move |_| {
        if exporting.get() {
            return;
        }
        exporting.set(true);
        leptos::task::spawn_local(async move {
            match api::export_leads().await {
                Ok(bytes) => {
                    let filename = util::datetime::export_filename(util::datetime::today());
                    util::download::save_blob(&bytes, &filename);
                    toast.update(|t| {
                        t.show("Leads exported to Excel successfully!", ToastKind::Success);
                    });
                }
                Err(ApiError::Server(_)) => {
                    toast.update(|t| t.show("Failed to export leads", ToastKind::Error));
                }
                Err(ApiError::Connection) => {
                    toast.update(|t| {
                        t.show(
                            "Failed to export leads. Make sure the API server is running.",
                            ToastKind::Error,
                        );
                    });
                }
            }
            exporting.set(false);
        });
    };

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Lead Generation System"</h1>
                <p>"Capture, track, and export your sales leads"</p>
            </header>

            <section class="home-page__form-section">
                <h2>"New Lead"</h2>
                <LeadForm/>
            </section>

            <div class="home-page__actions">
                <button class="btn" on:click=on_view>
                    "View All Leads"
                </button>
                <button class="btn" on:click=on_export disabled=move || exporting.get()>
                    {move || if exporting.get() { "Exporting..." } else { "Export to Excel" }}
                </button>
            </div>

            <Show when=move || leads.get().visible>
                <section id="leads-section" class="home-page__leads-section">
                    <header class="home-page__leads-header">
                        <h2>"All Leads"</h2>
                        <button class="btn btn--small" on:click=on_close>
                            "Close"
                        </button>
                    </header>
                    <StatsBar/>
                    <LeadsTable/>
                </section>
            </Show>
        </div>
    }
}
