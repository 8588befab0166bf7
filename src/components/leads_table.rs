//! Leads table: empty state, per-lead rows, and the edit/delete actions.

#[cfg(test)]
#[path = "leads_table_test.rs"]
mod leads_table_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ApiError, Lead};
use crate::state::form::{FormFields, FormMode, FormState};
use crate::state::leads::{LeadsState, TableView};
use crate::state::toast::{ToastKind, ToastState};
use crate::util;

/// Ask the user to approve a row deletion. Anything but an affirmative
/// answer (including host builds, where no dialog exists) denies, and the
/// caller issues no request.
pub fn confirm_delete() -> bool {
    util::browser::confirm("Are you sure you want to delete this lead?")
}

/// Fetch the lead list into shared state.
///
/// Used by the table refreshes after create/update/delete and by the
/// view-leads action on the home page. Any failure collapses to one toast,
/// matching the single-action error model.
pub async fn reload(leads: RwSignal<LeadsState>, toast: RwSignal<ToastState>) {
    leads.update(|l| l.loading = true);
    match api::fetch_leads().await {
        Ok(items) => leads.update(|l| {
            l.items = items;
            l.loading = false;
        }),
        Err(_) => {
            leads.update(|l| l.loading = false);
            toast.update(|t| t.show("Failed to load leads", ToastKind::Error));
        }
    }
}

/// The leads table. Renders the empty-state row for a zero-length list,
/// otherwise one row per lead.
#[component]
pub fn LeadsTable() -> impl IntoView {
    let leads = expect_context::<RwSignal<LeadsState>>();

    view! {
        <div class="leads-table__wrap">
            <table class="leads-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Company"</th>
                        <th>"Industry"</th>
                        <th>"Source"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = leads.get();
                        match state.table_view() {
                            TableView::Loading => view! {
                                <tr>
                                    <td colspan="10" class="leads-table__empty">
                                        "Loading leads..."
                                    </td>
                                </tr>
                            }
                                .into_any(),
                            TableView::Empty => view! {
                                <tr>
                                    <td colspan="10" class="leads-table__empty">
                                        "No leads found. Generate your first lead!"
                                    </td>
                                </tr>
                            }
                                .into_any(),
                            TableView::Rows => state
                                .items
                                .into_iter()
                                .map(|lead| view! { <LeadRow lead=lead/> })
                                .collect::<Vec<_>>()
                                .into_any(),
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Render an optional column, falling back to "N/A" like the table always
/// has.
fn or_na(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => "N/A".to_owned(),
    }
}

/// One table row with edit and delete actions.
#[component]
fn LeadRow(lead: Lead) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let leads = expect_context::<RwSignal<LeadsState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let id = lead.id;
    let name = format!("{} {}", lead.first_name, lead.last_name);
    let company = or_na(&lead.company);
    let industry = or_na(&lead.industry);
    let status_class = format!("status-badge status-badge--{}", lead.status.to_lowercase());
    let created = util::datetime::format_timestamp(&lead.created_at);

    // Fetch the record fresh, mirror it into the form, and flip to update
    // mode until the next reset.
    let on_edit = move |_| {
        leptos::task::spawn_local(async move {
            match api::fetch_lead(id).await {
                Ok(fetched) => {
                    form.update(|s| {
                        s.fields = FormFields::from_lead(&fetched);
                        s.mode = FormMode::Update(id);
                    });
                    toast.update(|t| t.show("Lead loaded for editing", ToastKind::Success));
                    util::browser::scroll_to("lead-form");
                }
                Err(_) => {
                    toast.update(|t| t.show("Failed to load lead", ToastKind::Error));
                }
            }
        });
    };

    // No-op unless the user confirms.
    let on_delete = move |_| {
        if !confirm_delete() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_lead(id).await {
                Ok(()) => {
                    toast.update(|t| t.show("Lead deleted successfully!", ToastKind::Success));
                    reload(leads, toast).await;
                }
                Err(ApiError::Server(msg)) => {
                    toast.update(|t| t.show(msg, ToastKind::Error));
                }
                Err(ApiError::Connection) => {
                    toast.update(|t| t.show("Failed to delete lead", ToastKind::Error));
                }
            }
        });
    };

    view! {
        <tr>
            <td>{lead.id}</td>
            <td>{name}</td>
            <td>{lead.email.clone()}</td>
            <td>{lead.phone.clone()}</td>
            <td>{company}</td>
            <td>{industry}</td>
            <td>{lead.lead_source.clone()}</td>
            <td>
                <span class=status_class>{lead.status.clone()}</span>
            </td>
            <td>{created}</td>
            <td>
                <div class="leads-table__actions">
                    <button class="btn btn--small" on:click=on_edit>
                        "Edit"
                    </button>
                    <button class="btn btn--small btn--danger" on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
