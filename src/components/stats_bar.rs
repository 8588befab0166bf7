//! Summary counters above the leads table.

use leptos::prelude::*;

use crate::state::leads::{LeadsState, status_counts};

/// Four stat cards: total leads plus the New/Qualified/Converted breakdown,
/// recomputed whenever the list changes.
#[component]
pub fn StatsBar() -> impl IntoView {
    let leads = expect_context::<RwSignal<LeadsState>>();

    let counts = move || status_counts(&leads.get().items);

    view! {
        <div class="stats-bar">
            <StatCard label="Total Leads" value=Signal::derive(move || counts().total)/>
            <StatCard label="New" value=Signal::derive(move || counts().new)/>
            <StatCard label="Qualified" value=Signal::derive(move || counts().qualified)/>
            <StatCard label="Converted" value=Signal::derive(move || counts().converted)/>
        </div>
    }
}

/// A single labeled counter.
#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
