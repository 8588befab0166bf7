//! Lead capture form, shared between create and update mode.

use leptos::prelude::*;

use crate::components::leads_table::reload;
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::form::{FormFields, FormMode, FormState, SOURCE_OPTIONS, STATUS_OPTIONS};
use crate::state::leads::LeadsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util;

/// Derive a (value, setter) pair for one form field.
fn bind(
    form: RwSignal<FormState>,
    get: fn(&FormFields) -> &String,
    set: fn(&mut FormFields, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || get(&form.get().fields).clone()),
        Callback::new(move |value| form.update(|state| set(&mut state.fields, value))),
    )
}

/// The lead form. Submitting POSTs a new lead, or PUTs the one being edited
/// when the mode is `Update(id)`; the submit button is disabled while the
/// request is in flight. On success the form resets to create mode and the
/// list is refreshed if the leads section is open.
#[component]
pub fn LeadForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let leads = expect_context::<RwSignal<LeadsState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let (first_name, set_first_name) = bind(form, |f| &f.first_name, |f, v| f.first_name = v);
    let (last_name, set_last_name) = bind(form, |f| &f.last_name, |f, v| f.last_name = v);
    let (email, set_email) = bind(form, |f| &f.email, |f, v| f.email = v);
    let (phone, set_phone) = bind(form, |f| &f.phone, |f, v| f.phone = v);
    let (company, set_company) = bind(form, |f| &f.company, |f, v| f.company = v);
    let (job_title, set_job_title) = bind(form, |f| &f.job_title, |f, v| f.job_title = v);
    let (industry, set_industry) = bind(form, |f| &f.industry, |f, v| f.industry = v);
    let (lead_source, set_lead_source) = bind(form, |f| &f.lead_source, |f, v| f.lead_source = v);
    let (address, set_address) = bind(form, |f| &f.address, |f, v| f.address = v);
    let (city, set_city) = bind(form, |f| &f.city, |f, v| f.city = v);
    let (state, set_state) = bind(form, |f| &f.state, |f, v| f.state = v);
    let (country, set_country) = bind(form, |f| &f.country, |f, v| f.country = v);
    let (zip_code, set_zip_code) = bind(form, |f| &f.zip_code, |f, v| f.zip_code = v);
    let (notes, set_notes) = bind(form, |f| &f.notes, |f, v| f.notes = v);
    let (status, set_status) = bind(form, |f| &f.status, |f, v| f.status = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = form.get();
        if current.submitting || !current.fields.has_required() {
            return;
        }
        form.update(|s| s.submitting = true);

        leptos::task::spawn_local(async move {
            let state = form.get_untracked();
            let outcome = match state.mode {
                FormMode::Create => {
                    let payload = state.fields.payload(Some(util::datetime::now_iso()));
                    api::create_lead(&payload).await.map(|_| ()).map_err(|err| {
                        match err {
                            ApiError::Server(msg) => msg,
                            ApiError::Connection => {
                                "Connection error. Make sure the API server is running.".to_owned()
                            }
                        }
                    })
                }
                FormMode::Update(id) => {
                    let payload = state.fields.payload(None);
                    api::update_lead(id, &payload).await.map_err(|err| match err {
                        ApiError::Server(msg) => msg,
                        ApiError::Connection => "Failed to update lead".to_owned(),
                    })
                }
            };

            match outcome {
                Ok(()) => {
                    let message = match state.mode {
                        FormMode::Create => "Lead generated successfully!",
                        FormMode::Update(_) => "Lead updated successfully!",
                    };
                    toast.update(|t| t.show(message, ToastKind::Success));
                    form.update(|s| {
                        s.reset();
                        s.submitting = false;
                    });
                    if state.mode.reloads_after_submit(leads.get_untracked().visible) {
                        reload(leads, toast).await;
                    }
                }
                Err(message) => {
                    form.update(|s| s.submitting = false);
                    toast.update(|t| t.show(message, ToastKind::Error));
                }
            }
        });
    };

    let submit_label = move || {
        let state = form.get();
        match (state.mode, state.submitting) {
            (FormMode::Create, false) => "Generate Lead",
            (FormMode::Create, true) => "Generating Lead...",
            (FormMode::Update(_), false) => "Update Lead",
            (FormMode::Update(_), true) => "Updating...",
        }
    };

    view! {
        <form id="lead-form" class="lead-form" on:submit=on_submit>
            <div class="lead-form__grid">
                <TextField label="First Name" required=true value=first_name on_change=set_first_name/>
                <TextField label="Last Name" required=true value=last_name on_change=set_last_name/>
                <TextField label="Email" required=true input_type="email" value=email on_change=set_email/>
                <TextField label="Phone" required=true input_type="tel" value=phone on_change=set_phone/>
                <TextField label="Company" value=company on_change=set_company/>
                <TextField label="Job Title" value=job_title on_change=set_job_title/>
                <TextField label="Industry" value=industry on_change=set_industry/>
                <SelectField
                    label="Lead Source"
                    required=true
                    options=SOURCE_OPTIONS
                    placeholder="Select source"
                    value=lead_source
                    on_change=set_lead_source
                />
                <TextField label="Address" value=address on_change=set_address/>
                <TextField label="City" value=city on_change=set_city/>
                <TextField label="State" value=state on_change=set_state/>
                <TextField label="Country" value=country on_change=set_country/>
                <TextField label="Zip Code" value=zip_code on_change=set_zip_code/>
                <SelectField
                    label="Status"
                    required=true
                    options=STATUS_OPTIONS
                    value=status
                    on_change=set_status
                />
            </div>
            <TextArea label="Notes" value=notes on_change=set_notes/>
            <button
                type="submit"
                class="btn btn--primary lead-form__submit"
                disabled=move || form.get().submitting
            >
                {submit_label}
            </button>
        </form>
    }
}

/// Labeled text input bound to one form field.
#[component]
fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Labeled select bound to one form field.
#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="" disabled=true>{text}</option> })}
                {options
                    .iter()
                    .map(|opt| {
                        let opt = *opt;
                        view! {
                            <option value=opt selected=move || value.get() == opt>
                                {opt}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Labeled multi-line input for the notes field.
#[component]
fn TextArea(
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field field--wide">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}
