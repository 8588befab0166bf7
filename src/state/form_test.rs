use super::*;

fn sample_lead() -> Lead {
    Lead {
        id: 42,
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        phone: "555-0102".to_owned(),
        company: Some("Navy".to_owned()),
        job_title: Some("Rear Admiral".to_owned()),
        industry: Some("Defense".to_owned()),
        lead_source: "Event".to_owned(),
        address: Some("1 Pier Rd".to_owned()),
        city: Some("Arlington".to_owned()),
        state: Some("VA".to_owned()),
        country: Some("USA".to_owned()),
        zip_code: Some("22202".to_owned()),
        notes: Some("keynote speaker".to_owned()),
        status: "Qualified".to_owned(),
        created_at: "2024-01-15T14:30:00".to_owned(),
        updated_at: None,
    }
}

// =============================================================
// FormMode / FormState defaults
// =============================================================

#[test]
fn form_mode_default_is_create() {
    assert_eq!(FormMode::default(), FormMode::Create);
}

#[test]
fn form_state_default_not_submitting() {
    let state = FormState::default();
    assert!(!state.submitting);
    assert_eq!(state.mode, FormMode::Create);
}

#[test]
fn form_fields_default_status_is_new() {
    assert_eq!(FormFields::default().status, "New");
}

// =============================================================
// Post-submit reload
// =============================================================

#[test]
fn create_reloads_only_when_the_section_is_open() {
    assert!(FormMode::Create.reloads_after_submit(true));
    assert!(!FormMode::Create.reloads_after_submit(false));
}

#[test]
fn update_always_reloads() {
    assert!(FormMode::Update(42).reloads_after_submit(true));
    assert!(FormMode::Update(42).reloads_after_submit(false));
}

// =============================================================
// Edit-mode population
// =============================================================

#[test]
fn from_lead_round_trips_every_field() {
    let lead = sample_lead();
    let fields = FormFields::from_lead(&lead);
    assert_eq!(fields.first_name, "Grace");
    assert_eq!(fields.last_name, "Hopper");
    assert_eq!(fields.email, "grace@example.com");
    assert_eq!(fields.phone, "555-0102");
    assert_eq!(fields.company, "Navy");
    assert_eq!(fields.job_title, "Rear Admiral");
    assert_eq!(fields.industry, "Defense");
    assert_eq!(fields.lead_source, "Event");
    assert_eq!(fields.address, "1 Pier Rd");
    assert_eq!(fields.city, "Arlington");
    assert_eq!(fields.state, "VA");
    assert_eq!(fields.country, "USA");
    assert_eq!(fields.zip_code, "22202");
    assert_eq!(fields.notes, "keynote speaker");
    assert_eq!(fields.status, "Qualified");
}

#[test]
fn from_lead_blanks_missing_optional_fields() {
    let mut lead = sample_lead();
    lead.company = None;
    lead.notes = None;
    let fields = FormFields::from_lead(&lead);
    assert!(fields.company.is_empty());
    assert!(fields.notes.is_empty());
}

// =============================================================
// Payload construction
// =============================================================

#[test]
fn payload_carries_all_fields_and_timestamp() {
    let fields = FormFields::from_lead(&sample_lead());
    let payload = fields.payload(Some("2024-02-01T08:00:00.000Z".to_owned()));
    assert_eq!(payload.first_name, fields.first_name);
    assert_eq!(payload.last_name, fields.last_name);
    assert_eq!(payload.email, fields.email);
    assert_eq!(payload.phone, fields.phone);
    assert_eq!(payload.company, fields.company);
    assert_eq!(payload.job_title, fields.job_title);
    assert_eq!(payload.industry, fields.industry);
    assert_eq!(payload.lead_source, fields.lead_source);
    assert_eq!(payload.address, fields.address);
    assert_eq!(payload.city, fields.city);
    assert_eq!(payload.state, fields.state);
    assert_eq!(payload.country, fields.country);
    assert_eq!(payload.zip_code, fields.zip_code);
    assert_eq!(payload.notes, fields.notes);
    assert_eq!(payload.status, fields.status);
    assert_eq!(
        payload.created_at.as_deref(),
        Some("2024-02-01T08:00:00.000Z")
    );
}

#[test]
fn payload_without_timestamp_for_updates() {
    let payload = FormFields::from_lead(&sample_lead()).payload(None);
    assert!(payload.created_at.is_none());
}

// =============================================================
// Presence check and reset
// =============================================================

#[test]
fn has_required_rejects_blank_required_fields() {
    let mut fields = FormFields::from_lead(&sample_lead());
    assert!(fields.has_required());
    fields.email = "   ".to_owned();
    assert!(!fields.has_required());
}

#[test]
fn has_required_ignores_optional_fields() {
    let mut fields = FormFields::from_lead(&sample_lead());
    fields.company = String::new();
    fields.notes = String::new();
    assert!(fields.has_required());
}

#[test]
fn reset_clears_fields_and_restores_create_mode() {
    let mut state = FormState {
        fields: FormFields::from_lead(&sample_lead()),
        mode: FormMode::Update(42),
        submitting: false,
    };
    state.reset();
    assert_eq!(state.mode, FormMode::Create);
    assert_eq!(state.fields, FormFields::default());
}

// =============================================================
// Option tables
// =============================================================

#[test]
fn status_options_cover_the_counted_statuses() {
    for status in ["New", "Qualified", "Converted"] {
        assert!(STATUS_OPTIONS.contains(&status));
    }
}

#[test]
fn source_options_are_non_empty_and_distinct() {
    for (i, a) in SOURCE_OPTIONS.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &SOURCE_OPTIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
