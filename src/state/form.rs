#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Lead, LeadPayload};

/// Status options offered by the form. The wire format does not constrain
/// the value; these are the ones the UI knows about.
pub const STATUS_OPTIONS: &[&str] = &["New", "Contacted", "Qualified", "Converted", "Lost"];

/// Lead source options offered by the form.
pub const SOURCE_OPTIONS: &[&str] = &[
    "Website",
    "Referral",
    "Social Media",
    "Email Campaign",
    "Cold Call",
    "Event",
    "Other",
];

/// Whether submitting the form creates a new lead or updates an existing one.
///
/// Replaces the old DOM `dataset.mode`/`dataset.id` flags with typed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update(i64),
}

impl FormMode {
    /// Whether a successful submit reloads the list. An update always
    /// reloads; a create only refreshes a leads section that is already
    /// open.
    pub fn reloads_after_submit(self, section_visible: bool) -> bool {
        match self {
            FormMode::Create => section_visible,
            FormMode::Update(_) => true,
        }
    }
}

/// Raw values of every form field. Optional backend columns are plain
/// strings here; empty means unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
    pub industry: String,
    pub lead_source: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub notes: String,
    pub status: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            job_title: String::new(),
            industry: String::new(),
            lead_source: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            zip_code: String::new(),
            notes: String::new(),
            status: "New".to_owned(),
        }
    }
}

impl FormFields {
    /// Populate every field from a fetched record, for edit mode.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            company: lead.company.clone().unwrap_or_default(),
            job_title: lead.job_title.clone().unwrap_or_default(),
            industry: lead.industry.clone().unwrap_or_default(),
            lead_source: lead.lead_source.clone(),
            address: lead.address.clone().unwrap_or_default(),
            city: lead.city.clone().unwrap_or_default(),
            state: lead.state.clone().unwrap_or_default(),
            country: lead.country.clone().unwrap_or_default(),
            zip_code: lead.zip_code.clone().unwrap_or_default(),
            notes: lead.notes.clone().unwrap_or_default(),
            status: lead.status.clone(),
        }
    }

    /// Build the request body. `created_at` is passed in (and attached) on
    /// create only.
    pub fn payload(&self, created_at: Option<String>) -> LeadPayload {
        LeadPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            job_title: self.job_title.clone(),
            industry: self.industry.clone(),
            lead_source: self.lead_source.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            zip_code: self.zip_code.clone(),
            notes: self.notes.clone(),
            status: self.status.clone(),
            created_at,
        }
    }

    /// Trivial presence check mirroring the backend's required columns.
    pub fn has_required(&self) -> bool {
        !(self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.lead_source.trim().is_empty()
            || self.status.trim().is_empty())
    }
}

/// Form view-model: field values, create/update mode, and the in-flight flag
/// that keeps the submit button disabled while a request is outstanding.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub mode: FormMode,
    pub submitting: bool,
}

impl FormState {
    /// Clear all fields and return to create mode.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.mode = FormMode::Create;
    }
}
