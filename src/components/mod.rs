//! UI components for the lead generation page.

pub mod lead_form;
pub mod leads_table;
pub mod stats_bar;
pub mod toast;
