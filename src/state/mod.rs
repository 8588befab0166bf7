//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`leads`, `form`, `toast`) so individual
//! components can depend on small focused models. Each struct is a plain
//! value held in an `RwSignal` provided via context; the form's create/update
//! mode lives here as an explicit enum instead of DOM attributes.

pub mod form;
pub mod leads;
pub mod toast;
