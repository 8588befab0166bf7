#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::net::types::Lead;

/// Transient mirror of the last lead list the backend returned, plus the
/// visibility flag for the leads section.
#[derive(Clone, Debug, Default)]
pub struct LeadsState {
    pub items: Vec<Lead>,
    pub loading: bool,
    pub visible: bool,
}

/// What the table body should show for the current list state. A refresh
/// over an existing list keeps the rows on screen instead of flashing the
/// loading row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Rows,
}

impl LeadsState {
    pub fn table_view(&self) -> TableView {
        if self.items.is_empty() {
            if self.loading {
                TableView::Loading
            } else {
                TableView::Empty
            }
        } else {
            TableView::Rows
        }
    }
}

/// Summary counters shown above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub new: usize,
    pub qualified: usize,
    pub converted: usize,
}

/// Recompute the four counters by filtering on status. Statuses outside the
/// three named ones still count toward the total.
pub fn status_counts(leads: &[Lead]) -> StatusCounts {
    StatusCounts {
        total: leads.len(),
        new: leads.iter().filter(|l| l.status == "New").count(),
        qualified: leads.iter().filter(|l| l.status == "Qualified").count(),
        converted: leads.iter().filter(|l| l.status == "Converted").count(),
    }
}
