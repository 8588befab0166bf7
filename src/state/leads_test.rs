use super::*;

fn lead(id: i64, status: &str) -> Lead {
    Lead {
        id,
        first_name: "Test".to_owned(),
        last_name: "Lead".to_owned(),
        email: format!("lead{id}@example.com"),
        phone: "555-0100".to_owned(),
        company: None,
        job_title: None,
        industry: None,
        lead_source: "Website".to_owned(),
        address: None,
        city: None,
        state: None,
        country: None,
        zip_code: None,
        notes: None,
        status: status.to_owned(),
        created_at: "2024-01-15T14:30:00".to_owned(),
        updated_at: None,
    }
}

// =============================================================
// LeadsState defaults
// =============================================================

#[test]
fn leads_state_default_is_empty_and_hidden() {
    let state = LeadsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.visible);
}

// =============================================================
// table_view
// =============================================================

#[test]
fn table_view_loading_while_first_fetch_is_in_flight() {
    let state = LeadsState {
        loading: true,
        ..LeadsState::default()
    };
    assert_eq!(state.table_view(), TableView::Loading);
}

#[test]
fn table_view_empty_state_after_a_zero_result_fetch() {
    assert_eq!(LeadsState::default().table_view(), TableView::Empty);
}

#[test]
fn table_view_keeps_rows_during_a_refresh() {
    let state = LeadsState {
        items: vec![lead(1, "New")],
        loading: true,
        visible: true,
    };
    assert_eq!(state.table_view(), TableView::Rows);
}

#[test]
fn table_view_rows_for_a_non_empty_list() {
    let state = LeadsState {
        items: vec![lead(1, "New"), lead(2, "Lost")],
        ..LeadsState::default()
    };
    assert_eq!(state.table_view(), TableView::Rows);
}

// =============================================================
// status_counts
// =============================================================

#[test]
fn status_counts_empty_list_is_all_zero() {
    assert_eq!(status_counts(&[]), StatusCounts::default());
}

#[test]
fn status_counts_filters_each_named_status() {
    let leads = vec![
        lead(1, "New"),
        lead(2, "New"),
        lead(3, "Qualified"),
        lead(4, "Converted"),
        lead(5, "Converted"),
        lead(6, "Converted"),
    ];
    let counts = status_counts(&leads);
    assert_eq!(counts.total, 6);
    assert_eq!(counts.new, 2);
    assert_eq!(counts.qualified, 1);
    assert_eq!(counts.converted, 3);
}

#[test]
fn status_counts_other_statuses_only_hit_the_total() {
    let leads = vec![lead(1, "Contacted"), lead(2, "Lost")];
    let counts = status_counts(&leads);
    assert_eq!(counts.total, 2);
    assert_eq!(counts.new, 0);
    assert_eq!(counts.qualified, 0);
    assert_eq!(counts.converted, 0);
}

#[test]
fn status_counts_is_case_sensitive_like_the_backend() {
    let leads = vec![lead(1, "new")];
    assert_eq!(status_counts(&leads).new, 0);
    assert_eq!(status_counts(&leads).total, 1);
}
