use super::*;

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn formats_naive_backend_timestamp() {
    assert_eq!(
        format_timestamp("2024-01-15T14:30:00"),
        "Jan 15, 2024, 02:30 PM"
    );
}

#[test]
fn formats_naive_timestamp_with_microseconds() {
    assert_eq!(
        format_timestamp("2024-01-15T09:05:12.123456"),
        "Jan 15, 2024, 09:05 AM"
    );
}

#[test]
fn formats_rfc3339_client_timestamp() {
    assert_eq!(
        format_timestamp("2024-03-05T23:59:00.000Z"),
        "Mar 5, 2024, 11:59 PM"
    );
}

#[test]
fn formats_space_separated_timestamp() {
    assert_eq!(
        format_timestamp("2024-07-04 00:15:00"),
        "Jul 4, 2024, 12:15 AM"
    );
}

#[test]
fn unparseable_input_passes_through() {
    assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    assert_eq!(format_timestamp(""), "");
}

// =============================================================
// export_filename
// =============================================================

#[test]
fn export_filename_is_date_stamped() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
    assert_eq!(export_filename(date), "leads_export_2024-02-09.xlsx");
}

#[test]
fn export_filename_zero_pads_month_and_day() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
    assert_eq!(export_filename(date), "leads_export_2024-11-30.xlsx");
}

// =============================================================
// now_iso
// =============================================================

#[test]
fn now_iso_looks_like_a_utc_timestamp() {
    let stamp = now_iso();
    assert!(stamp.ends_with('Z'));
    assert_eq!(stamp.len(), "2024-01-15T14:30:00.000Z".len());
}
