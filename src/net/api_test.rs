use super::*;

#[test]
fn query_url_targets_expected_path() {
    assert_eq!(query_url(), format!("{}/api/query", api_base()));
}

#[test]
fn upload_url_targets_expected_path() {
    assert_eq!(upload_url(), format!("{}/api/upload", api_base()));
}

#[test]
fn generate_report_url_targets_expected_path() {
    assert_eq!(
        generate_report_url(),
        format!("{}/api/report/generate_report", api_base())
    );
}

#[test]
fn download_report_url_embeds_filename_verbatim() {
    assert_eq!(
        download_report_url("report_123.pdf"),
        format!("{}/api/report/download/report_123.pdf", api_base())
    );
}

#[test]
fn api_base_is_a_bare_origin() {
    // Paths are appended with a leading slash, so the origin must not end
    // with one.
    assert!(!api_base().ends_with('/'));
}
