use super::*;

// =============================================================
// UploadState phase
// =============================================================

#[test]
fn upload_state_default_is_idle() {
    let state = UploadState::default();
    assert!(!state.is_uploading());
    assert!(!state.drag_active());
}

#[test]
fn begin_claims_the_widget() {
    let mut state = UploadState::default();
    assert!(state.begin());
    assert!(state.is_uploading());
}

#[test]
fn begin_while_uploading_is_refused() {
    let mut state = UploadState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.is_uploading());
}

#[test]
fn settle_returns_to_idle() {
    let mut state = UploadState::default();
    state.begin();
    state.settle();
    assert!(!state.is_uploading());
}

#[test]
fn widget_can_upload_again_after_settling() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.settle();
    assert!(state.begin());
}

// =============================================================
// drag_active is independent of the phase
// =============================================================

#[test]
fn drag_active_toggles_without_touching_phase() {
    let mut state = UploadState::default();
    state.set_drag_active(true);
    assert!(state.drag_active());
    assert!(!state.is_uploading());
    state.set_drag_active(false);
    assert!(!state.drag_active());
}

#[test]
fn drag_active_does_not_block_begin() {
    let mut state = UploadState::default();
    state.set_drag_active(true);
    assert!(state.begin());
}

// =============================================================
// UploadedFiles
// =============================================================

#[test]
fn uploaded_files_default_is_empty() {
    assert!(UploadedFiles::default().is_empty());
}

#[test]
fn uploaded_files_push_preserves_order() {
    let mut files = UploadedFiles::default();
    files.push("chart.pdf".to_owned());
    files.push("labs.csv".to_owned());
    assert!(!files.is_empty());
    assert_eq!(files.names(), ["chart.pdf", "labs.csv"]);
}
