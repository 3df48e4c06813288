//! Upload widget state and the page-owned uploaded-file list.
//!
//! DESIGN
//! ======
//! `drag_active` is purely visual hover feedback and is independent of the
//! request phase; it never gates an upload. The uploaded-file list belongs
//! to the page shell, not the widget — the widget only reports successes
//! upward through a callback.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

/// Request lifecycle of the upload widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// No upload in flight; drop zone and picker accept a file.
    #[default]
    Idle,
    /// A file is being sent to the backend.
    Uploading,
}

/// Upload widget state: request phase plus drag-hover highlight.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    phase: UploadPhase,
    drag_active: bool,
}

impl UploadState {
    /// True while a file is being sent.
    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    /// True while a dragged file hovers the drop zone.
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// Claim the widget for one upload.
    ///
    /// Returns `false` and changes nothing if an upload is already in
    /// flight.
    pub fn begin(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.phase = UploadPhase::Uploading;
        true
    }

    /// Settle the in-flight upload, success or failure.
    pub fn settle(&mut self) {
        self.phase = UploadPhase::Idle;
    }
}

/// Names of successfully uploaded documents.
///
/// Append-only and display-only; entries carry no content reference into
/// the conversation.
#[derive(Clone, Debug, Default)]
pub struct UploadedFiles {
    names: Vec<String>,
}

impl UploadedFiles {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Uploaded file names in upload order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Record one successful upload.
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }
}
