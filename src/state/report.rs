//! Report widget state: section selection and generation phase.
//!
//! DESIGN
//! ======
//! The section set is fixed and ordered; selection is an index-aligned flag
//! array so the generated section list always follows declaration order,
//! never map-iteration order.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Report sections offered for inclusion, in display order.
pub const SECTIONS: [&str; 4] = [
    "Introduction",
    "Clinical Findings",
    "Treatment Plan",
    "Summary",
];

/// Default inclusion flags, index-aligned with [`SECTIONS`].
const DEFAULT_SELECTED: [bool; SECTIONS.len()] = [true, true, false, true];

/// Request lifecycle of the report widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPhase {
    /// No generation in flight.
    #[default]
    Idle,
    /// The backend is generating a report.
    Generating,
}

/// Report widget state.
#[derive(Clone, Debug)]
pub struct ReportState {
    selected: [bool; SECTIONS.len()],
    phase: ReportPhase,
}

impl Default for ReportState {
    fn default() -> Self {
        Self {
            selected: DEFAULT_SELECTED,
            phase: ReportPhase::default(),
        }
    }
}

impl ReportState {
    /// True while a generation request is in flight.
    pub fn is_generating(&self) -> bool {
        self.phase == ReportPhase::Generating
    }

    /// Whether the section at `index` is currently included.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Flip one section's inclusion flag. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Names of the included sections, in [`SECTIONS`] declaration order.
    pub fn selected_sections(&self) -> Vec<String> {
        SECTIONS
            .iter()
            .zip(self.selected)
            .filter(|(_, on)| *on)
            .map(|(name, _)| (*name).to_owned())
            .collect()
    }

    /// Claim the widget for one generation run.
    ///
    /// Returns `false` and changes nothing if a run is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_generating() {
            return false;
        }
        self.phase = ReportPhase::Generating;
        true
    }

    /// Settle the in-flight run, success or failure.
    pub fn settle(&mut self) {
        self.phase = ReportPhase::Idle;
    }
}
