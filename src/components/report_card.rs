//! Report generation card: section checkboxes and the generate/download flow.

use leptos::prelude::*;

use crate::state::report::{ReportState, SECTIONS};

/// Report card: pick sections, have the backend generate the report, then
/// offer the resulting file as a download.
///
/// Generation is a two-step flow — the generate call returns an opaque
/// filename, and the download anchor's activation retrieves that file. Every
/// trigger regenerates from the current selection; nothing is cached.
#[component]
pub fn ReportCard() -> impl IntoView {
    let report = RwSignal::new(ReportState::default());

    let on_generate = move |_| {
        let mut sections = None;
        report.update(|state| {
            if state.begin() {
                sections = Some(state.selected_sections());
            }
        });
        let Some(sections) = sections else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_report(sections).await {
                Ok(filename) => {
                    let url = crate::net::api::download_report_url(&filename);
                    if !crate::util::download::save_file(&url, &filename) {
                        log::warn!("report download could not be offered: {filename}");
                        crate::util::notify::alert("Failed to generate report.");
                    }
                }
                Err(err) => {
                    log::warn!("report generation failed: {err}");
                    crate::util::notify::alert("Failed to generate report.");
                }
            }
            report.update(|state| state.settle());
        });
        #[cfg(not(feature = "csr"))]
        let _ = sections;
    };

    view! {
        <div class="report-card card">
            <div class="report-card__header">
                <h2 class="report-card__title">"Generate Report"</h2>
                <p class="report-card__hint">
                    "Select sections to include in the automated report."
                </p>
            </div>
            <div class="report-card__sections">
                {SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, name)| {
                        view! {
                            <label class="report-card__section">
                                <input
                                    type="checkbox"
                                    prop:checked=move || report.get().is_selected(index)
                                    on:change=move |_| report.update(|state| state.toggle(index))
                                />
                                <span>{*name}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button
                class="btn btn--primary report-card__generate"
                on:click=on_generate
                disabled=move || report.get().is_generating()
            >
                {move || {
                    if report.get().is_generating() {
                        "Generating PDF..."
                    } else {
                        "Generate & Download"
                    }
                }}
            </button>
        </div>
    }
}
