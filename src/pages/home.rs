//! Single-screen page shell composing upload, report, and chat widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the uploaded-file list; the widgets are otherwise
//! independent and reach the backend on their own. The upload card reports
//! successful uploads upward through a callback, which is the only
//! cross-widget wiring on the page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::report_card::ReportCard;
use crate::components::upload_card::UploadCard;
use crate::state::uploads::UploadedFiles;

/// Landing page: header bar plus the sidebar/chat grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let uploaded = RwSignal::new(UploadedFiles::default());
    let on_uploaded = Callback::new(move |name: String| {
        uploaded.update(|files| files.push(name));
    });

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <div class="home-page__brand">
                    <span class="home-page__mark" aria-hidden="true">"M"</span>
                    <h1 class="home-page__title">"MedAssist"</h1>
                </div>
                <span class="home-page__tagline">"Connected to secure retrieval engine"</span>
            </header>

            <div class="home-page__grid">
                <div class="home-page__sidebar">
                    <section class="home-page__section">
                        <h2 class="home-page__section-title">"Data Sources"</h2>
                        <UploadCard on_uploaded=on_uploaded/>
                        <Show when=move || !uploaded.get().is_empty()>
                            <div class="context-list card">
                                <h3 class="context-list__title">"Active Context"</h3>
                                <ul class="context-list__items">
                                    {move || {
                                        uploaded
                                            .get()
                                            .names()
                                            .iter()
                                            .map(|name| {
                                                view! {
                                                    <li class="context-list__item">
                                                        <span
                                                            class="context-list__dot"
                                                            aria-hidden="true"
                                                        ></span>
                                                        {name.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                            </div>
                        </Show>
                    </section>

                    <section class="home-page__section">
                        <h2 class="home-page__section-title">"Report Actions"</h2>
                        <ReportCard/>
                    </section>
                </div>

                <div class="home-page__main">
                    <ChatPanel/>
                </div>
            </div>
        </main>
    }
}
