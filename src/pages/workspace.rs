//! Workspace: compose a new note or edit an existing one, with the AI
//! insight panel alongside.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::insight_panel::InsightPanel;
use crate::components::note_creator::NoteCreator;
use crate::net::api;
use crate::state::ui::UiState;

/// Workspace page. Without an `:id` parameter it hosts the note creator;
/// with one it loads that note for editing.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let note_id = move || params.read().get("id");

    view! {
        <div class="workspace-page">
            <header class="workspace-page__header">
                <h1>"AI Note Workspace"</h1>
                <p class="workspace-page__tagline">
                    "Capture ideas and let AI distill the insight."
                </p>
            </header>

            <div class="workspace-page__main">
                {move || match note_id() {
                    Some(id) => view! { <NoteEditor id=id/> }.into_any(),
                    None => view! { <NoteCreator/> }.into_any(),
                }}
                <InsightPanel/>
            </div>
        </div>
    }
}

/// Editor for an existing note: load, modify, save.
#[component]
fn NoteEditor(id: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let fetch_id = id.clone();
    let note = LocalResource::new(move || {
        let id = fetch_id.clone();
        async move { api::fetch_note(&id).await }
    });

    // Seed the editor once the note arrives, without clobbering edits.
    Effect::new(move || {
        if let Some(Ok(loaded)) = note.get() {
            if content.get_untracked().is_empty() {
                content.set(loaded.content);
            }
        }
    });

    let save = Callback::new(move |()| {
        let text = content.get_untracked().trim().to_owned();
        if text.is_empty() || saving.get_untracked() {
            return;
        }
        saving.set(true);
        let id = id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_note(&id, &text).await {
                Ok(updated) => {
                    saving.set(false);
                    ui.update(|u| {
                        u.show_success("Note updated.");
                    });
                    navigate(&format!("/note/{}", updated.id), NavigateOptions::default());
                }
                Err(err) => {
                    saving.set(false);
                    ui.update(|u| {
                        u.show_error(err.to_string());
                    });
                }
            }
        });
    });

    view! {
        <section class="note-editor">
            <h2 class="note-editor__title">"Edit note"</h2>
            <Suspense fallback=move || view! { <p class="note-editor__loading">"Loading note..."</p> }>
                {move || {
                    note.get().map(|result| match result {
                        Ok(_) => {
                            view! {
                                <div class="note-editor__form">
                                    <textarea
                                        class="note-editor__input"
                                        prop:value=move || content.get()
                                        on:input=move |ev| content.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    ></textarea>
                                    <div class="note-editor__actions">
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || saving.get()
                                            on:click=move |_| save.run(())
                                        >
                                            {move || if saving.get() { "Saving..." } else { "Save changes" }}
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! {
                                <p class="note-editor__error">
                                    "Note could not be loaded: " {err.to_string()}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
