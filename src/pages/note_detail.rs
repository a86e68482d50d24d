//! Read-only note view with edit and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_modal::ConfirmModal;
use crate::net::api;
use crate::state::ui::UiState;

/// Detail view for one note, fetched by the `:id` route parameter.
#[component]
pub fn NoteDetailPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let note_id = move || params.read().get("id").unwrap_or_default();

    let note = LocalResource::new(move || {
        let id = note_id();
        async move { api::fetch_note(&id).await }
    });

    let show_delete = RwSignal::new(false);
    let navigate = use_navigate();

    let on_delete = Callback::new(move |()| {
        let id = note_id();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::delete_note(&id).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.show_success("Note deleted.");
                    });
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    ui.update(|u| {
                        u.show_error(err.to_string());
                    });
                }
            }
            show_delete.set(false);
        });
    });

    let on_cancel = Callback::new(move |()| show_delete.set(false));

    view! {
        <div class="note-detail-page">
            <a class="note-detail-page__back" href="/dashboard">"Back to notes"</a>

            <Suspense fallback=move || {
                view! { <p class="note-detail-page__loading">"Loading note..."</p> }
            }>
                {move || {
                    note.get().map(|result| match result {
                        Ok(note) => {
                            let edit_href = format!("/workspace/{}", note.id);
                            view! {
                                <article class="note-detail-page__card">
                                    <header class="note-detail-page__header">
                                        <span class="note-detail-page__date">{note.updated_at}</span>
                                        <a class="btn" href=edit_href>"Edit"</a>
                                    </header>
                                    <p class="note-detail-page__content">{note.content}</p>
                                </article>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! {
                                <p class="note-detail-page__error">
                                    "Note could not be loaded: " {err.to_string()}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <button
                class="btn btn--danger note-detail-page__delete"
                on:click=move |_| show_delete.set(true)
            >
                "Delete"
            </button>

            <Show when=move || show_delete.get()>
                <ConfirmModal
                    title="Delete note"
                    description="Delete this note? This cannot be undone."
                    confirm_label="Yes, delete it"
                    on_confirm=on_delete
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
