//! Note composer card: textarea plus submit, posting to the note API.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::ui::UiState;

/// Note composer. Creates the note on submit and returns to the dashboard.
#[component]
pub fn NoteCreator() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let text = content.get_untracked().trim().to_owned();
        if text.is_empty() || submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_note(&text).await {
                Ok(_) => {
                    content.set(String::new());
                    submitting.set(false);
                    ui.update(|u| {
                        u.show_success("Note saved.");
                    });
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    submitting.set(false);
                    ui.update(|u| {
                        u.show_error(err.to_string());
                    });
                }
            }
        });
    });

    view! {
        <section class="note-creator">
            <h2 class="note-creator__title">"New note"</h2>
            <textarea
                class="note-creator__input"
                placeholder="Write down today's idea. AI can distill the insight for you."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
                disabled=move || submitting.get()
            ></textarea>
            <div class="note-creator__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || submitting.get() || content.get().trim().is_empty()
                    on:click=move |_| submit.run(())
                >
                    {move || if submitting.get() { "Saving..." } else { "Save note" }}
                </button>
            </div>
        </section>
    }
}
