//! One-shot AI feedback page, usable without the full workspace.

use leptos::prelude::*;

use crate::net::api;

/// Home page: paste a note, get a single round of AI feedback.
#[component]
pub fn HomePage() -> impl IntoView {
    let note = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let result = RwSignal::new(None::<Result<String, String>>);

    let submit = move |_| {
        let text = note.get_untracked().trim().to_owned();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        pending.set(true);
        leptos::task::spawn_local(async move {
            let outcome = api::create_feedback(&text)
                .await
                .map(|resp| resp.feedback)
                .map_err(|err| err.to_string());
            result.set(Some(outcome));
            pending.set(false);
        });
    };

    view! {
        <div class="home-page">
            <section class="card">
                <h1 class="card__title">"AI Note Feedback"</h1>
                <textarea
                    class="home-page__input"
                    placeholder="Write your note..."
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                ></textarea>
                <div class="home-page__actions">
                    <button class="btn btn--primary" disabled=move || pending.get() on:click=submit>
                        {move || if pending.get() { "Processing..." } else { "Get feedback" }}
                    </button>
                    <button class="btn" on:click=move |_| note.set(String::new())>"Clear"</button>
                </div>
                {move || {
                    result.get().map(|outcome| match outcome {
                        Ok(feedback) => {
                            view! {
                                <div class="card card--nested">
                                    <h2>"Feedback"</h2>
                                    <pre class="home-page__feedback">{feedback}</pre>
                                </div>
                            }
                                .into_any()
                        }
                        Err(msg) => {
                            view! { <p class="home-page__error">"Failed to get feedback: " {msg}</p> }
                                .into_any()
                        }
                    })
                }}
            </section>
        </div>
    }
}
