//! AI insight panel: request commentary for note text and browse past
//! entries.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::FeedbackEntry;

/// Panel that submits note text for AI commentary and lists previous
/// note/commentary pairs. Selecting an entry loads its full record.
#[component]
pub fn InsightPanel() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let commentary = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<FeedbackEntry>);

    let history = LocalResource::new(|| api::fetch_feedbacks());

    let do_send = move || {
        let text = input.get_untracked().trim().to_owned();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_feedback(&text).await {
                Ok(resp) => {
                    commentary.set(Some(resp.feedback));
                    pending.set(false);
                    history.refetch();
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    let on_select = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::fetch_feedback(&id).await {
                Ok(entry) => selected.set(Some(entry)),
                Err(err) => leptos::logging::warn!("insight {id} failed to load: {err}"),
            }
        });
    };

    view! {
        <div class="insight-panel">
            <div class="insight-panel__composer">
                <textarea
                    class="insight-panel__input"
                    placeholder="Ask AI for an insight on a note..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || pending.get() on:click=move |_| do_send()>
                    {move || if pending.get() { "Thinking..." } else { "Get insight" }}
                </button>
            </div>

            {move || error.get().map(|msg| view! { <p class="insight-panel__error">{msg}</p> })}
            {move || {
                commentary.get().map(|text| {
                    view! {
                        <div class="insight-panel__result">
                            <span class="insight-panel__label">"AI insight"</span>
                            <p class="insight-panel__content">{text}</p>
                        </div>
                    }
                })
            }}

            <h3 class="insight-panel__heading">"Previous insights"</h3>
            <Suspense fallback=move || view! { <p class="insight-panel__loading">"Loading insights..."</p> }>
                {move || {
                    history.get().map(|entries| match entries {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="insight-panel__empty">"No insights yet."</p> }.into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="insight-panel__list">
                                    {list
                                        .into_iter()
                                        .map(|entry| {
                                            let id = entry.id.clone();
                                            view! {
                                                <li class="insight-panel__item">
                                                    <button
                                                        class="insight-panel__item-button"
                                                        on:click=move |_| on_select(id.clone())
                                                    >
                                                        {entry.question.clone()}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! { <p class="insight-panel__error">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>

            {move || {
                selected.get().map(|entry| {
                    view! {
                        <div class="insight-panel__detail">
                            <p class="insight-panel__question">{entry.question}</p>
                            <p class="insight-panel__answer">{entry.answer}</p>
                            <span class="insight-panel__date">{entry.created_at}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
