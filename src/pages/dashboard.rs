//! Dashboard: the paginated, infinitely scrolling note history.

use leptos::prelude::*;

use crate::components::note_card::NoteCard;
use crate::net::api;
use crate::state::notes::{self, NotesState, PAGE_SIZE};

/// Note history, newest first, with pages fetched as the list approaches the
/// bottom of its scroll container. Fetches are fenced; see [`NotesState`].
#[component]
pub fn DashboardPage() -> impl IntoView {
    let notes = RwSignal::new(NotesState::default());

    let load_more = move || {
        let Some(ticket) = notes.try_update(NotesState::begin_fetch).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_notes(ticket.page, PAGE_SIZE).await {
                Ok(resp) => notes.update(|s| s.apply_page(ticket, resp)),
                Err(err) => notes.update(|s| s.fail_fetch(ticket, err.to_string())),
            }
        });
    };

    let refresh = move |_| {
        notes.update(NotesState::reset);
        load_more();
    };

    // First page on mount.
    Effect::new(move || load_more());

    let on_scroll = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let el = event_target::<web_sys::HtmlElement>(&ev);
            if notes::scrolled_near_bottom(el.scroll_top(), el.client_height(), el.scroll_height())
            {
                load_more();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My notes"</h1>
                <button class="btn" on:click=refresh>"Refresh"</button>
            </header>

            <div class="dashboard-page__scroll" on:scroll=on_scroll>
                {move || {
                    let state = notes.get();
                    if state.items.is_empty() && !state.loading && state.error.is_none() {
                        view! {
                            <div class="dashboard-page__empty">
                                <p>"No notes yet."</p>
                                <a class="btn btn--primary" href="/workspace">"Write the first one"</a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="dashboard-page__list">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|note| view! { <NoteCard note=note/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                {move || {
                    notes
                        .get()
                        .error
                        .map(|msg| view! { <p class="dashboard-page__error">{msg}</p> })
                }}
                {move || {
                    notes
                        .get()
                        .loading
                        .then(|| view! { <p class="dashboard-page__loading">"Loading notes..."</p> })
                }}
                {move || {
                    let state = notes.get();
                    (state.has_more() && !state.loading).then(|| {
                        view! {
                            <button class="btn dashboard-page__more" on:click=move |_| load_more()>
                                "Load more"
                            </button>
                        }
                    })
                }}
            </div>
        </div>
    }
}
