//! Transient toast banner with auto-dismiss.

use leptos::prelude::*;

use crate::state::ui::{ToastVariant, UiState};

/// Milliseconds a toast stays up without interaction.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4000;

/// Renders the active toast, if any, and schedules its auto-dismissal.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Each new toast schedules a delayed dismissal keyed to its generation,
    // so the timer of a replaced toast expires harmlessly.
    Effect::new(move || {
        let Some(seq) = ui.with(|u| u.toast.as_ref().map(|t| t.seq)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
            ui.update(|u| u.dismiss_if_current(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    view! {
        {move || {
            ui.get().toast.map(|toast| {
                let class = match toast.variant {
                    ToastVariant::Success => "toast toast--success",
                    ToastVariant::Error => "toast toast--error",
                };
                view! {
                    <div class=class role="status">
                        <span class="toast__message">{toast.message}</span>
                        <button class="toast__close" on:click=move |_| ui.update(UiState::dismiss_toast)>
                            "\u{00d7}"
                        </button>
                    </div>
                }
            })
        }}
    }
}
