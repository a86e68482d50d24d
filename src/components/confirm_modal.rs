//! Confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm or abort a destructive action.
///
/// The backdrop and the cancel button both abort; only the confirm button
/// runs `on_confirm`.
#[component]
pub fn ConfirmModal(
    title: &'static str,
    description: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--danger" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__description">{description}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
