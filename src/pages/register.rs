//! Registration page with client-side validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::validate;

const REGISTER_FAILED_MSG: &str = "Registration failed. The email may already be in use.";

/// Registration form. Malformed input never reaches the network.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = validate::validate_registration(&email_value, &password_value) {
            ui.update(|u| {
                u.show_error(msg);
            });
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&email_value, &password_value).await {
                Ok(resp) if resp.is_verification_required => {
                    submitting.set(false);
                    ui.update(|u| {
                        u.show_success(format!(
                            "Verification mail sent to {email_value}. Check your inbox."
                        ));
                    });
                    navigate("/login", NavigateOptions::default());
                }
                Ok(_) => {
                    // Registration set the session credential; re-verify
                    // before entering the protected area.
                    session.check_status().await;
                    submitting.set(false);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    submitting.set(false);
                    let msg = err
                        .server_message()
                        .map_or(REGISTER_FAILED_MSG.to_owned(), ToOwned::to_owned);
                    ui.update(|u| {
                        u.show_error(msg);
                    });
                }
            }
        });
    };

    view! {
        <div class="register-page">
            <div class="card register-page__card">
                <h2 class="register-page__title">"Register"</h2>
                <input
                    class="register-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="register-page__input"
                    type="password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" disabled=move || submitting.get() on:click=submit>
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </div>
        </div>
    }
}
