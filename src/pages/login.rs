//! Login page driven by the shared session service.

use leptos::prelude::*;

use crate::state::session::Session;

/// Login form. Validation, loading, and error state live in the session
/// service; this page only renders them.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let loading = move || session.state().get().loading;

    let submit = move || {
        if session.state().get_untracked().loading {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        leptos::task::spawn_local(async move {
            session.login(&email, &password).await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-page__card">
                <h2 class="login-page__title">"AI Note"</h2>
                <p class="login-page__subtitle">"Focus on the idea. Record the deeper insight."</p>

                {move || {
                    let msg = session.state().get().error_msg;
                    (!msg.is_empty()).then(|| view! { <p class="login-page__error">{msg}</p> })
                }}

                <input
                    class="login-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />

                <button
                    class="btn btn--primary login-page__submit"
                    disabled=loading
                    on:click=move |_| submit()
                >
                    {move || if loading() { "Signing in..." } else { "Continue" }}
                </button>

                <p class="login-page__register">
                    "No account yet? "
                    <a href="/register">"Register now"</a>
                </p>
            </div>
        </div>
    }
}
