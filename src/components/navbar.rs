//! Top navigation bar with session-aware links and a dark mode toggle.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Application navbar.
///
/// Shows dashboard/workspace links and a logout control when authenticated,
/// a login link otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();

    let authenticated = move || session.state().get().is_authenticated;

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"AI Note"</a>
            <div class="navbar__links">
                <Show
                    when=authenticated
                    fallback=|| view! { <a class="navbar__link" href="/login">"Login"</a> }
                >
                    <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                    <a class="navbar__link" href="/workspace">"Workspace"</a>
                    <button class="navbar__logout" on:click=on_logout>"Logout"</button>
                </Show>
                <button class="navbar__dark-toggle" title="Toggle dark mode" on:click=on_toggle_dark>
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
            </div>
        </nav>
    }
}
