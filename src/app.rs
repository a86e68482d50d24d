//! Root application component: routing, context wiring, and the HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, OptionalParamSegment, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::guard::{RouteGuard, RouteMode};
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, landing::LandingPage, login::LoginPage,
    note_detail::NoteDetailPage, register::RegisterPage, workspace::WorkspacePage,
};
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: meta context plus the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ainote.css"/>
        <Title text="AI Note"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Inner shell, rendered under the router so navigation can be injected into
/// the session service.
///
/// Constructs the session service, provides the shared contexts, and starts
/// the one startup session check before any route renders — guards therefore
/// always see `is_auth_checking` until the first verification resolves.
#[component]
fn AppShell() -> impl IntoView {
    let navigate = use_navigate();
    let session = Session::new(Callback::new(move |path: String| {
        navigate(&path, NavigateOptions::default());
    }));
    provide_context(session);

    let ui = RwSignal::new(UiState::with_dark_mode(dark_mode::init()));
    provide_context(ui);

    session.spawn_status_check();

    view! {
        <Navbar/>
        <ToastHost/>
        <main class="app-main">
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RouteGuard mode=RouteMode::Unauthenticated redirect_path="/dashboard">
                                <LandingPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route path=StaticSegment("home") view=HomePage/>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RouteGuard mode=RouteMode::Unauthenticated>
                                <LoginPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <RouteGuard mode=RouteMode::Unauthenticated>
                                <RegisterPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard mode=RouteMode::Protected>
                                <DashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("workspace"), OptionalParamSegment("id"))
                    view=|| {
                        view! {
                            <RouteGuard mode=RouteMode::Protected>
                                <WorkspacePage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route path=(StaticSegment("note"), ParamSegment("id")) view=NoteDetailPage/>
            </Routes>
        </main>
    }
}
