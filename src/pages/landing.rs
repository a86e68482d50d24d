//! Public landing page with a canned AI preview demo.

use leptos::prelude::*;

/// Landing page shown to unauthenticated visitors.
#[component]
pub fn LandingPage() -> impl IntoView {
    let demo_text = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);

    let on_demo = move |_| {
        let text = demo_text.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        preview.set(Some(demo_preview(&text)));
    };

    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1 class="landing-page__title">"AI Note"</h1>
                <p class="landing-page__tagline">
                    "Focus on the idea. Record the deeper insight."
                </p>
                <div class="landing-page__cta">
                    <a class="btn btn--primary" href="/register">"Get started"</a>
                    <a class="btn" href="/login">"Sign in"</a>
                </div>
            </section>

            <section class="landing-page__demo">
                <h2>"Try it"</h2>
                <textarea
                    class="landing-page__demo-input"
                    placeholder="Write a sentence..."
                    prop:value=move || demo_text.get()
                    on:input=move |ev| demo_text.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" on:click=on_demo>"Preview"</button>
                {move || {
                    preview
                        .get()
                        .map(|text| view! { <pre class="landing-page__demo-result">{text}</pre> })
                }}
            </section>
        </div>
    }
}

/// Canned offline preview; real commentary needs an account.
fn demo_preview(text: &str) -> String {
    format!("AI preview: \"{text}\" could be sharpened further. Sign up for the full insight.")
}
