//! Dark mode preference handling.
//!
//! The preference lives in `localStorage`; applying it toggles the
//! `.dark-mode` class on `<html>`. Falls back to the system color scheme
//! when nothing is stored. Requires a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ainote_dark";

/// Resolve the stored preference, falling back to the system scheme, and
/// apply it. Returns the resolved value.
pub fn init() -> bool {
    let enabled = read_preference();
    apply(enabled);
    enabled
}

fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Toggle dark mode, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
    }
    next
}

fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = el.class_list();
        let _ = if enabled {
            classes.add_1("dark-mode")
        } else {
            classes.remove_1("dark-mode")
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
