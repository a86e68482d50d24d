//! Card for one note in the dashboard history list.

use leptos::prelude::*;

use crate::net::types::Note;

/// Characters of note content shown in the card preview.
const PREVIEW_LEN: usize = 120;

/// A clickable card linking to the note's detail view.
#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let href = format!("/note/{}", note.id);
    let preview = preview_text(&note.content);

    view! {
        <a class="note-card" href=href>
            <p class="note-card__preview">{preview}</p>
            <span class="note-card__date">{note.created_at}</span>
        </a>
    }
}

/// First line of the content, truncated on a char boundary.
fn preview_text(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(PREVIEW_LEN).collect();
    if preview.len() < first_line.len() {
        preview.push('\u{2026}');
    }
    preview
}
