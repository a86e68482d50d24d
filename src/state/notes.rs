#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::{Note, NoteListResponse};

/// Notes requested per page on the dashboard.
pub const PAGE_SIZE: u32 = 10;

/// Distance from the bottom of the scroll container, in pixels, at which the
/// next page starts loading.
const SCROLL_THRESHOLD_PX: i32 = 200;

/// Paginated note-history state behind the dashboard's infinite scroll.
///
/// Fetches are fenced with a sequence number: a page response is applied only
/// if it belongs to the most recently issued request, so a superseded fetch
/// resolving late cannot clobber newer state.
#[derive(Clone, Debug)]
pub struct NotesState {
    pub items: Vec<Note>,
    /// 1-based page the next fetch will request.
    pub next_page: u32,
    /// Unknown until the first page arrives.
    pub total_pages: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    fetch_seq: u64,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: 1,
            total_pages: None,
            loading: false,
            error: None,
            fetch_seq: 0,
        }
    }
}

impl NotesState {
    /// Whether the server may still have unfetched pages.
    pub fn has_more(&self) -> bool {
        self.total_pages.map_or(true, |total| self.next_page <= total)
    }

    /// Open a fenced fetch for the next page. Returns the ticket the
    /// resolution must present, or `None` when a fetch is already running or
    /// the history is exhausted.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.fetch_seq += 1;
        Some(FetchTicket {
            seq: self.fetch_seq,
            page: self.next_page,
        })
    }

    /// Merge a page response, dropping records already present. Stale
    /// tickets are discarded.
    pub fn apply_page(&mut self, ticket: FetchTicket, response: NoteListResponse) {
        if ticket.seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        for note in response.notes {
            if !self.items.iter().any(|n| n.id == note.id) {
                self.items.push(note);
            }
        }
        self.total_pages = Some(response.pagination.total_pages);
        self.next_page = response.pagination.current_page + 1;
    }

    /// Record a failed fetch. Stale tickets are discarded.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: String) {
        if ticket.seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Drop all fetched history and start over from page one. Any in-flight
    /// fetch becomes stale and its resolution is discarded.
    pub fn reset(&mut self) {
        let seq = self.fetch_seq;
        *self = Self::default();
        self.fetch_seq = seq;
    }
}

/// Ticket tying a page request to the state generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub page: u32,
}

/// True when a scroll container is within loading distance of its bottom.
pub fn scrolled_near_bottom(scroll_top: i32, client_height: i32, scroll_height: i32) -> bool {
    scroll_top + client_height >= scroll_height - SCROLL_THRESHOLD_PX
}
