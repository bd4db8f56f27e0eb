//! Dashboard handlers: list navigation, filtering, and the clear flow.

use bubbletea_rs::Cmd;

use crate::ratings::ScoreFilter;
use crate::tui::messages::AppMsg;
use crate::tui::state::ConfirmDialog;

use super::KudosApp;

impl KudosApp {
    /// Dispatches dashboard messages to their handlers.
    pub(super) fn handle_dashboard_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.filter_state.cursor_up();
                self.adjust_scroll_to_cursor();
                None
            }
            AppMsg::CursorDown => {
                self.filter_state.cursor_down(self.max_index());
                self.adjust_scroll_to_cursor();
                None
            }
            AppMsg::Home => {
                self.filter_state.home();
                None
            }
            AppMsg::End => {
                self.filter_state.end(self.max_index());
                self.adjust_scroll_to_cursor();
                None
            }
            AppMsg::SetFilter(filter) => self.handle_set_filter(*filter),
            AppMsg::CycleFilter => self.handle_set_filter(self.filter_state.next_filter()),
            AppMsg::ClearRequested => self.handle_clear_requested(),
            AppMsg::ConfirmAccepted => self.handle_confirm_accepted(),
            AppMsg::ConfirmCancelled => {
                self.confirm = None;
                None
            }
            _ => {
                debug_assert!(false, "non-dashboard message routed to handle_dashboard_msg");
                None
            }
        }
    }

    fn handle_set_filter(&mut self, filter: ScoreFilter) -> Option<Cmd> {
        self.filter_state.active_filter = filter;
        self.rebuild_filter_cache();
        None
    }

    /// Opens the confirmation dialog guarding the destructive clear.
    ///
    /// Clearing an already-empty collection needs no confirmation and does
    /// nothing.
    fn handle_clear_requested(&mut self) -> Option<Cmd> {
        if self.store.is_empty() {
            return None;
        }
        self.confirm = Some(ConfirmDialog::clear_ratings(self.store.len()));
        None
    }

    fn handle_confirm_accepted(&mut self) -> Option<Cmd> {
        self.confirm = None;
        self.error = None;
        if let Err(error) = self.store.clear() {
            self.record_store_error("clear ratings", &error);
        }
        self.rebuild_filter_cache();
        None
    }

    fn max_index(&self) -> usize {
        self.filtered_count().saturating_sub(1)
    }

    /// Adjusts the scroll offset so the cursor stays within the visible
    /// window.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.filter_state.cursor_position;
        let visible_height = self.calculate_list_height();

        if cursor < self.filter_state.scroll_offset {
            self.filter_state.scroll_offset = cursor;
            return;
        }

        let viewport_end = self
            .filter_state
            .scroll_offset
            .saturating_add(visible_height);
        if cursor >= viewport_end {
            self.filter_state.scroll_offset =
                cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
