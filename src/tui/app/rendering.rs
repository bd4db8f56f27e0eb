//! Rendering logic for the feedback kiosk TUI.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use crate::tui::components::{
    CaptureFormComponent, CaptureFormViewContext, ConfirmDialogComponent, RatingListViewContext,
    StarRowComponent, StarRowViewContext, SummaryComponent, SummaryViewContext,
};
use crate::tui::input::InputContext;
use crate::tui::state::CapturePhase;

use super::{KudosApp, ViewMode};

/// Lines consumed by dashboard chrome: header, filter bar, summary block,
/// spacing, and status bar.
const DASHBOARD_CHROME_HEIGHT: usize = 12;

impl KudosApp {
    /// Renders the full frame for the current view.
    pub(super) fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the main body: the confirm dialog when open, otherwise the
    /// active view.
    fn render_body(&self) -> String {
        self.confirm.as_ref().map_or_else(
            || match self.view_mode {
                ViewMode::Capture => self.render_capture_view(),
                ViewMode::Dashboard => self.render_dashboard_view(),
            },
            ConfirmDialogComponent::view,
        )
    }

    /// Renders the header bar.
    fn render_header(&self) -> String {
        let view = match self.view_mode {
            ViewMode::Capture => "Rate your experience",
            ViewMode::Dashboard => "Dashboard",
        };
        format!("Kudos - {view}\n")
    }

    /// Renders the capture view for the current phase.
    fn render_capture_view(&self) -> String {
        match self.capture.phase() {
            CapturePhase::Picking => {
                let stars = StarRowComponent::view(&StarRowViewContext {
                    preview: self.capture.preview(),
                    selected: self.capture.selected(),
                });
                format!("How was your experience?\n\n  {stars}\n")
            }
            CapturePhase::Commenting => self.capture.selected().map_or_else(
                String::new,
                |score| {
                    let form = CaptureFormComponent::view(&CaptureFormViewContext {
                        score,
                        name: self.capture.name(),
                        feedback: self.capture.feedback(),
                        focus: self.capture.focus(),
                        errors: self.capture.errors(),
                    });
                    format!("Tell us more\n\n{form}")
                },
            ),
            CapturePhase::Submitted => {
                "Thank you for your feedback!\n\nReturning to the rating screen shortly.\n"
                    .to_owned()
            }
        }
    }

    /// Renders the dashboard: summary, filter bar, and the rating list.
    fn render_dashboard_view(&self) -> String {
        let mut output = SummaryComponent::view(&SummaryViewContext {
            ratings: self.ratings(),
        });
        output.push('\n');
        output.push_str(&self.render_filter_bar());

        let ctx = RatingListViewContext {
            ratings: self.ratings(),
            filtered_indices: self.filtered_indices(),
            cursor_position: self.filter_state.cursor_position,
            scroll_offset: self.filter_state.scroll_offset,
            visible_height: self.calculate_list_height(),
        };
        output.push_str(&self.rating_list.view(&ctx));
        output
    }

    /// Renders the filter bar showing the active filter.
    fn render_filter_bar(&self) -> String {
        let label = self.filter_state.active_filter.label();
        let count = self.filtered_count();
        let total = self.ratings().len();
        format!("Filter: {label} ({count}/{total})\n")
    }

    /// Renders the status bar with errors or key hints.
    fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let hints = match self.input_context() {
            InputContext::StarPicker => {
                "left/right:preview  1-5:choose  Enter:confirm  Tab:dashboard  q:quit"
            }
            InputContext::FeedbackForm => "Tab:next field  Enter:submit  Esc:back",
            InputContext::Submitted => "Enter:rate again  Tab:dashboard  q:quit",
            InputContext::Confirm => "y:confirm  n:cancel",
            InputContext::Dashboard => "j/k:move  f:cycle  1-5/a:filter  c:clear  Tab:rate  q:quit",
        };
        format!("{hints}\n")
    }

    /// Number of list lines that fit under the dashboard chrome.
    pub(super) fn calculate_list_height(&self) -> usize {
        (self.height as usize)
            .saturating_sub(DASHBOARD_CHROME_HEIGHT)
            .max(1)
    }
}
