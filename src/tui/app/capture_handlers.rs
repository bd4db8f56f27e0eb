//! Capture flow handlers: star picking, the feedback form, and the
//! post-submission reset timer.
//!
//! The reset timer is generation-tagged: when armed it records the capture
//! generation, and the fired message is ignored unless the generation still
//! matches and the flow is still on the thank-you screen. This makes an
//! in-flight timer from an abandoned submission a no-op instead of yanking
//! the user out of a new capture.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use crate::ratings::Score;
use crate::tui::messages::AppMsg;
use crate::tui::state::CapturePhase;

use super::KudosApp;

/// Delay before the thank-you screen resets to the star picker.
pub(super) const RESET_DELAY: Duration = Duration::from_millis(3000);

impl KudosApp {
    /// Dispatches capture flow messages to their handlers.
    pub(super) fn handle_capture_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PreviewPrevious => {
                self.capture.preview_previous();
                None
            }
            AppMsg::PreviewNext => {
                self.capture.preview_next();
                None
            }
            AppMsg::ChooseScore(score) => self.handle_choose(*score),
            AppMsg::ChoosePreviewed => {
                self.capture.choose_previewed();
                None
            }
            AppMsg::InputChar(character) => {
                self.capture.push_char(*character);
                None
            }
            AppMsg::Backspace => {
                self.capture.backspace();
                None
            }
            AppMsg::FocusNextField => {
                self.capture.focus_next_field();
                None
            }
            AppMsg::SubmitFeedback => self.handle_submit(),
            AppMsg::CancelCapture => {
                self.capture.cancel();
                None
            }
            AppMsg::ResetNow => {
                self.capture.reset();
                None
            }
            AppMsg::ResetTimerFired { generation } => self.handle_reset_timer(*generation),
            _ => {
                debug_assert!(false, "non-capture message routed to handle_capture_msg");
                None
            }
        }
    }

    fn handle_choose(&mut self, score: Score) -> Option<Cmd> {
        if self.capture.phase() == CapturePhase::Picking {
            self.capture.choose(score);
        }
        None
    }

    /// Submits the capture form, persists the rating, and arms the reset
    /// timer for the thank-you screen.
    fn handle_submit(&mut self) -> Option<Cmd> {
        let submission = self.capture.submit()?;

        self.error = None;
        if let Err(error) = self.store.add(submission) {
            self.record_store_error("save rating", &error);
        }
        self.rebuild_filter_cache();

        Some(Self::arm_reset_timer(self.capture.generation()))
    }

    /// Resets the thank-you screen if the timer is still current.
    fn handle_reset_timer(&mut self, generation: u64) -> Option<Cmd> {
        if self.capture.phase() == CapturePhase::Submitted
            && self.capture.generation() == generation
        {
            self.capture.reset();
        }
        None
    }

    /// Creates a command that fires the reset timer after [`RESET_DELAY`].
    fn arm_reset_timer(generation: u64) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(RESET_DELAY).await;
            Some(Box::new(AppMsg::ResetTimerFired { generation }) as Box<dyn Any + Send>)
        })
    }
}
