//! Shared helpers for integration and behaviour tests.

use pegboard::board::ports::BoardPresenter;
use pegboard::board::services::BoardFrame;
use std::cell::RefCell;
use std::rc::Rc;

/// Presenter capturing every presented frame for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    frames: Rc<RefCell<Vec<BoardFrame>>>,
}

impl RecordingPresenter {
    /// Returns the most recently presented frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<BoardFrame> {
        self.frames.borrow().last().cloned()
    }

    /// Returns how many frames have been presented.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl BoardPresenter for RecordingPresenter {
    fn present(&mut self, frame: &BoardFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}
