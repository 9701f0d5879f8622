//! Frame presentation port.

use crate::board::services::BoardFrame;

#[cfg(test)]
use mockall::automock;

/// Outbound render contract.
///
/// The engine derives a [`BoardFrame`] after every handled event and hands
/// it to the presenter. Implementations display columns in sequence order,
/// each containing its cards, plus the drag overlay when one is active.
#[cfg_attr(test, automock)]
pub trait BoardPresenter {
    /// Displays the given frame.
    fn present(&mut self, frame: &BoardFrame);
}
