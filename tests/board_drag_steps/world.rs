//! Shared world state for board drag BDD scenarios.

use crate::test_helpers::RecordingPresenter;
use pegboard::board::adapters::SequenceIdSource;
use pegboard::board::domain::{Card, Column, EntityId};
use pegboard::engine::BoardEngine;
use rstest::fixture;

/// Engine type used by the BDD world.
pub type TestEngine = BoardEngine<SequenceIdSource, RecordingPresenter>;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    /// Engine under test.
    pub engine: TestEngine,
    /// Handle onto the frames the engine presented.
    pub presenter: RecordingPresenter,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let presenter = RecordingPresenter::default();
        let engine = BoardEngine::new(SequenceIdSource::new(), presenter.clone());
        Self { engine, presenter }
    }

    /// Creates a column and renames it to the given title.
    pub fn add_column(&mut self, title: &str) {
        let id = self.engine.create_column();
        self.engine.rename_column(id, title);
    }

    /// Creates a card in the titled column, keeping the default content.
    pub fn add_card_with_default_content(&mut self, title: &str) -> Result<(), eyre::Report> {
        let column = self.column_id(title)?;
        self.engine.create_card(column);
        Ok(())
    }

    /// Creates a card in the titled column and sets its content.
    pub fn add_card(&mut self, title: &str, content: &str) -> Result<(), eyre::Report> {
        let column = self.column_id(title)?;
        let card = self.engine.create_card(column);
        self.engine.update_card(card, content);
        Ok(())
    }

    /// Looks up a column identifier by title.
    pub fn column_id(&self, title: &str) -> Result<EntityId, eyre::Report> {
        self.engine
            .board()
            .columns()
            .iter()
            .find(|column| column.title() == title)
            .map(Column::id)
            .ok_or_else(|| eyre::eyre!("no column titled {title:?} on the board"))
    }

    /// Looks up a card identifier by content.
    pub fn card_id(&self, content: &str) -> Result<EntityId, eyre::Report> {
        self.engine
            .board()
            .cards()
            .iter()
            .find(|card| card.content() == content)
            .map(Card::id)
            .ok_or_else(|| eyre::eyre!("no card with content {content:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
