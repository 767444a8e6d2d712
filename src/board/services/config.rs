//! Task store configuration.

use serde::{Deserialize, Serialize};

/// How the active board pointer is chosen when no board is explicitly
/// selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveBoardDefault {
    /// Leave the pointer empty until a board is selected.
    Unselected,
    /// Fall back to the first board in display order.
    #[default]
    FirstBoard,
}

/// Configuration for [`super::TaskStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Active board fallback after creating, deleting, or loading boards.
    pub active_board_default: ActiveBoardDefault,
}

impl StoreConfig {
    /// Creates a configuration that never selects a board implicitly.
    #[must_use]
    pub const fn explicit_selection() -> Self {
        Self {
            active_board_default: ActiveBoardDefault::Unselected,
        }
    }
}
