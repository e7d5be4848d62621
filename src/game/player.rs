//! Player identity and capability

use serde::{Deserialize, Serialize};

use super::moves::Label;
use crate::search::Difficulty;

/// How a player's moves are obtained.
///
/// A passive player's moves are supplied externally (the front-end); an
/// automated player's moves are computed by the search engine at the
/// given difficulty. Callers branch on this tag rather than testing the
/// player's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Passive,
    Automated(Difficulty),
}

/// A registered player: a label placed into cells, a cosmetic display
/// color, and a capability tag. The color is never consulted by logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    label: Label,
    color: String,
    kind: PlayerKind,
}

impl Player {
    /// Create a player whose moves are supplied externally.
    pub fn passive(label: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            label: Label::new(label),
            color: color.into(),
            kind: PlayerKind::Passive,
        }
    }

    /// Create a player whose moves are computed by the search engine.
    pub fn automated(
        label: impl Into<String>,
        color: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Player {
            label: Label::new(label),
            color: color.into(),
            kind: PlayerKind::Automated(difficulty),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.kind, PlayerKind::Automated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_tag() {
        let human = Player::passive("X", "blue");
        assert!(!human.is_automated());
        assert_eq!(human.kind(), PlayerKind::Passive);

        let computer = Player::automated("O", "green", Difficulty::Pruned);
        assert!(computer.is_automated());
        assert_eq!(computer.kind(), PlayerKind::Automated(Difficulty::Pruned));
    }

    #[test]
    fn test_color_is_cosmetic_only() {
        let a = Player::passive("X", "blue");
        let b = Player::passive("X", "red");
        assert_eq!(a.label(), b.label());
        assert_ne!(a.color(), b.color());
    }
}
