use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a move, castle or promotion request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The request was applied and the game goes on.
    Normal,
    /// The request was rejected; nothing changed.
    Failed,
    /// A pawn reached its last line and waits for `promote`.
    PromotionPending,
    /// The side to move has no legal move and its King is attacked.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side has the material to deliver mate.
    DrawInsufficientMaterial,
}

impl Outcome {
    /// True for outcomes that end the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::Checkmate | Outcome::Stalemate | Outcome::DrawInsufficientMaterial
        )
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Stalemate | Outcome::DrawInsufficientMaterial)
    }

    /// True unless the request was rejected.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Normal => "normal",
            Outcome::Failed => "failed",
            Outcome::PromotionPending => "promotion pending",
            Outcome::Checkmate => "checkmate",
            Outcome::Stalemate => "stalemate",
            Outcome::DrawInsufficientMaterial => "draw by insufficient material",
        };
        f.write_str(text)
    }
}
