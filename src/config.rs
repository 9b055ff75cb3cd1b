use serde::{Deserialize, Serialize};

/// What `reveal_row` does with a row whose entry already matches its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Leave an already-solved row alone; it stays editable.
    #[default]
    SkipSolved,
    /// Reveal and lock the row even if it is already solved.
    Always,
}

/// How text entered by the player maps onto grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputGranularity {
    /// One input per cell; only the first character of an edit is kept.
    #[default]
    Cell,
    /// One input per row; an edit replaces the whole row from column 0.
    Word,
}

/// Behavioural switches for a [`PuzzleSession`](crate::PuzzleSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Policy for revealing rows that are already correct.
    pub reveal_policy: RevealPolicy,
    /// Input granularity exposed by the presentation layer.
    pub input: InputGranularity,
    /// Move the selection one cell right after a character is typed.
    pub auto_advance: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_policy: RevealPolicy::SkipSolved,
            input: InputGranularity::Cell,
            auto_advance: true,
        }
    }
}
