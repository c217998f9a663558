use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::CoreError;

/// Timestamps as Postgres returns them (`created_at`, `committed_at`, ...).
pub type IsoDateString = DateTime<Utc>;

pub type DeckId = Uuid;
pub type CardId = Uuid;
pub type AiGenerationId = Uuid;
pub type AiSuggestionId = Uuid;

/// FK to the auth provider's `users.id`, stored on `decks` and `ai_generations`.
pub type UserId = Uuid;

/// Position of a suggestion within its generation (`int4`).
pub type SuggestionIndex = i32;

/// DB enum `ai_suggestion_final_state`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AiSuggestionFinalState {
    AcceptedUnchanged,
    AcceptedEdited,
    Removed,
}

impl AiSuggestionFinalState {
    pub const ALL: [AiSuggestionFinalState; 3] = [
        AiSuggestionFinalState::AcceptedUnchanged,
        AiSuggestionFinalState::AcceptedEdited,
        AiSuggestionFinalState::Removed,
    ];

    /// Postgres type name of the enum.
    pub const TYPE_NAME: &'static str = "ai_suggestion_final_state";

    pub fn as_str(&self) -> &'static str {
        match self {
            AiSuggestionFinalState::AcceptedUnchanged => "accepted_unchanged",
            AiSuggestionFinalState::AcceptedEdited => "accepted_edited",
            AiSuggestionFinalState::Removed => "removed",
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, AiSuggestionFinalState::Removed)
    }
}

impl fmt::Display for AiSuggestionFinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiSuggestionFinalState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiSuggestionFinalState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| CoreError::invalid_column("ai_suggestions.final_state", s))
    }
}

/// Where a card came from. The `cards.source` column is plain text; a check
/// constraint limits it to these two values.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    Manual,
    Ai,
}

impl CardSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSource::Manual => "manual",
            CardSource::Ai => "ai",
        }
    }
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(CardSource::Manual),
            "ai" => Ok(CardSource::Ai),
            other => Err(CoreError::invalid_column("cards.source", other)),
        }
    }
}
