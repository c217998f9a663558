//! Table shapes of the `public` schema.
//!
//! Each table has a `*Row` (what a select returns), a `*Insert` (columns with
//! DB defaults are optional and left out of the JSON when unset) and a
//! `*Update` (every column optional). Field names are column names.

use serde::{Deserialize, Serialize};

use crate::{
    AiGenerationId, AiSuggestionFinalState, AiSuggestionId, CardId, CardSource, CoreError,
    DeckId, IsoDateString, SuggestionIndex, UserId,
};

/// Normalized form used for the per-user deck name uniqueness check:
/// trimmed, inner whitespace collapsed to single spaces, lowercased.
pub fn normalize_deck_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ===== decks =====

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRow {
    pub id: DeckId,
    pub name: String,
    pub description: Option<String>,
    pub name_normalized: Option<String>,
    pub user_id: UserId,
    pub created_at: IsoDateString,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeckId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_normalized: Option<String>,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}

impl DeckInsert {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: None,
            name_normalized: Some(normalize_deck_name(&name)),
            name,
            description: None,
            user_id,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeckId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub name_normalized: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}

impl DeckUpdate {
    /// Rename, keeping `name_normalized` in step.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name_normalized = Some(Some(normalize_deck_name(&name)));
        self.name = Some(name);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == DeckUpdate::default()
    }
}

// ===== cards =====

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRow {
    pub id: CardId,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
    /// Free text in the DB; see [`CardRow::card_source`].
    pub source: String,
    pub ai_generation_id: Option<AiGenerationId>,
    pub created_at: IsoDateString,
}

impl CardRow {
    pub fn card_source(&self) -> Result<CardSource, CoreError> {
        self.source.parse()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_generation_id: Option<AiGenerationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}

impl CardInsert {
    pub fn manual(deck_id: DeckId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: None,
            deck_id,
            front: front.into(),
            back: back.into(),
            source: CardSource::Manual.as_str().to_string(),
            ai_generation_id: None,
            created_at: None,
        }
    }

    pub fn from_ai(
        deck_id: DeckId,
        generation_id: AiGenerationId,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            source: CardSource::Ai.as_str().to_string(),
            ai_generation_id: Some(generation_id),
            ..Self::manual(deck_id, front, back)
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<DeckId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub ai_generation_id: Option<Option<AiGenerationId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        *self == CardUpdate::default()
    }
}

// ===== ai_generations =====

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiGenerationRow {
    pub id: AiGenerationId,
    pub deck_id: Option<DeckId>,
    pub user_id: UserId,
    pub created_at: IsoDateString,
    pub committed_at: Option<IsoDateString>,
}

impl AiGenerationRow {
    pub fn is_committed(&self) -> bool {
        self.committed_at.is_some()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiGenerationInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AiGenerationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<DeckId>,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<IsoDateString>,
}

impl AiGenerationInsert {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: None,
            deck_id: None,
            user_id,
            created_at: None,
            committed_at: None,
        }
    }

    pub fn for_deck(mut self, deck_id: Option<DeckId>) -> Self {
        self.deck_id = deck_id;
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiGenerationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AiGenerationId>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<Option<DeckId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<Option<IsoDateString>>,
}

// ===== ai_suggestions =====

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiSuggestionRow {
    pub id: AiSuggestionId,
    pub generation_id: AiGenerationId,
    pub suggestion_index: SuggestionIndex,
    pub final_state: AiSuggestionFinalState,
    pub created_at: IsoDateString,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiSuggestionInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AiSuggestionId>,
    pub generation_id: AiGenerationId,
    pub suggestion_index: SuggestionIndex,
    pub final_state: AiSuggestionFinalState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}

impl AiSuggestionInsert {
    pub fn new(
        generation_id: AiGenerationId,
        suggestion_index: SuggestionIndex,
        final_state: AiSuggestionFinalState,
    ) -> Self {
        Self {
            id: None,
            generation_id,
            suggestion_index,
            final_state,
            created_at: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiSuggestionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AiSuggestionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<AiGenerationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_index: Option<SuggestionIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_state: Option<AiSuggestionFinalState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<IsoDateString>,
}
