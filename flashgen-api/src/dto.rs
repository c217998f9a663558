//! Resource DTOs shared by several endpoints.
//!
//! Field types come from the table rows in `flashgen_core`; names are
//! camelCase on the wire.

use flashgen_core::{
    AiGenerationId, AiGenerationRow, AiSuggestionFinalState, AiSuggestionRow, CardId, CardRow,
    CardSource, CoreError, DeckId, DeckRow, IsoDateString, SuggestionIndex, UserId,
};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal `true`, as in `{ "deleted": true }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Confirmed;

impl Serialize for Confirmed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for Confirmed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(Confirmed)
        } else {
            Err(de::Error::invalid_value(Unexpected::Bool(false), &"true"))
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    pub email: String,
    pub email_verified: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeckDto {
    pub id: DeckId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: IsoDateString,
}

impl From<DeckRow> for DeckDto {
    fn from(row: DeckRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

/// Deck plus its computed card count (list/get/update responses).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummaryDto {
    #[serde(flatten)]
    pub deck: DeckDto,
    pub card_count: i64,
}

impl DeckSummaryDto {
    pub fn new(deck: impl Into<DeckDto>, card_count: i64) -> Self {
        Self {
            deck: deck.into(),
            card_count,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: CardId,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
    pub source: CardSource,
    pub ai_generation_id: Option<AiGenerationId>,
    pub created_at: IsoDateString,
}

impl TryFrom<CardRow> for CardDto {
    type Error = CoreError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        let source = row.card_source()?;
        Ok(Self {
            id: row.id,
            deck_id: row.deck_id,
            front: row.front,
            back: row.back,
            source,
            ai_generation_id: row.ai_generation_id,
            created_at: row.created_at,
        })
    }
}

/// `{ id, deckId }` of a card created by a commit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCardRef {
    pub id: CardId,
    pub deck_id: DeckId,
}

impl From<&CardDto> for CreatedCardRef {
    fn from(card: &CardDto) -> Self {
        Self {
            id: card.id,
            deck_id: card.deck_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiGenerationDto {
    pub id: AiGenerationId,
    pub deck_id: Option<DeckId>,
    pub created_at: IsoDateString,
    pub committed_at: Option<IsoDateString>,
}

impl From<AiGenerationRow> for AiGenerationDto {
    fn from(row: AiGenerationRow) -> Self {
        Self {
            id: row.id,
            deck_id: row.deck_id,
            created_at: row.created_at,
            committed_at: row.committed_at,
        }
    }
}

/// A suggestion as returned by the generator. Never stored; only its final
/// state is, once the generation is committed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestionDto {
    pub index: SuggestionIndex,
    pub front: String,
    pub back: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestionFinalStateDto {
    pub index: SuggestionIndex,
    pub final_state: AiSuggestionFinalState,
}

impl From<AiSuggestionRow> for AiSuggestionFinalStateDto {
    fn from(row: AiSuggestionRow) -> Self {
        Self {
            index: row.suggestion_index,
            final_state: row.final_state,
        }
    }
}
