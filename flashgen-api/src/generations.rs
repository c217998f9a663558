//! AI generation flow: generate suggestions, then commit the user's
//! decision for each one.

use flashgen_core::{
    AiGenerationId, AiGenerationInsert, AiSuggestionFinalState, AiSuggestionInsert, CardInsert,
    CoreError, DeckId, SuggestionIndex, UserId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cards::check_card_text;
use crate::dto::{AiGenerationDto, AiSuggestionDto, AiSuggestionFinalStateDto, CreatedCardRef};
use crate::query::impl_cursor_query;
use crate::validation::{
    validate_limit, validate_text_len, Normalize, Validate, Violations, MAX_SOURCE_TEXT_LEN,
    MIN_SOURCE_TEXT_LEN,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiGenerationCommand {
    /// Source text the suggestions are generated from.
    pub text: String,
    pub deck_id: Option<DeckId>,
}

impl CreateAiGenerationCommand {
    pub fn to_insert(&self, user_id: UserId) -> AiGenerationInsert {
        AiGenerationInsert::new(user_id).for_deck(self.deck_id)
    }
}

impl Normalize for CreateAiGenerationCommand {
    fn normalize(self) -> Self {
        Self {
            text: self.text.trim().to_string(),
            ..self
        }
    }
}

impl Validate for CreateAiGenerationCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check(
            "text",
            validate_text_len(&self.text, "Text", MIN_SOURCE_TEXT_LEN, MAX_SOURCE_TEXT_LEN),
        );
        v.into_result()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiGenerationResponseData {
    pub generation: AiGenerationDto,
    pub suggestions: Vec<AiSuggestionDto>,
}

/// What the user did with one suggestion. Accepted suggestions carry the
/// final (possibly edited) text; removed ones only their index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "finalState", rename_all = "snake_case")]
pub enum AiSuggestionDecision {
    AcceptedUnchanged {
        index: SuggestionIndex,
        front: String,
        back: String,
    },
    AcceptedEdited {
        index: SuggestionIndex,
        front: String,
        back: String,
    },
    Removed {
        index: SuggestionIndex,
    },
}

impl AiSuggestionDecision {
    pub fn index(&self) -> SuggestionIndex {
        match self {
            AiSuggestionDecision::AcceptedUnchanged { index, .. }
            | AiSuggestionDecision::AcceptedEdited { index, .. }
            | AiSuggestionDecision::Removed { index } => *index,
        }
    }

    pub fn final_state(&self) -> AiSuggestionFinalState {
        match self {
            AiSuggestionDecision::AcceptedUnchanged { .. } => {
                AiSuggestionFinalState::AcceptedUnchanged
            }
            AiSuggestionDecision::AcceptedEdited { .. } => AiSuggestionFinalState::AcceptedEdited,
            AiSuggestionDecision::Removed { .. } => AiSuggestionFinalState::Removed,
        }
    }

    /// `(front, back)` of an accepted suggestion.
    pub fn card_text(&self) -> Option<(&str, &str)> {
        match self {
            AiSuggestionDecision::AcceptedUnchanged { front, back, .. }
            | AiSuggestionDecision::AcceptedEdited { front, back, .. } => {
                Some((front.as_str(), back.as_str()))
            }
            AiSuggestionDecision::Removed { .. } => None,
        }
    }

    /// The card an accepted suggestion turns into.
    pub fn to_card_insert(
        &self,
        deck_id: DeckId,
        generation_id: AiGenerationId,
    ) -> Option<CardInsert> {
        self.card_text()
            .map(|(front, back)| CardInsert::from_ai(deck_id, generation_id, front.trim(), back.trim()))
    }

    pub fn to_suggestion_insert(&self, generation_id: AiGenerationId) -> AiSuggestionInsert {
        AiSuggestionInsert::new(generation_id, self.index(), self.final_state())
    }
}

impl From<&AiSuggestionDecision> for AiSuggestionFinalStateDto {
    fn from(decision: &AiSuggestionDecision) -> Self {
        Self {
            index: decision.index(),
            final_state: decision.final_state(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitAiGenerationCommand {
    pub deck_id: DeckId,
    pub decisions: Vec<AiSuggestionDecision>,
}

impl Normalize for AiSuggestionDecision {
    fn normalize(self) -> Self {
        use AiSuggestionDecision::*;
        match self {
            AcceptedUnchanged { index, front, back } => AcceptedUnchanged {
                index,
                front: front.trim().to_string(),
                back: back.trim().to_string(),
            },
            AcceptedEdited { index, front, back } => AcceptedEdited {
                index,
                front: front.trim().to_string(),
                back: back.trim().to_string(),
            },
            removed @ Removed { .. } => removed,
        }
    }
}

impl Normalize for CommitAiGenerationCommand {
    fn normalize(self) -> Self {
        Self {
            deck_id: self.deck_id,
            decisions: self.decisions.into_iter().map(Normalize::normalize).collect(),
        }
    }
}

impl CommitAiGenerationCommand {
    pub fn card_inserts(&self, generation_id: AiGenerationId) -> Vec<CardInsert> {
        self.decisions
            .iter()
            .filter_map(|d| d.to_card_insert(self.deck_id, generation_id))
            .collect()
    }

    pub fn suggestion_inserts(&self, generation_id: AiGenerationId) -> Vec<AiSuggestionInsert> {
        self.decisions
            .iter()
            .map(|d| d.to_suggestion_insert(generation_id))
            .collect()
    }

    pub fn counts(&self) -> CommitCounts {
        CommitCounts::tally(&self.decisions)
    }
}

impl Validate for CommitAiGenerationCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        if self.decisions.is_empty() {
            v.add("decisions", "At least one decision is required");
        }
        let mut seen = HashSet::new();
        for (i, decision) in self.decisions.iter().enumerate() {
            let index = decision.index();
            if index < 0 {
                v.add(format!("decisions[{i}].index"), "Index must not be negative");
            } else if !seen.insert(index) {
                v.add(
                    format!("decisions[{i}].index"),
                    format!("Duplicate decision for suggestion {index}"),
                );
            }
            if let Some((front, back)) = decision.card_text() {
                check_card_text(&mut v, &format!("decisions[{i}]."), front, back);
            }
        }
        v.into_result()
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitCounts {
    pub accepted_unchanged: u32,
    pub accepted_edited: u32,
    pub removed: u32,
    pub saved_cards: u32,
}

impl CommitCounts {
    /// Every accepted decision becomes a saved card.
    pub fn tally(decisions: &[AiSuggestionDecision]) -> Self {
        let mut counts = CommitCounts::default();
        for decision in decisions {
            match decision.final_state() {
                AiSuggestionFinalState::AcceptedUnchanged => counts.accepted_unchanged += 1,
                AiSuggestionFinalState::AcceptedEdited => counts.accepted_edited += 1,
                AiSuggestionFinalState::Removed => counts.removed += 1,
            }
        }
        counts.saved_cards = counts.accepted_unchanged + counts.accepted_edited;
        counts
    }

    pub fn total(&self) -> u32 {
        self.accepted_unchanged + self.accepted_edited + self.removed
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitAiGenerationResponseData {
    pub generation: AiGenerationDto,
    pub created_cards: Vec<CreatedCardRef>,
    pub counts: CommitCounts,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenerationSort {
    #[default]
    #[serde(rename = "created_at:desc")]
    CreatedAtDesc,
    #[serde(rename = "created_at:asc")]
    CreatedAtAsc,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListAiGenerationsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// `true` only committed generations, `false` only pending ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<DeckId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<GenerationSort>,
}

impl_cursor_query!(ListAiGenerationsQuery);

impl Validate for ListAiGenerationsQuery {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("limit", validate_limit(self.limit));
        v.into_result()
    }
}

pub type ListAiGenerationsResponseData = Vec<AiGenerationDto>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAiGenerationResponseData {
    pub generation: AiGenerationDto,
    pub final_states: Vec<AiSuggestionFinalStateDto>,
}
