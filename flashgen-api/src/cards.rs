//! Card endpoints (cards live under a deck).

use flashgen_core::{CardInsert, CardUpdate, CoreError, DeckId};
use serde::{Deserialize, Serialize};

use crate::dto::{CardDto, Confirmed};
use crate::query::impl_cursor_query;
use crate::validation::{
    validate_limit, validate_text_len, Normalize, Validate, Violations, BODY_FIELD,
    MAX_CARD_BACK_LEN, MAX_CARD_FRONT_LEN,
};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardSort {
    #[default]
    #[serde(rename = "created_at:desc")]
    CreatedAtDesc,
    #[serde(rename = "created_at:asc")]
    CreatedAtAsc,
}

impl CardSort {
    pub fn is_descending(&self) -> bool {
        matches!(self, CardSort::CreatedAtDesc)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListCardsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<CardSort>,
}

impl_cursor_query!(ListCardsQuery);

impl Validate for ListCardsQuery {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("limit", validate_limit(self.limit));
        v.into_result()
    }
}

pub type ListCardsResponseData = Vec<CardDto>;

pub(crate) fn check_card_text(v: &mut Violations, prefix: &str, front: &str, back: &str) {
    v.check(
        format!("{prefix}front"),
        validate_text_len(front, "Front", 1, MAX_CARD_FRONT_LEN),
    );
    v.check(
        format!("{prefix}back"),
        validate_text_len(back, "Back", 1, MAX_CARD_BACK_LEN),
    );
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardCommand {
    pub front: String,
    pub back: String,
}

impl CreateCardCommand {
    pub fn into_insert(self, deck_id: DeckId) -> CardInsert {
        let cmd = self.normalize();
        CardInsert::manual(deck_id, cmd.front, cmd.back)
    }
}

impl Normalize for CreateCardCommand {
    fn normalize(self) -> Self {
        Self {
            front: self.front.trim().to_string(),
            back: self.back.trim().to_string(),
        }
    }
}

impl Validate for CreateCardCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        check_card_text(&mut v, "", &self.front, &self.back);
        v.into_result()
    }
}

pub type CreateCardResponseData = CardDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
}

impl UpdateCardCommand {
    pub fn is_empty(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    pub fn into_update(self) -> CardUpdate {
        let cmd = self.normalize();
        CardUpdate {
            front: cmd.front,
            back: cmd.back,
            ..CardUpdate::default()
        }
    }
}

impl Normalize for UpdateCardCommand {
    fn normalize(self) -> Self {
        Self {
            front: self.front.map(|f| f.trim().to_string()),
            back: self.back.map(|b| b.trim().to_string()),
        }
    }
}

impl Validate for UpdateCardCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        if self.is_empty() {
            v.add(BODY_FIELD, "At least one of front, back must be provided");
        }
        if let Some(front) = &self.front {
            v.check("front", validate_text_len(front, "Front", 1, MAX_CARD_FRONT_LEN));
        }
        if let Some(back) = &self.back {
            v.check("back", validate_text_len(back, "Back", 1, MAX_CARD_BACK_LEN));
        }
        v.into_result()
    }
}

pub type UpdateCardResponseData = CardDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCardResponseData {
    pub deleted: Confirmed,
}
