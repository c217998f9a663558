//! Deck endpoints: list query, command models and response data.

use flashgen_core::{CoreError, DeckInsert, DeckUpdate, UserId};
use serde::{Deserialize, Serialize};

use crate::dto::{Confirmed, DeckDto, DeckSummaryDto};
use crate::query::impl_cursor_query;
use crate::validation::{
    trim_to_none, validate_limit, validate_text_len, Normalize, Validate, Violations, BODY_FIELD,
    MAX_DECK_DESCRIPTION_LEN, MAX_DECK_NAME_LEN, MAX_SEARCH_LEN,
};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeckSort {
    #[default]
    #[serde(rename = "created_at:desc")]
    CreatedAtDesc,
    #[serde(rename = "created_at:asc")]
    CreatedAtAsc,
    #[serde(rename = "name:asc")]
    NameAsc,
    #[serde(rename = "name:desc")]
    NameDesc,
}

impl DeckSort {
    pub fn column(&self) -> &'static str {
        match self {
            DeckSort::CreatedAtDesc | DeckSort::CreatedAtAsc => "created_at",
            DeckSort::NameAsc | DeckSort::NameDesc => "name",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, DeckSort::CreatedAtDesc | DeckSort::NameDesc)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListDecksQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<DeckSort>,
    /// Free-text filter on deck names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl_cursor_query!(ListDecksQuery);

impl ListDecksQuery {
    /// Trimmed search term, `None` when blank.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

impl Validate for ListDecksQuery {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("limit", validate_limit(self.limit));
        if let Some(q) = &self.q {
            v.check("q", validate_text_len(q, "Search", 0, MAX_SEARCH_LEN));
        }
        v.into_result()
    }
}

pub type ListDecksResponseData = Vec<DeckSummaryDto>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckCommand {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateDeckCommand {
    pub fn into_insert(self, user_id: UserId) -> DeckInsert {
        let cmd = self.normalize();
        DeckInsert::new(user_id, cmd.name).with_description(cmd.description)
    }
}

impl Normalize for CreateDeckCommand {
    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: trim_to_none(self.description),
        }
    }
}

impl Validate for CreateDeckCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        v.check("name", validate_text_len(&self.name, "Name", 1, MAX_DECK_NAME_LEN));
        if let Some(description) = &self.description {
            v.check(
                "description",
                validate_text_len(description, "Description", 0, MAX_DECK_DESCRIPTION_LEN),
            );
        }
        v.into_result()
    }
}

pub type CreateDeckResponseData = DeckDto;

pub type GetDeckResponseData = DeckSummaryDto;

/// Partial update. `description: null` clears the description; an absent
/// key leaves it alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeckCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "flashgen_core::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl UpdateDeckCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    pub fn into_update(self) -> DeckUpdate {
        let cmd = self.normalize();
        let mut update = DeckUpdate {
            description: cmd.description,
            ..DeckUpdate::default()
        };
        if let Some(name) = cmd.name {
            update = update.rename(name);
        }
        update
    }
}

/// A blank description clears the column, same as `null`.
impl Normalize for UpdateDeckCommand {
    fn normalize(self) -> Self {
        Self {
            name: self.name.map(|n| n.trim().to_string()),
            description: self.description.map(trim_to_none),
        }
    }
}

impl Validate for UpdateDeckCommand {
    fn validate(&self) -> Result<(), CoreError> {
        let mut v = Violations::new();
        if self.is_empty() {
            v.add(BODY_FIELD, "At least one of name, description must be provided");
        }
        if let Some(name) = &self.name {
            v.check("name", validate_text_len(name, "Name", 1, MAX_DECK_NAME_LEN));
        }
        if let Some(Some(description)) = &self.description {
            v.check(
                "description",
                validate_text_len(description, "Description", 0, MAX_DECK_DESCRIPTION_LEN),
            );
        }
        v.into_result()
    }
}

pub type UpdateDeckResponseData = DeckSummaryDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDeckResponseData {
    pub deleted: Confirmed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CursorQuery;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn sort_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeckSort::NameDesc).unwrap(),
            "\"name:desc\""
        );
        let sort: DeckSort = serde_json::from_str("\"created_at:asc\"").unwrap();
        assert_eq!(sort, DeckSort::CreatedAtAsc);
        assert!(!sort.is_descending());
        assert_eq!(sort.column(), "created_at");
        assert!(serde_json::from_str::<DeckSort>("\"name\"").is_err());
        assert_eq!(DeckSort::default(), DeckSort::CreatedAtDesc);
    }

    #[test]
    fn list_query_defaults() {
        let q = ListDecksQuery::default();
        assert_eq!(q.page_size(), crate::query::DEFAULT_LIMIT);
        assert_eq!(q.cursor(), None);
        assert!(q.validate().is_ok());

        let q = ListDecksQuery {
            q: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(q.search(), None);
    }

    #[test]
    fn create_into_insert_trims_and_normalizes() {
        let user = Uuid::new_v4();
        let cmd: CreateDeckCommand =
            serde_json::from_value(json!({ "name": "  Spanish Verbs " })).unwrap();
        assert!(cmd.validate().is_ok());
        let ins = cmd.into_insert(user);
        assert_eq!(ins.name, "Spanish Verbs");
        assert_eq!(ins.name_normalized.as_deref(), Some("spanish verbs"));
        assert_eq!(ins.description, None);
        assert_eq!(ins.user_id, user);
    }

    #[test]
    fn create_rejects_blank_and_long_names() {
        let blank = CreateDeckCommand {
            name: "  ".into(),
            description: None,
        };
        assert!(blank.validate().is_err());

        let long = CreateDeckCommand {
            name: "x".repeat(MAX_DECK_NAME_LEN + 1),
            description: Some("y".repeat(MAX_DECK_DESCRIPTION_LEN + 1)),
        };
        let Err(CoreError::Validation(errors)) = long.validate() else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("description"));
    }

    #[test]
    fn update_distinguishes_clear_from_absent() {
        let clear: UpdateDeckCommand =
            serde_json::from_value(json!({ "description": null })).unwrap();
        assert!(clear.validate().is_ok());
        let update = clear.into_update();
        assert_eq!(update.description, Some(None));
        assert_eq!(update.name, None);

        let rename: UpdateDeckCommand =
            serde_json::from_value(json!({ "name": " Kanji " })).unwrap();
        let update = rename.into_update();
        assert_eq!(update.name.as_deref(), Some("Kanji"));
        assert_eq!(update.name_normalized, Some(Some("kanji".into())));
        assert_eq!(update.description, None);
    }

    #[test]
    fn empty_update_is_rejected() {
        let Err(CoreError::Validation(errors)) = UpdateDeckCommand::default().validate() else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key(BODY_FIELD));
    }

    #[test]
    fn blank_description_is_stored_as_none() {
        let cmd = CreateDeckCommand {
            name: "Verbs".into(),
            description: Some("   ".into()),
        };
        assert!(cmd.validate().is_ok());
        assert_eq!(cmd.clone().normalize().description, None);
        assert_eq!(cmd.into_insert(Uuid::nil()).description, None);

        let cmd = CreateDeckCommand {
            name: "Verbs".into(),
            description: Some("  past tense ".into()),
        };
        assert_eq!(cmd.into_insert(Uuid::nil()).description.as_deref(), Some("past tense"));

        let blank: UpdateDeckCommand =
            serde_json::from_value(json!({ "description": "  " })).unwrap();
        assert_eq!(blank.into_update().description, Some(None));

        let padded: UpdateDeckCommand =
            serde_json::from_value(json!({ "description": " irregular " })).unwrap();
        assert_eq!(padded.into_update().description, Some(Some("irregular".into())));
    }
}
