use flashgen_core::{
    AiGenerationRow, AiGenerationUpdate, AiSuggestionFinalState, AiSuggestionInsert,
    AiSuggestionRow, CardInsert, CardRow, CardSource, CardUpdate, DeckInsert, DeckRow, DeckUpdate,
    Table,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn deck_row_reads_postgrest_payload() {
    let row: DeckRow = serde_json::from_value(json!({
        "created_at": "2024-02-10T09:15:42.318273+00:00",
        "description": null,
        "id": "1f0a6f0e-5c2d-4b8a-9e61-7d4c3b2a1908",
        "name": "Spanish",
        "name_normalized": "spanish",
        "user_id": "2e1b7a0f-6d3e-4c9b-8f72-8e5d4c3b2a19"
    }))
    .unwrap();
    assert_eq!(row.name, "Spanish");
    assert_eq!(row.description, None);
    assert_eq!(row.created_at.timestamp(), 1707556542);
    assert_eq!(DeckRow::NAME, "decks");
}

#[test]
fn card_row_source_is_checked_on_demand() {
    let mut row: CardRow = serde_json::from_value(json!({
        "ai_generation_id": null,
        "back": "hello",
        "created_at": "2024-02-10T09:15:42+00:00",
        "deck_id": "1f0a6f0e-5c2d-4b8a-9e61-7d4c3b2a1908",
        "front": "hola",
        "id": "3c2b1a09-8f7e-4d6c-9b5a-493827161504",
        "source": "manual"
    }))
    .unwrap();
    assert_eq!(row.card_source().unwrap(), CardSource::Manual);
    row.source = "csv".into();
    assert!(row.card_source().is_err());
}

#[test]
fn inserts_leave_out_defaulted_columns() {
    let user = Uuid::nil();
    let value = serde_json::to_value(DeckInsert::new(user, "Verbs")).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Verbs",
            "name_normalized": "verbs",
            "user_id": "00000000-0000-0000-0000-000000000000"
        })
    );

    let value = serde_json::to_value(CardInsert::manual(user, "f", "b")).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("ai_generation_id").is_none());
    assert_eq!(value["source"], "manual");

    let value = serde_json::to_value(AiSuggestionInsert::new(
        user,
        3,
        AiSuggestionFinalState::AcceptedEdited,
    ))
    .unwrap();
    assert_eq!(
        value,
        json!({
            "generation_id": "00000000-0000-0000-0000-000000000000",
            "suggestion_index": 3,
            "final_state": "accepted_edited"
        })
    );
}

#[test]
fn updates_serialize_only_touched_columns() {
    let update = DeckUpdate {
        description: Some(None),
        ..DeckUpdate::default()
    };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "description": null }));

    let commit = AiGenerationUpdate {
        committed_at: Some(Some("2024-02-10T10:00:00Z".parse().unwrap())),
        ..AiGenerationUpdate::default()
    };
    assert_eq!(
        serde_json::to_value(&commit).unwrap(),
        json!({ "committed_at": "2024-02-10T10:00:00Z" })
    );

    let empty: CardUpdate = serde_json::from_value(json!({})).unwrap();
    assert!(empty.is_empty());
    let detach: CardUpdate = serde_json::from_value(json!({ "ai_generation_id": null })).unwrap();
    assert_eq!(detach.ai_generation_id, Some(None));
}

#[test]
fn generation_and_suggestion_rows() {
    let generation: AiGenerationRow = serde_json::from_value(json!({
        "committed_at": null,
        "created_at": "2024-02-10T09:00:00+00:00",
        "deck_id": null,
        "id": "4d3c2b1a-0f9e-4d8c-b7a6-5f4e3d2c1b0a",
        "user_id": "2e1b7a0f-6d3e-4c9b-8f72-8e5d4c3b2a19"
    }))
    .unwrap();
    assert!(!generation.is_committed());

    let suggestion: AiSuggestionRow = serde_json::from_value(json!({
        "created_at": "2024-02-10T09:01:00+00:00",
        "final_state": "removed",
        "generation_id": generation.id,
        "id": "5e4d3c2b-1a0f-4e9d-8c7b-6a5f4e3d2c1b",
        "suggestion_index": 7
    }))
    .unwrap();
    assert_eq!(suggestion.final_state, AiSuggestionFinalState::Removed);
    assert_eq!(AiSuggestionRow::FOREIGN_KEYS[0].columns, ["generation_id"]);

    let bad = serde_json::from_value::<AiSuggestionRow>(json!({
        "created_at": "2024-02-10T09:01:00+00:00",
        "final_state": "discarded",
        "generation_id": generation.id,
        "id": "5e4d3c2b-1a0f-4e9d-8c7b-6a5f4e3d2c1b",
        "suggestion_index": 7
    }));
    assert!(bad.is_err());
}
