use crate::{AiGenerationRow, AiSuggestionRow, CardRow, DeckRow};

/// A foreign key declared on a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub referenced_table: &'static str,
    pub referenced_columns: &'static [&'static str],
    pub one_to_one: bool,
}

/// Ties a row type to its table.
pub trait Table {
    const NAME: &'static str;
    const FOREIGN_KEYS: &'static [ForeignKey];
}

impl Table for DeckRow {
    const NAME: &'static str = "decks";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[];
}

impl Table for CardRow {
    const NAME: &'static str = "cards";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "cards_deck_id_fkey",
        columns: &["deck_id"],
        referenced_table: "decks",
        referenced_columns: &["id"],
        one_to_one: false,
    }];
}

impl Table for AiGenerationRow {
    const NAME: &'static str = "ai_generations";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "ai_generations_deck_id_fkey",
        columns: &["deck_id"],
        referenced_table: "decks",
        referenced_columns: &["id"],
        one_to_one: false,
    }];
}

impl Table for AiSuggestionRow {
    const NAME: &'static str = "ai_suggestions";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "ai_suggestions_generation_id_fkey",
        columns: &["generation_id"],
        referenced_table: "ai_generations",
        referenced_columns: &["id"],
        one_to_one: false,
    }];
}

pub const TABLES: [&str; 4] = [
    DeckRow::NAME,
    CardRow::NAME,
    AiGenerationRow::NAME,
    AiSuggestionRow::NAME,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_foreign_key_targets_a_known_table() {
        let fks = DeckRow::FOREIGN_KEYS
            .iter()
            .chain(CardRow::FOREIGN_KEYS)
            .chain(AiGenerationRow::FOREIGN_KEYS)
            .chain(AiSuggestionRow::FOREIGN_KEYS);
        for fk in fks {
            assert!(TABLES.contains(&fk.referenced_table), "{}", fk.name);
            assert_eq!(fk.columns.len(), fk.referenced_columns.len());
        }
    }

    #[test]
    fn decks_have_no_outgoing_keys() {
        assert!(DeckRow::FOREIGN_KEYS.is_empty());
        assert_eq!(AiSuggestionRow::FOREIGN_KEYS[0].referenced_table, "ai_generations");
    }
}
