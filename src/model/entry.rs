use serde::{Deserialize, Serialize};

/// One glossary record as it travels over the wire.
///
/// An empty `id` means the server has not assigned one yet, so a save with
/// this entry creates a new record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct GlossaryEntry {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "begriff")]
    pub term: String,

    #[serde(rename = "erklaerung")]
    pub definition: String,
}

impl GlossaryEntry {
    /// Builds an entry from raw form values, trimming term and definition.
    pub fn from_form(term: &str, definition: &str, id: Option<&str>) -> Self {
        GlossaryEntry {
            id: id.unwrap_or("").to_string(),
            term: term.trim().to_string(),
            definition: definition.trim().to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        Operation::from_id(&self.id)
    }

    /// Body for the save endpoint: `{"begriff","erklaerung","id"}`.
    pub fn save_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "begriff": self.term,
            "erklaerung": self.definition,
            "id": self.id,
        })
    }

    /// Body for the create endpoint: no `id` key at all.
    pub fn create_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "begriff": self.term,
            "erklaerung": self.definition,
        })
    }
}

/// What the server will do with a saved entry.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update(i64),
}

impl Operation {
    /// Mirrors the backend: a blank id, or one that does not parse as a
    /// signed 64-bit number as sent (no trimming), creates.
    pub fn from_id(id: &str) -> Self {
        if id.trim().is_empty() {
            return Operation::Create;
        }
        match id.parse::<i64>() {
            Ok(n) => Operation::Update(n),
            Err(_) => Operation::Create,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update(_) => "update",
        }
    }
}

/// Form fields the submit flow reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    Definition,
    Id,
}

impl Field {
    /// Element id of the input bound to this field.
    pub fn element_id(&self) -> &'static str {
        match self {
            Field::Term => "eingabe_begriff",
            Field::Definition => "eingabe_erklaerung",
            Field::Id => "eintrag_id",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Term => "term",
            Field::Definition => "definition",
            Field::Id => "id",
        }
    }
}
