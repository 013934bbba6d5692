use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => clear (only meaningful for nullable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value); a mistyped value keeps T's own error
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(PatchField::from)
    }
}

impl<T: DeserializeOwned> PatchField<T> {
    /// Removes `key` from a JSON object body. A value of the wrong type is
    /// recorded under `key` and the field is left `Unset`.
    pub fn take(body: &mut Map<String, Value>, key: &str, errors: &mut ValidationErrors) -> Self {
        match body.remove(key) {
            None => PatchField::Unset,
            Some(Value::Null) => PatchField::Null,
            Some(value) => match serde_json::from_value(value) {
                Ok(v) => PatchField::Value(v),
                Err(e) => {
                    errors.add(key, e.to_string());
                    PatchField::Unset
                }
            },
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    /// `None` maps to `Null`: used by full updates where every key is present.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}
