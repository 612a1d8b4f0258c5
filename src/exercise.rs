/*!
 * Exercise data model.
 *
 * Exercise files are loosely structured JSON written by hand, so the model
 * keeps the raw `serde_json` objects and exposes typed views over them.
 * Fields the views do not know about, and the original key order, survive a
 * load/save cycle untouched.
 */

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Difficulty tag of the exercises whose hints are recomputed.
pub const MEDIUM: &str = "medium";

/// Top-level shape of an exercise file: one exercise or a list of them.
///
/// Deserialization reads a plain [`Value`] first and resolves the shape from
/// it, so numbers keep their exact source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// A JSON array of exercises
    Many(Vec<Value>),
    /// A single exercise object
    Single(Map<String, Value>),
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| D::Error::custom("expected an exercise object or an array of exercises"))
    }
}

impl Document {
    /// Resolves the shape of a parsed JSON value; scalars yield `None`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::Many(items)),
            Value::Object(fields) => Some(Self::Single(fields)),
            _ => None,
        }
    }

    /// Number of top-level entries in the document
    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutable views over every exercise object, in file order.
    ///
    /// List entries that are not JSON objects are skipped.
    pub fn records_mut(&mut self) -> Vec<Record<'_>> {
        match self {
            Self::Many(items) => items
                .iter_mut()
                .filter_map(Value::as_object_mut)
                .map(Record::new)
                .collect(),
            Self::Single(object) => vec![Record::new(object)],
        }
    }
}

/// Mutable view over one exercise object.
#[derive(Debug)]
pub struct Record<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> Record<'a> {
    pub fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The `difficulty` tag, or `None` when absent or not a string
    pub fn difficulty(&self) -> Option<&str> {
        self.fields.get("difficulty").and_then(Value::as_str)
    }

    pub fn is_medium(&self) -> bool {
        self.difficulty() == Some(MEDIUM)
    }

    /// Views over the `correct_answers` entries.
    ///
    /// A missing or non-array field yields no answers; entries that are not
    /// objects are skipped.
    pub fn answers_mut(&mut self) -> Vec<Answer<'_>> {
        match self.fields.get_mut("correct_answers") {
            Some(Value::Array(answers)) => answers
                .iter_mut()
                .filter_map(Value::as_object_mut)
                .map(Answer::new)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Mutable view over one entry of `correct_answers`.
#[derive(Debug)]
pub struct Answer<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> Answer<'a> {
    pub fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The answer word; absent or non-string values read as the empty word
    pub fn word(&self) -> &str {
        self.fields.get("word").and_then(Value::as_str).unwrap_or("")
    }

    /// The raw `start` value as stored in the file
    pub fn raw_start(&self) -> Option<&Value> {
        self.fields.get("start")
    }

    /// Whether `start` currently holds exactly this number of visible letters.
    ///
    /// Integral floats such as `2.0` compare equal to `2`, and booleans count
    /// as `0` and `1`. Absent, null and string values never match.
    pub fn start_matches(&self, visible: u64) -> bool {
        match self.raw_start() {
            Some(Value::Bool(flag)) => u64::from(*flag) == visible,
            Some(Value::Number(number)) => match number.as_u64() {
                Some(current) => current == visible,
                None => number.as_f64() == Some(visible as f64),
            },
            _ => false,
        }
    }

    /// Overwrites `start`, appending the field when it was absent
    pub fn set_start(&mut self, visible: u64) {
        self.fields.insert("start".to_string(), Value::from(visible));
    }
}
