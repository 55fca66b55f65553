use serde_json::Value;
use tracing::trace;

use crate::game::GameId;

/// Default of the sixth element for records written with five fields
pub const DEFAULT_FIELD5: &str = "";
/// Default of the ninth element for records written with five to eight fields
pub const DEFAULT_FIELD8: i64 = 1;

/// Number of elements of a canonical record
pub const CANONICAL_LEN: usize = 9;

/// Canonical history record, the shape every stored layout is upgraded to
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub game_id: GameId,
    pub seed: String,
    /// Outcome code, `-2..=2` for valid records
    pub result: i64,
    /// Unix timestamp of the game start
    pub timestamp: f64,
    pub comment: Value,
    pub field5: Value,
    pub field6: Value,
    pub field7: Value,
    pub field8: Value,
}

/// Leading fields shared by every stored layout
#[derive(Debug, Clone, PartialEq)]
pub struct RecordHead {
    pub game_id: GameId,
    pub seed: String,
    pub result: i64,
    pub timestamp: f64,
}

impl RecordHead {
    fn from_values(values: &[Value]) -> Option<Self> {
        let [game_id, seed, result, timestamp, ..] = values else {
            return None;
        };
        Some(Self {
            game_id: game_id.as_i64()?,
            seed: seed.as_str()?.to_string(),
            result: result.as_i64()?,
            timestamp: timestamp.as_f64()?,
        })
    }
}

/// A stored history record in one of its historical layouts
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRecord {
    /// id, seed, result, timestamp, comment
    V5 { head: RecordHead, comment: Value },
    /// V5 plus two trailing fields
    V7 {
        head: RecordHead,
        comment: Value,
        field5: Value,
        field6: Value,
    },
    /// V7 plus one trailing field
    V8 {
        head: RecordHead,
        comment: Value,
        field5: Value,
        field6: Value,
        field7: Value,
    },
    /// Current layout
    V9(LogRecord),
}

impl HistoryRecord {
    /// Recognize a stored record.
    ///
    /// Returns `None` for anything that is not an array of 5, 7, 8 or at
    /// least 9 elements, or whose leading fields have the wrong type.
    /// Elements past the ninth are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(values) = value.as_array() else {
            trace!("Skipping non-array history record: {}", value);
            return None;
        };
        let Some(head) = RecordHead::from_values(values) else {
            trace!("Skipping history record with invalid fields: {}", value);
            return None;
        };
        let field = |index: usize| values[index].clone();
        let record = match values.len() {
            5 => Self::V5 {
                head,
                comment: field(4),
            },
            7 => Self::V7 {
                head,
                comment: field(4),
                field5: field(5),
                field6: field(6),
            },
            8 => Self::V8 {
                head,
                comment: field(4),
                field5: field(5),
                field6: field(6),
                field7: field(7),
            },
            len if len >= CANONICAL_LEN => Self::V9(LogRecord {
                game_id: head.game_id,
                seed: head.seed,
                result: head.result,
                timestamp: head.timestamp,
                comment: field(4),
                field5: field(5),
                field6: field(6),
                field7: field(7),
                field8: field(8),
            }),
            len => {
                trace!("Skipping history record with {} fields", len);
                return None;
            }
        };
        Some(record)
    }

    /// Fill in the fields missing from older layouts
    pub fn upgrade(self) -> LogRecord {
        match self {
            Self::V5 { head, comment } => {
                LogRecord::from_head(head, comment, default_field5(), Value::Null, Value::Null)
            }
            Self::V7 {
                head,
                comment,
                field5,
                field6,
            } => LogRecord::from_head(head, comment, field5, field6, Value::Null),
            Self::V8 {
                head,
                comment,
                field5,
                field6,
                field7,
            } => LogRecord::from_head(head, comment, field5, field6, field7),
            Self::V9(record) => record,
        }
    }
}

impl LogRecord {
    fn from_head(
        head: RecordHead,
        comment: Value,
        field5: Value,
        field6: Value,
        field7: Value,
    ) -> Self {
        Self {
            game_id: head.game_id,
            seed: head.seed,
            result: head.result,
            timestamp: head.timestamp,
            comment,
            field5,
            field6,
            field7,
            field8: default_field8(),
        }
    }

    /// Parse and upgrade a stored record in any supported layout
    pub fn from_value(value: &Value) -> Option<Self> {
        HistoryRecord::from_value(value).map(HistoryRecord::upgrade)
    }
}

fn default_field5() -> Value {
    Value::from(DEFAULT_FIELD5)
}

fn default_field8() -> Value {
    Value::from(DEFAULT_FIELD8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEED: &str = "abcdabcdabcdabcd";

    #[test]
    fn test_five_field_record_is_padded() {
        let record = LogRecord::from_value(&json!([1, SEED, 1, 1000000000, ""])).unwrap();
        assert_eq!(record.game_id, 1);
        assert_eq!(record.seed, SEED);
        assert_eq!(record.result, 1);
        assert_eq!(record.timestamp, 1000000000.0);
        assert_eq!(record.comment, json!(""));
        assert_eq!(record.field5, json!(""));
        assert_eq!(record.field6, Value::Null);
        assert_eq!(record.field7, Value::Null);
        assert_eq!(record.field8, json!(1));
    }

    #[test]
    fn test_seven_and_eight_field_records_are_padded() {
        let record = LogRecord::from_value(&json!([1, SEED, 0, 5, "c", "x", 3])).unwrap();
        assert_eq!(record.field5, json!("x"));
        assert_eq!(record.field6, json!(3));
        assert_eq!(record.field7, Value::Null);
        assert_eq!(record.field8, json!(1));

        let record = LogRecord::from_value(&json!([1, SEED, 0, 5, "c", "x", 3, 4])).unwrap();
        assert_eq!(record.field7, json!(4));
        assert_eq!(record.field8, json!(1));
    }

    #[test]
    fn test_canonical_record_is_kept() {
        let value = json!([3, SEED, -1, 5.5, "c", "x", 3, 4, 2, "extra"]);
        let parsed = HistoryRecord::from_value(&value).unwrap();
        assert!(matches!(parsed, HistoryRecord::V9(_)));

        let record = parsed.upgrade();
        assert_eq!(record.result, -1);
        assert_eq!(record.timestamp, 5.5);
        assert_eq!(record.field8, json!(2));
    }

    #[test]
    fn test_layout_detection() {
        assert!(matches!(
            HistoryRecord::from_value(&json!([1, SEED, 1, 0, ""])),
            Some(HistoryRecord::V5 { .. })
        ));
        assert!(matches!(
            HistoryRecord::from_value(&json!([1, SEED, 1, 0, "", null, null])),
            Some(HistoryRecord::V7 { .. })
        ));
        assert!(matches!(
            HistoryRecord::from_value(&json!([1, SEED, 1, 0, "", null, null, null])),
            Some(HistoryRecord::V8 { .. })
        ));
    }

    #[test]
    fn test_unsupported_arity_is_dropped() {
        assert!(LogRecord::from_value(&json!([1, SEED, 1, 0])).is_none());
        assert!(LogRecord::from_value(&json!([1, SEED, 1, 0, "", null])).is_none());
        assert!(LogRecord::from_value(&json!([])).is_none());
    }

    #[test]
    fn test_non_array_is_dropped() {
        assert!(LogRecord::from_value(&json!({"id": 1})).is_none());
        assert!(LogRecord::from_value(&json!("1,abc,1,0,")).is_none());
        assert!(LogRecord::from_value(&Value::Null).is_none());
    }

    #[test]
    fn test_invalid_fields_are_dropped() {
        assert!(LogRecord::from_value(&json!(["1", SEED, 1, 0, ""])).is_none());
        assert!(LogRecord::from_value(&json!([1.5, SEED, 1, 0, ""])).is_none());
        assert!(LogRecord::from_value(&json!([1, 1234, 1, 0, ""])).is_none());
        assert!(LogRecord::from_value(&json!([1, SEED, "won", 0, ""])).is_none());
        assert!(LogRecord::from_value(&json!([1, SEED, 1, null, ""])).is_none());
    }
}
