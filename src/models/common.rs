use std::fmt;
use serde::{Deserialize, Serialize};

/// Identificador asignado por el backend.
/// Según la base de datos llega como número o como string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_text_ids() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "65f0c1"]"#).unwrap();
        assert_eq!(ids, vec![RecordId::Number(7), RecordId::from("65f0c1")]);
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "65f0c1");
    }
}
