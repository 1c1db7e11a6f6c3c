use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog entry.
///
/// Content files use either strings or integers; both are kept verbatim so a
/// round trip through JSON output does not change the id's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Match against user input, where `7` and `"7"` are the same thing.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ItemId::Number(n) => raw.trim().parse::<i64>().is_ok_and(|parsed| parsed == *n),
            ItemId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_round_trip_keeps_kind() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"[1, "web-portfolio"]"#).unwrap();
        assert_eq!(ids[0], ItemId::Number(1));
        assert_eq!(ids[1], ItemId::Text("web-portfolio".to_string()));
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"web-portfolio"]"#);
    }

    #[test]
    fn test_matches_numeric_input() {
        assert!(ItemId::Number(7).matches("7"));
        assert!(ItemId::Number(7).matches(" 7 "));
        assert!(!ItemId::Number(7).matches("07x"));
        assert!(ItemId::from("7").matches("7"));
    }
}
