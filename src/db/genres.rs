//! Genre lists are persisted as a JSON array in a text column so the same
//! schema works on both Postgres and SQLite.

pub fn encode(genres: &[String]) -> String {
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

/// Malformed column contents decode to an empty list.
pub fn decode(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
