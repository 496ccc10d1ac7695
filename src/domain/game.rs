use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

/// A board game as stored locally. Numeric fields stay strings since the
/// catalog hands them out that way and `"Unknown"` has to fit too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub year: String,
    pub thumbnail: String,
    pub image: String,
    pub min_players: String,
    pub max_players: String,
    pub playing_time: String,
    pub min_play_time: String,
    pub max_play_time: String,
}

impl GameRecord {
    /// A record with every optional field at its missing-value sentinel.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: UNKNOWN.to_string(),
            year: UNKNOWN.to_string(),
            thumbnail: String::new(),
            image: String::new(),
            min_players: UNKNOWN.to_string(),
            max_players: UNKNOWN.to_string(),
            playing_time: UNKNOWN.to_string(),
            min_play_time: UNKNOWN.to_string(),
            max_play_time: UNKNOWN.to_string(),
        }
    }
}

/// One `item` of a collection listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub id: String,
    pub owned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GameRecord::unknown("13")).unwrap();

        assert_eq!(json["id"], "13");
        assert_eq!(json["minPlayers"], UNKNOWN);
        assert_eq!(json["playingTime"], UNKNOWN);
        assert_eq!(json["minPlayTime"], UNKNOWN);
        assert_eq!(json["maxPlayTime"], UNKNOWN);
        assert_eq!(json["thumbnail"], "");
    }
}
