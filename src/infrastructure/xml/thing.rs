use crate::domain::{GameRecord, UNKNOWN};
use crate::error::{Result, SyncError};
use serde::Deserialize;

/// `<items>` root of `/thing?id=..`.
#[derive(Debug, Deserialize)]
struct ThingDocument {
    #[serde(rename = "item", default)]
    items: Vec<ThingItem>,
}

#[derive(Debug, Deserialize)]
struct ThingItem {
    #[serde(rename = "@id")]
    id: String,
    thumbnail: Option<String>,
    image: Option<String>,
    #[serde(rename = "name", default)]
    names: Vec<ValueElement>,
    yearpublished: Option<ValueElement>,
    minplayers: Option<ValueElement>,
    maxplayers: Option<ValueElement>,
    playingtime: Option<ValueElement>,
    minplaytime: Option<ValueElement>,
    maxplaytime: Option<ValueElement>,
}

/// Elements like `<minplayers value="3" />`.
#[derive(Debug, Deserialize)]
struct ValueElement {
    #[serde(rename = "@value")]
    value: Option<String>,
}

fn value_or_unknown(element: Option<ValueElement>) -> String {
    element
        .and_then(|e| e.value)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn text_or_empty(text: Option<String>) -> String {
    text.map(|t| t.trim().to_string()).unwrap_or_default()
}

impl From<ThingItem> for GameRecord {
    fn from(item: ThingItem) -> Self {
        GameRecord {
            id: item.id,
            name: value_or_unknown(item.names.into_iter().next()),
            year: value_or_unknown(item.yearpublished),
            thumbnail: text_or_empty(item.thumbnail),
            image: text_or_empty(item.image),
            min_players: value_or_unknown(item.minplayers),
            max_players: value_or_unknown(item.maxplayers),
            playing_time: value_or_unknown(item.playingtime),
            min_play_time: value_or_unknown(item.minplaytime),
            max_play_time: value_or_unknown(item.maxplaytime),
        }
    }
}

pub fn parse_thing(xml: &str) -> Result<GameRecord> {
    let document: ThingDocument = quick_xml::de::from_str(xml)?;
    document
        .items
        .into_iter()
        .next()
        .map(GameRecord::from)
        .ok_or_else(|| SyncError::Parse("item detail document has no item element".to_string()))
}
