use crate::domain::CollectionEntry;
use crate::error::Result;
use serde::Deserialize;

/// `<items>` root of `/collection`. Error documents (`<errors>`) and the
/// "request queued" `<message>` decode to an empty item list.
#[derive(Debug, Deserialize)]
struct CollectionDocument {
    #[serde(rename = "item", default)]
    items: Vec<CollectionItem>,
}

#[derive(Debug, Deserialize)]
struct CollectionItem {
    #[serde(rename = "@objectid")]
    object_id: String,
    status: Option<ItemStatus>,
}

#[derive(Debug, Deserialize)]
struct ItemStatus {
    #[serde(rename = "@own")]
    own: Option<String>,
}

impl From<CollectionItem> for CollectionEntry {
    fn from(item: CollectionItem) -> Self {
        let owned = item
            .status
            .and_then(|status| status.own)
            .is_some_and(|own| own == "1");

        CollectionEntry {
            id: item.object_id,
            owned,
        }
    }
}

pub fn parse_collection(xml: &str) -> Result<Vec<CollectionEntry>> {
    let document: CollectionDocument = quick_xml::de::from_str(xml)?;
    Ok(document.items.into_iter().map(CollectionEntry::from).collect())
}
