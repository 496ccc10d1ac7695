#![allow(dead_code)]

use axum::Router;
use boardgame_sync::api::{self, AppState};
use boardgame_sync::config::CatalogConfig;
use boardgame_sync::domain::{GameRecord, GameStore};
use boardgame_sync::infrastructure::FileSystemStore;
use boardgame_sync::services::SyncWorkflow;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<FileSystemStore>,
    pub sync: Arc<SyncWorkflow>,
    _dir: TempDir,
}

impl Harness {
    pub fn router(&self) -> Router {
        api::router(AppState {
            sync: self.sync.clone(),
        })
    }
}

pub async fn harness(api_call_delay: Duration) -> Harness {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileSystemStore::new(dir.path()));
    let catalog = CatalogConfig {
        base_url: format!("{}/xmlapi2", server.uri()),
        api_call_delay,
    };
    let sync = Arc::new(SyncWorkflow::from_config(
        Client::new(),
        &catalog,
        store.clone(),
    ));

    Harness {
        server,
        store,
        sync,
        _dir: dir,
    }
}

/// `(objectid, owned)` pairs rendered as a `/collection` document.
pub fn collection_xml(items: &[(&str, bool)]) -> String {
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?><items totalitems="{}" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">"#,
        items.len()
    );
    for (id, owned) in items {
        xml.push_str(&format!(
            r#"<item objecttype="thing" objectid="{}" subtype="boardgame"><name sortindex="1">Game {}</name><status own="{}" prevowned="0" want="0" wishlist="0" /><numplays>0</numplays></item>"#,
            id,
            id,
            if *owned { 1 } else { 0 }
        ));
    }
    xml.push_str("</items>");
    xml
}

pub fn thing_xml(id: &str, name: &str, year: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse"><item type="boardgame" id="{id}"><thumbnail>https://img.example/{id}_t.jpg</thumbnail><image>https://img.example/{id}.jpg</image><name type="primary" sortindex="1" value="{name}" /><yearpublished value="{year}" /><minplayers value="2" /><maxplayers value="4" /><playingtime value="60" /><minplaytime value="45" /><maxplaytime value="60" /></item></items>"#
    )
}

pub fn record(id: &str, name: &str) -> GameRecord {
    GameRecord {
        name: name.to_string(),
        ..GameRecord::unknown(id)
    }
}

pub fn seed(store: &FileSystemStore, games: &[GameRecord]) {
    for game in games {
        store.save_game(game).unwrap();
    }
}

pub async fn mount_collection(server: &MockServer, username: &str, xml: String) {
    Mock::given(method("GET"))
        .and(path("/xmlapi2/collection"))
        .and(query_param("username", username))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(server)
        .await;
}

/// Expects exactly `times` detail requests for `id` by the time the server drops.
pub async fn mount_thing(server: &MockServer, id: &str, xml: String, times: u64) {
    Mock::given(method("GET"))
        .and(path("/xmlapi2/thing"))
        .and(query_param("id", id))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_thing_failure(server: &MockServer, id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/xmlapi2/thing"))
        .and(query_param("id", id))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
