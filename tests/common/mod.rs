//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_media;
pub mod mock_store;

use std::sync::Arc;

use stockpile::app::StockApp;
use stockpile::media::MediaLibrary;
use stockpile::notify::NoticeSink;
use stockpile::store::{Inventory, RemoteStore};

use fake_media::FakeMedia;
use mock_store::MockStore;

/// Build an `Inventory` talking to the given mock server.
pub fn make_inventory(server: &MockStore) -> Inventory {
    Inventory::new(RemoteStore::new(&server.base_url()))
}

/// Build a `StockApp` talking to the given mock server, with a scripted
/// media gateway.
pub fn make_app(server: &MockStore, media: FakeMedia) -> StockApp {
    make_app_with(server, Arc::new(media))
}

pub fn make_app_with(server: &MockStore, media: Arc<dyn MediaLibrary>) -> StockApp {
    StockApp::new(make_inventory(server), media, NoticeSink::new())
}
