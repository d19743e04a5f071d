//! Application orchestrator.
//!
//! Wires the edit session (MVI), the inventory mirror, the media gateway,
//! and the notice sink. Local state changes only after the corresponding
//! remote call succeeds; every failure path ends in a notice and leaves the
//! application interactive.

use std::sync::Arc;

use crate::media::{to_jpeg_data_uri, MediaLibrary, Permission};
use crate::mvi::Reducer;
use crate::notify::NoticeSink;
use crate::session::{EditSessionState, SessionIntent, SessionReducer};
use crate::store::{Inventory, Product};

pub struct StockApp {
    inventory: Inventory,
    /// Edit session state (MVI pattern).
    session: EditSessionState,
    media: Arc<dyn MediaLibrary>,
    notices: NoticeSink,
}

impl StockApp {
    pub fn new(inventory: Inventory, media: Arc<dyn MediaLibrary>, notices: NoticeSink) -> Self {
        Self {
            inventory,
            session: EditSessionState::default(),
            media,
            notices,
        }
    }

    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }

    pub fn session(&self) -> &EditSessionState {
        &self.session
    }

    pub fn notices(&self) -> &NoticeSink {
        &self.notices
    }

    /// Run a session intent through the reducer and store the new state.
    pub fn apply(&mut self, intent: SessionIntent) {
        self.session = SessionReducer::reduce(std::mem::take(&mut self.session), intent);
    }

    /// Seed the mirror from the remote collection. Single attempt; on
    /// failure the collection stays empty and the error is surfaced.
    pub async fn load_all(&mut self) {
        if let Err(err) = self.inventory.load_all().await {
            self.notices
                .error(format!("Failed to load products: {}", err.notice_text()));
        }
    }

    /// Copy the identified record into the session and target it for
    /// update.
    pub fn start_edit(&mut self, id: &str) {
        match self.inventory.get(id) {
            Some(record) => {
                let record = record.clone();
                self.apply(SessionIntent::StartEdit { record });
            }
            None => self.notices.warning(format!("No product with id '{id}'.")),
        }
    }

    /// Ask the media gateway for an image and stage its encoded form.
    ///
    /// Permission denied or picker canceled leave the session untouched;
    /// only a successful read stages the picked image.
    pub async fn pick_image(&mut self) {
        if self.media.request_permission().await == Permission::Denied {
            self.notices
                .warning("Photo library permission is required.");
            return;
        }

        let Some(picked) = self.media.pick_image().await else {
            return;
        };

        match self.media.read_bytes(&picked.reference).await {
            Ok(bytes) => {
                let encoded = to_jpeg_data_uri(&bytes);
                self.apply(SessionIntent::ImagePicked {
                    reference: picked.reference,
                    encoded,
                });
            }
            Err(err) => self
                .notices
                .error(format!("Failed to read image file: {err}")),
        }
    }

    /// Persist the staged record: update when a target is set, create
    /// otherwise. The session resets only on success.
    pub async fn submit(&mut self) {
        if !self.session.has_required_fields() {
            self.notices.warning("Fill in all required fields.");
            return;
        }

        let payload = self.session.payload();
        let result = match self.session.target.clone() {
            Some(id) => self.inventory.update(&id, payload).await,
            None => self.inventory.create(payload).await,
        };

        match result {
            Ok(()) => self.apply(SessionIntent::Reset),
            Err(err) => self
                .notices
                .error(format!("Failed to save product: {}", err.notice_text())),
        }
    }

    /// Remove the identified record remotely, then locally.
    pub async fn delete(&mut self, id: &str) {
        if let Err(err) = self.inventory.delete(id).await {
            self.notices
                .error(format!("Failed to delete product: {}", err.notice_text()));
        }
    }
}
