//! Scriptable media gateway for tests.

#![allow(dead_code)]

use async_trait::async_trait;

use stockpile::media::{MediaLibrary, Permission, PickedImage};

/// Fake media services with a predetermined outcome per stage.
pub struct FakeMedia {
    permission: Permission,
    /// Reference the picker returns; `None` means the user cancels.
    pick: Option<String>,
    /// Bytes the file read yields; `None` means the read fails.
    bytes: Option<Vec<u8>>,
}

impl FakeMedia {
    /// Permission query comes back denied.
    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            pick: None,
            bytes: None,
        }
    }

    /// Permission granted, but the user cancels the picker.
    pub fn canceled() -> Self {
        Self {
            permission: Permission::Granted,
            pick: None,
            bytes: None,
        }
    }

    /// The user picks `reference` and the file read yields `bytes`.
    pub fn picks(reference: &str, bytes: &[u8]) -> Self {
        Self {
            permission: Permission::Granted,
            pick: Some(reference.to_string()),
            bytes: Some(bytes.to_vec()),
        }
    }

    /// The user picks `reference` but reading the file fails.
    pub fn unreadable(reference: &str) -> Self {
        Self {
            permission: Permission::Granted,
            pick: Some(reference.to_string()),
            bytes: None,
        }
    }
}

#[async_trait]
impl MediaLibrary for FakeMedia {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn pick_image(&self) -> Option<PickedImage> {
        self.pick.clone().map(|reference| PickedImage { reference })
    }

    async fn read_bytes(&self, _reference: &str) -> std::io::Result<Vec<u8>> {
        match &self.bytes {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            )),
        }
    }
}
