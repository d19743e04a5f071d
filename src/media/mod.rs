//! Device media services: permission query, image picker, file access.
//!
//! Kept behind a trait so the picker and file subsystem stay opaque
//! collaborators; tests substitute fakes.

mod desktop;
mod encode;

pub use desktop::DesktopMedia;
pub use encode::to_jpeg_data_uri;

use async_trait::async_trait;

/// Outcome of the media-library permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// An image chosen in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    /// Local reference understood by `read_bytes`, displayable as-is.
    pub reference: String,
}

/// The device's media services.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Ask for permission to read the photo library.
    async fn request_permission(&self) -> Permission;

    /// Open the picker. `None` means the user canceled.
    async fn pick_image(&self) -> Option<PickedImage>;

    /// Raw bytes of a previously picked reference.
    async fn read_bytes(&self, reference: &str) -> std::io::Result<Vec<u8>>;
}
