use async_trait::async_trait;
use rfd::AsyncFileDialog;

use super::{MediaLibrary, Permission, PickedImage};

/// Desktop implementation: native file dialog plus direct disk reads.
/// Desktop platforms gate nothing, so the permission query always reports
/// granted.
pub struct DesktopMedia;

#[async_trait]
impl MediaLibrary for DesktopMedia {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn pick_image(&self) -> Option<PickedImage> {
        let file = AsyncFileDialog::new()
            .set_title("Choose an image")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
            .await?;
        Some(PickedImage {
            reference: file.path().display().to_string(),
        })
    }

    async fn read_bytes(&self, reference: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(reference).await
    }
}
