use crate::mvi::UiState;
use crate::store::ProductPayload;

/// Staged form state for a single record.
///
/// `target` absent means "creating new"; present means the identified
/// record is being edited. Both modes accept the same field mutations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSessionState {
    /// Identifier of the record being edited, if any.
    pub target: Option<String>,
    pub name: String,
    pub description: String,
    pub quantity: String,
    /// The currently-displayed image source: a previously-persisted data
    /// URI or a freshly picked local file reference.
    pub photo: Option<String>,
    /// Staged encoded payload to send; empty until a new image is picked.
    /// When non-empty it overrides `photo` in the submission payload.
    pub photo_data: String,
}

impl UiState for EditSessionState {}

impl EditSessionState {
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Name, description, and quantity must all be filled before submit.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty() && !self.quantity.is_empty()
    }

    /// Build the submission payload, resolving the photo precedence: a
    /// freshly picked image always overrides whatever was displayed before.
    pub fn payload(&self) -> ProductPayload {
        let photo = if self.photo_data.is_empty() {
            self.photo.clone()
        } else {
            Some(self.photo_data.clone())
        };
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity.clone(),
            photo,
        }
    }
}
