/// One product entry mirrored from the remote collection.
///
/// The identifier is assigned by the store on creation, never changes, and
/// is the sole key for update/delete/reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept as the text the user entered; numeric-parseable for real use
    /// but stored as given.
    pub quantity: String,
    /// Absent, a transient local file reference, or a
    /// `data:image/jpeg;base64,…` string once persisted.
    pub photo: Option<String>,
}

/// Field values staged for a create or update call.
///
/// Carries no identifier: the store assigns one on create, and updates are
/// addressed by the separately-held edit target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub photo: Option<String>,
}

impl Product {
    /// Build the record appended after a successful create.
    pub fn from_payload(id: String, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            quantity: payload.quantity,
            photo: payload.photo,
        }
    }

    /// Replace every field except the identifier.
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.quantity = payload.quantity;
        self.photo = payload.photo;
    }
}
