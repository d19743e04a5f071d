use crate::mvi::Intent;
use crate::store::Product;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    SetName(String),
    SetDescription(String),
    SetQuantity(String),
    /// Copy the record's fields into the session and target it for update.
    /// The staged encoded image is left untouched, so re-opening an edit
    /// never forces re-encoding an unchanged photo.
    StartEdit { record: Product },
    /// A new image was picked: `encoded` is the data-URI payload to send,
    /// `reference` the local file reference to display.
    ImagePicked { reference: String, encoded: String },
    /// Back to the empty initial state. Fired after every successful
    /// submission and on explicit cancel.
    Reset,
}

impl Intent for SessionIntent {}
