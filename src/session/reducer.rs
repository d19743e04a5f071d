use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::state::EditSessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = EditSessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetName(name) => EditSessionState { name, ..state },
            SessionIntent::SetDescription(description) => EditSessionState {
                description,
                ..state
            },
            SessionIntent::SetQuantity(quantity) => EditSessionState { quantity, ..state },
            SessionIntent::StartEdit { record } => EditSessionState {
                target: Some(record.id),
                name: record.name,
                description: record.description,
                quantity: record.quantity,
                photo: record.photo,
                // photo_data deliberately survives: see SessionIntent::StartEdit
                photo_data: state.photo_data,
            },
            SessionIntent::ImagePicked { reference, encoded } => EditSessionState {
                photo: Some(reference),
                photo_data: encoded,
                ..state
            },
            SessionIntent::Reset => EditSessionState::default(),
        }
    }
}
