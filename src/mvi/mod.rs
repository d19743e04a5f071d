//! Model-View-Intent (MVI) architecture primitives.
//!
//! The edit session follows unidirectional data flow: every change to the
//! staged form state goes through an intent and a pure reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of session state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
