//! Model-View-Intent (MVI) primitives shared by the stores.
//!
//! Every store in this crate keeps its state behind a reducer:
//!
//! ```text
//! Command ──→ Intent ──→ Reducer ──→ State ──→ View
//!                ↑                              │
//!                └──────── completion ──────────┘
//! ```
//!
//! - **State**: owned snapshot the view reads from
//! - **Intent**: a command or a completion event
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
