//! Pond module: the shared fish stock and turn resolution

mod state;
mod turn;


pub use state::*;
pub use turn::*;
