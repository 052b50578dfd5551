//! The Darkwood adventure: locations, prompts, and the game loop.
//!
//! Every place the player can stand is a [`Node`]. A node renders a
//! [`Scene`] from the current [`WorldState`](dw_core::WorldState) and, given
//! the player's answer, produces a [`Transition`] to the next node, a fight,
//! a restart, or the end of the game. [`GameSession`] drives that loop over
//! any line-based [`Console`].

pub mod config;
pub mod console;
pub mod error;
pub mod graph;
pub mod location;
mod narrate;
pub mod prompt;
pub mod session;

pub use config::GameConfig;
pub use console::{Console, ScriptedConsole};
pub use error::{StoryError, StoryResult};
pub use graph::LocationGraph;
pub use location::{Node, Scene, Step, Transition, after_combat};
pub use prompt::{Prompt, PromptKind, Token};
pub use session::{GameEnd, GameSession};
