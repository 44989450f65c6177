//! Turn-based boss combat: the session orchestrator, its event bus and
//! configuration, on top of the `combat`, `hero`, `items` and `story` crates.

pub mod config;
pub mod event_bus;
pub mod session;

pub use combat;
pub use error;
pub use hero;
pub use items;
pub use story;

pub use crate::config::SessionConfig;
pub use crate::event_bus::{
    CombatEvent, CombatStats, CombatStatsHandler, EventBus, EventHandler, LoggingHandler, Priority,
};
pub use crate::session::{CombatAction, CombatPhase, CombatSession, TurnReport};
