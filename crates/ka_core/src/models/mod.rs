//! Domain models: players, squads and match-day state.

pub mod matchday;
pub mod player;
pub mod squad;

pub use matchday::{MatchdaySetup, TeamSide};
pub use player::{default_roster, PitchRole, Player};
pub use squad::{Squad, SquadDirectory, SquadRole};
