//! Match-day setup: one formation board per side plus squad-size selection.
//!
//! Changing the squad size swaps both sides onto the matching formation
//! template and refills their rosters from the player pool. Each side's
//! board is independent; edits to one never touch the other.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::FormationBoard;
use crate::error::{BoardError, Result};
use crate::formation::{classic_442, for_squad_size, MAX_SQUAD_SIZE, MIN_SQUAD_SIZE};
use crate::models::player::Player;

/// Which team's board is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub const fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            TeamSide::Home => "Home",
            TeamSide::Away => "Away",
        }
    }
}

/// Board state for one match: both sides, the shared player pool and the
/// side currently on screen.
#[derive(Debug, Clone)]
pub struct MatchdaySetup {
    squad_id: String,
    player_pool: Vec<Player>,
    squad_size: u8,
    active_side: TeamSide,
    home: FormationBoard,
    away: FormationBoard,
}

impl MatchdaySetup {
    /// Start at eleven-a-side on the classic 4-4-2. A pool shorter than the
    /// squad size just fields a short bench.
    pub fn new(squad_id: &str, player_pool: Vec<Player>) -> Self {
        let formation = classic_442();
        let size = formation.squad_size();
        let starters: Vec<Player> = player_pool.iter().take(size as usize).cloned().collect();
        let home = FormationBoard::new(starters.clone(), formation.clone());
        let away = FormationBoard::new(starters, formation);
        log::info!("matchday setup created for squad {} ({}p)", squad_id, size);
        MatchdaySetup {
            squad_id: squad_id.to_string(),
            player_pool,
            squad_size: size,
            active_side: TeamSide::default(),
            home,
            away,
        }
    }

    /// Switch both sides to the template for `size` players. Rebuilds both
    /// boards from the pool, so all placements and any open drag are gone.
    pub fn set_squad_size(&mut self, size: u8) -> Result<()> {
        if !(MIN_SQUAD_SIZE..=MAX_SQUAD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSquadSize { size });
        }
        let formation = for_squad_size(size).ok_or(BoardError::InvalidSquadSize { size })?;

        let starters: Vec<Player> =
            self.player_pool.iter().take(size as usize).cloned().collect();
        self.home.reinitialize(starters.clone(), formation.clone());
        self.away.reinitialize(starters, formation);
        self.squad_size = size;
        log::info!("squad size set to {} for squad {}", size, self.squad_id);
        Ok(())
    }

    pub fn squad_id(&self) -> &str {
        &self.squad_id
    }

    pub fn squad_size(&self) -> u8 {
        self.squad_size
    }

    pub fn active_side(&self) -> TeamSide {
        self.active_side
    }

    pub fn set_active_side(&mut self, side: TeamSide) {
        self.active_side = side;
    }

    pub fn board(&self, side: TeamSide) -> &FormationBoard {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn board_mut(&mut self, side: TeamSide) -> &mut FormationBoard {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    pub fn active_board(&self) -> &FormationBoard {
        self.board(self.active_side)
    }

    pub fn active_board_mut(&mut self) -> &mut FormationBoard {
        self.board_mut(self.active_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::default_roster;
    use crate::pitch::{Point, Rect};

    fn setup() -> MatchdaySetup {
        MatchdaySetup::new("squad-1", default_roster())
    }

    #[test]
    fn test_new_setup_is_eleven_a_side() {
        let setup = setup();
        assert_eq!(setup.squad_size(), 11);
        assert_eq!(setup.active_side(), TeamSide::Home);
        assert_eq!(setup.board(TeamSide::Home).formation().name, "4-4-2");
        assert_eq!(setup.board(TeamSide::Away).formation().name, "4-4-2");
        assert_eq!(setup.board(TeamSide::Home).roster().len(), 11);
    }

    #[test]
    fn test_set_squad_size_switches_both_boards() {
        let mut setup = setup();
        setup.set_squad_size(7).unwrap();

        assert_eq!(setup.squad_size(), 7);
        for side in [TeamSide::Home, TeamSide::Away] {
            let board = setup.board(side);
            assert_eq!(board.slots().len(), 7, "{} side", side.label());
            assert_eq!(board.roster().len(), 7, "{} side", side.label());
            assert_eq!(board.assigned_count(), 0, "{} side", side.label());
        }
    }

    #[test]
    fn test_set_squad_size_rejects_out_of_range() {
        let mut setup = setup();
        for size in [0u8, 4, 12] {
            let err = setup.set_squad_size(size).unwrap_err();
            assert!(matches!(err, BoardError::InvalidSquadSize { size: s } if s == size));
        }
        assert_eq!(setup.squad_size(), 11, "failed change must not stick");
    }

    #[test]
    fn test_sides_are_independent() {
        let mut setup = setup();
        setup.set_squad_size(5).unwrap();

        let board = setup.board_mut(TeamSide::Home);
        board.set_slot_rect("GK", Rect::new(0.0, 0.0, 48.0, 48.0));
        board.begin_drag("1", None).unwrap();
        board.update_drag(Point::new(24.0, 24.0));
        board.end_drag();

        assert_eq!(setup.board(TeamSide::Home).assigned_count(), 1);
        assert_eq!(setup.board(TeamSide::Away).assigned_count(), 0);
    }

    #[test]
    fn test_active_side_selection() {
        let mut setup = setup();
        assert_eq!(setup.active_side(), TeamSide::Home);
        setup.set_active_side(TeamSide::Away);
        assert_eq!(setup.active_side(), TeamSide::Away);
        setup.set_active_side(setup.active_side().opponent());
        assert_eq!(setup.active_side(), TeamSide::Home);
    }

    #[test]
    fn test_short_pool_fields_short_bench() {
        let pool: Vec<Player> = default_roster().into_iter().take(6).collect();
        let setup = MatchdaySetup::new("squad-2", pool);
        assert_eq!(setup.board(TeamSide::Home).roster().len(), 6);
        assert_eq!(setup.board(TeamSide::Home).slots().len(), 11);
    }

    #[test]
    fn test_opponent_is_an_involution() {
        for side in [TeamSide::Home, TeamSide::Away] {
            assert_eq!(side.opponent().opponent(), side);
            assert_ne!(side.opponent(), side);
        }
    }
}
