use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player available to the formation board.
///
/// # Boundary Contract
/// - `id` is the stable identity used by drag events and slot occupancy.
///   Two players on the same board never share an id.
/// - `number` and `color` are presentation hints for the host view and
///   carry no meaning inside the board itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub number: Option<u8>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Player {
    pub fn new(id: &str, name: &str) -> Self {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            number: None,
            color: None,
        }
    }

    pub fn with_number(mut self, number: u8) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// Pitch roles a user can claim in their profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "UPPERCASE")]
pub enum PitchRole {
    GK,
    CB,
    RB,
    LB,
    CDM,
    CM,
    CAM,
    RW,
    LW,
    ST,
}

impl PitchRole {
    pub fn code(&self) -> &'static str {
        match self {
            PitchRole::GK => "GK",
            PitchRole::CB => "CB",
            PitchRole::RB => "RB",
            PitchRole::LB => "LB",
            PitchRole::CDM => "CDM",
            PitchRole::CM => "CM",
            PitchRole::CAM => "CAM",
            PitchRole::RW => "RW",
            PitchRole::LW => "LW",
            PitchRole::ST => "ST",
        }
    }

    /// All roles in the order the profile editor presents them.
    pub fn all() -> [PitchRole; 10] {
        [
            PitchRole::GK,
            PitchRole::CB,
            PitchRole::RB,
            PitchRole::LB,
            PitchRole::CDM,
            PitchRole::CM,
            PitchRole::CAM,
            PitchRole::RW,
            PitchRole::LW,
            PitchRole::ST,
        ]
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PitchRole::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, PitchRole::CB | PitchRole::RB | PitchRole::LB)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, PitchRole::CDM | PitchRole::CM | PitchRole::CAM)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, PitchRole::RW | PitchRole::LW | PitchRole::ST)
    }
}

impl fmt::Display for PitchRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The stock eleven players seeded into a fresh board.
pub fn default_roster() -> Vec<Player> {
    const NAMES: [&str; 11] = [
        "Marcus", "James", "Alex", "David", "Chris", "Michael", "Robert", "Daniel", "Luke",
        "Oliver", "Jack",
    ];
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let number = (i + 1) as u8;
            Player::new(&number.to_string(), name).with_number(number)
        })
        .collect()
}
