use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    PlayerNotFound(String),
    SlotNotFound(String),
    OriginMismatch { player_id: String, slot_id: String },
    DragAlreadyActive { active: String, requested: String },
    InvalidSquadSize { size: u8 },
    InvalidFormation(String),
    SerializationError(String),
    DeserializationError(String),
}

#[derive(Debug)]
pub enum SquadError {
    EmptyName,
    NotFound(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::PlayerNotFound(player_id) => {
                write!(f, "Player not found: {}", player_id)
            }
            BoardError::SlotNotFound(slot_id) => {
                write!(f, "Slot not found: {}", slot_id)
            }
            BoardError::OriginMismatch { player_id, slot_id } => {
                write!(f, "Player {} does not occupy slot {}", player_id, slot_id)
            }
            BoardError::DragAlreadyActive { active, requested } => {
                write!(
                    f,
                    "Drag already in progress for player {} (requested {})",
                    active, requested
                )
            }
            BoardError::InvalidSquadSize { size } => {
                write!(f, "Invalid squad size: {}", size)
            }
            BoardError::InvalidFormation(msg) => {
                write!(f, "Invalid formation: {}", msg)
            }
            BoardError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            BoardError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl fmt::Display for SquadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SquadError::EmptyName => write!(f, "Squad name must not be empty"),
            SquadError::NotFound(squad_id) => write!(f, "Squad not found: {}", squad_id),
        }
    }
}

impl std::error::Error for SquadError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            BoardError::DeserializationError(err.to_string())
        } else {
            BoardError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
