//! Squads the user belongs to and their match availability.

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SquadError;

/// The user's role inside a squad, as shown on the squad card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum SquadRole {
    Manager,
    #[serde(rename = "Assistant Manager")]
    AssistantManager,
    Captain,
    Player,
}

impl SquadRole {
    pub const fn label(&self) -> &'static str {
        match self {
            SquadRole::Manager => "Manager",
            SquadRole::AssistantManager => "Assistant Manager",
            SquadRole::Captain => "Captain",
            SquadRole::Player => "Player",
        }
    }

    /// Badge background, as a CSS hex color.
    pub const fn badge_color(&self) -> &'static str {
        match self {
            SquadRole::Manager => "#4CAF50",
            SquadRole::AssistantManager => "#FF9800",
            SquadRole::Captain => "#2196F3",
            SquadRole::Player => "#9E9E9E",
        }
    }
}

impl std::fmt::Display for SquadRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One squad card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Squad {
    pub id: String,
    pub name: String,
    pub member_count: u32,
    pub role: SquadRole,
    /// Next fixture as display text, e.g. "Tomorrow 3PM".
    pub next_game: Option<String>,
}

/// Every squad the user belongs to, newest first, plus the user's
/// availability answer per squad.
#[derive(Debug, Clone, Default)]
pub struct SquadDirectory {
    squads: Vec<Squad>,
    availability: FxHashMap<String, bool>,
}

impl SquadDirectory {
    pub fn new() -> Self {
        SquadDirectory::default()
    }

    /// The stock directory a fresh install starts with.
    pub fn sample() -> Self {
        let squads = vec![
            Squad {
                id: "1".to_string(),
                name: "Sunday League FC".to_string(),
                member_count: 16,
                role: SquadRole::Manager,
                next_game: Some("Tomorrow 3PM".to_string()),
            },
            Squad {
                id: "2".to_string(),
                name: "Park Pickup Games".to_string(),
                member_count: 8,
                role: SquadRole::Player,
                next_game: Some("Friday 6PM".to_string()),
            },
        ];
        SquadDirectory { squads, availability: FxHashMap::default() }
    }

    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn squad(&self, squad_id: &str) -> Option<&Squad> {
        self.squads.iter().find(|s| s.id == squad_id)
    }

    /// Create a squad and put it at the top of the list. The creator is its
    /// manager and only member. Name is trimmed; blank names are rejected.
    pub fn create_squad(&mut self, name: &str) -> Result<&Squad, SquadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SquadError::EmptyName);
        }
        let squad = Squad {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            member_count: 1,
            role: SquadRole::Manager,
            next_game: None,
        };
        log::info!("squad created: {} ({})", squad.name, squad.id);
        self.squads.insert(0, squad);
        Ok(&self.squads[0])
    }

    /// Record the user's availability for a squad's next game.
    pub fn set_availability(&mut self, squad_id: &str, available: bool) -> Result<(), SquadError> {
        if self.squad(squad_id).is_none() {
            return Err(SquadError::NotFound(squad_id.to_string()));
        }
        self.availability.insert(squad_id.to_string(), available);
        log::debug!("availability for squad {}: {}", squad_id, available);
        Ok(())
    }

    /// Unanswered counts as unavailable.
    pub fn is_available(&self, squad_id: &str) -> bool {
        self.availability.get(squad_id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.squads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sample_directory_seeds() {
        let directory = SquadDirectory::sample();
        assert_eq!(directory.len(), 2);

        let first = directory.squad("1").unwrap();
        assert_eq!(first.name, "Sunday League FC");
        assert_eq!(first.member_count, 16);
        assert_eq!(first.role, SquadRole::Manager);
        assert_eq!(first.next_game.as_deref(), Some("Tomorrow 3PM"));

        let second = directory.squad("2").unwrap();
        assert_eq!(second.name, "Park Pickup Games");
        assert_eq!(second.member_count, 8);
        assert_eq!(second.role, SquadRole::Player);
    }

    #[test]
    fn test_create_squad_prepends_a_managed_squad() {
        let mut directory = SquadDirectory::sample();
        let id = directory.create_squad("  Thursday Five-a-Side  ").unwrap().id.clone();

        let squad = &directory.squads()[0];
        assert_eq!(squad.id, id);
        assert_eq!(squad.name, "Thursday Five-a-Side", "name is trimmed");
        assert_eq!(squad.member_count, 1);
        assert_eq!(squad.role, SquadRole::Manager);
        assert_eq!(squad.next_game, None);
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_create_squad_ids_are_unique() {
        let mut directory = SquadDirectory::new();
        let a = directory.create_squad("A").unwrap().id.clone();
        let b = directory.create_squad("B").unwrap().id.clone();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_create_squad_rejects_blank_names() {
        let mut directory = SquadDirectory::new();
        assert!(matches!(directory.create_squad(""), Err(SquadError::EmptyName)));
        assert!(matches!(directory.create_squad("   "), Err(SquadError::EmptyName)));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_availability_defaults_to_unavailable() {
        let mut directory = SquadDirectory::sample();
        assert!(!directory.is_available("1"));

        directory.set_availability("1", true).unwrap();
        assert!(directory.is_available("1"));
        directory.set_availability("1", false).unwrap();
        assert!(!directory.is_available("1"));
    }

    #[test]
    fn test_availability_requires_a_known_squad() {
        let mut directory = SquadDirectory::sample();
        let err = directory.set_availability("99", true).unwrap_err();
        assert!(matches!(err, SquadError::NotFound(ref id) if id == "99"));
    }

    #[test]
    fn test_role_serializes_with_display_names() {
        let json = serde_json::to_string(&SquadRole::AssistantManager).unwrap();
        assert_eq!(json, "\"Assistant Manager\"");
        let role: SquadRole = serde_json::from_str("\"Assistant Manager\"").unwrap();
        assert_eq!(role, SquadRole::AssistantManager);
    }

    #[test]
    fn test_badge_colors_are_distinct() {
        let colors: HashSet<&str> = SquadRole::iter().map(|r| r.badge_color()).collect();
        assert_eq!(colors.len(), SquadRole::iter().count());
        for role in SquadRole::iter() {
            assert!(role.badge_color().starts_with('#'));
            assert_eq!(role.badge_color().len(), 7);
        }
    }
}
