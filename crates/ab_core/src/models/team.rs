use serde::{Deserialize, Serialize};

use super::player::{Player, Role};

/// A team is an ordered batting lineup plus the index of its current
/// pitcher. The lineup cycles; position 0 leads off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub lineup: Vec<Player>,
    /// Index into `lineup` of the player pitching while this team fields
    pub pitcher: usize,
}

impl Team {
    pub fn new(name: impl Into<String>, lineup: Vec<Player>, pitcher: usize) -> Self {
        Self {
            name: name.into(),
            lineup,
            pitcher,
        }
    }

    /// Validate lineup constraints. Errors are plain strings; callers map
    /// them into their own error type.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("team name is empty".to_string());
        }
        if self.lineup.is_empty() {
            return Err(format!("team '{}' has an empty lineup", self.name));
        }
        if self.lineup.len() > u8::MAX as usize {
            return Err(format!(
                "team '{}' lineup too large: {}",
                self.name,
                self.lineup.len()
            ));
        }
        if self.pitcher >= self.lineup.len() {
            return Err(format!(
                "team '{}' pitcher index {} out of range (lineup size {})",
                self.name,
                self.pitcher,
                self.lineup.len()
            ));
        }
        Ok(())
    }

    pub fn batter(&self, order_slot: usize) -> &Player {
        &self.lineup[order_slot % self.lineup.len()]
    }

    pub fn current_pitcher(&self) -> &Player {
        &self.lineup[self.pitcher]
    }

    pub fn lineup_size(&self) -> usize {
        self.lineup.len()
    }
}

/// A nine-man default lineup with average attributes, pitcher batting last.
pub fn default_team(name: &str) -> Team {
    let mut lineup: Vec<Player> = (1..=8)
        .map(|i| Player::new(format!("{} Batter {}", name, i), Role::Batter))
        .collect();
    lineup.push(Player::new(format!("{} Pitcher", name), Role::Pitcher));
    let pitcher = lineup.len() - 1;
    Team::new(name, lineup, pitcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default_team() {
        assert!(default_team("Seoul").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_lineup() {
        let team = Team::new("Ghosts", vec![], 0);
        assert!(team.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_pitcher_out_of_range() {
        let team = Team::new("Solo", vec![Player::new("One", Role::Batter)], 1);
        assert!(team.validate().is_err());
    }

    #[test]
    fn test_batter_cycles_through_order() {
        let team = default_team("Busan");
        assert_eq!(team.batter(0).name, team.batter(9).name);
        assert_eq!(team.batter(10).name, team.batter(1).name);
    }
}
