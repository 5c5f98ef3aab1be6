use serde::{Deserialize, Serialize};

pub type PlayerId = i32;

/// A player's record as derived from the match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl Standing {
    pub fn new(id: PlayerId, name: impl Into<String>, wins: u32, matches: u32) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            matches,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// Two players drawn against each other for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

impl Pairing {
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            first_id: first.id,
            first_name: first.name.clone(),
            second_id: second.id,
            second_name: second.name.clone(),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.first_id == id || self.second_id == id
    }
}
