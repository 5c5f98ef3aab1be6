use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i32,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}
