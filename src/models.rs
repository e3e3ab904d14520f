use crate::day::Day;
use serde::{Deserialize, Serialize};

/// A tracked habit as it is stored under `habits_<profile>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    #[serde(default)]
    pub completed_dates: Vec<Day>,
}

impl Habit {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            completed_dates: Vec::new(),
        }
    }

    pub fn is_done_on(&self, day: Day) -> bool {
        self.completed_dates.contains(&day)
    }
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub profiles: Vec<String>,
    pub active_profile: Option<String>,
    pub habits: Vec<Habit>,
    pub show_streaks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakEntry {
    pub id: i64,
    pub name: String,
    pub streak: u32,
}
