use crate::day::Day;
use crate::habits;
use crate::models::{Habit, StateResponse, StreakEntry};
use crate::streak::current_streak;

/// Everything the UI shows: the profile registry, the active profile and its
/// habits, and whether the streak panel is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub profiles: Vec<String>,
    pub active: Option<String>,
    pub habits: Vec<Habit>,
    pub show_streaks: bool,
}

/// The storage key an update has made stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persist {
    Profiles,
    Habits(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub tracker: Tracker,
    pub persist: Option<Persist>,
}

impl Update {
    fn unchanged(tracker: &Tracker) -> Self {
        Self {
            tracker: tracker.clone(),
            persist: None,
        }
    }
}

impl Tracker {
    pub fn with_profiles(profiles: Vec<String>) -> Self {
        Self {
            profiles,
            ..Self::default()
        }
    }

    pub fn to_response(&self) -> StateResponse {
        StateResponse {
            profiles: self.profiles.clone(),
            active_profile: self.active.clone(),
            habits: self.habits.clone(),
            show_streaks: self.show_streaks,
        }
    }

    fn with_habits(&self, habits: Vec<Habit>) -> Option<Update> {
        let profile = self.active.clone()?;
        Some(Update {
            tracker: Tracker {
                habits,
                ..self.clone()
            },
            persist: Some(Persist::Habits(profile)),
        })
    }
}

pub fn create_profile(tracker: &Tracker, name: &str) -> Update {
    let name = name.trim();
    if name.is_empty() || tracker.profiles.iter().any(|existing| existing == name) {
        return Update::unchanged(tracker);
    }

    let mut next = tracker.clone();
    next.profiles.push(name.to_string());
    Update {
        tracker: next,
        persist: Some(Persist::Profiles),
    }
}

/// Activates a registered profile with the habits loaded for it.
pub fn select_profile(tracker: &Tracker, name: &str, stored: Vec<Habit>, today: Day) -> Tracker {
    if !tracker.profiles.iter().any(|existing| existing == name) {
        return tracker.clone();
    }

    Tracker {
        profiles: tracker.profiles.clone(),
        active: Some(name.to_string()),
        habits: habits::refresh(stored, today),
        show_streaks: false,
    }
}

pub fn switch_profile(tracker: &Tracker) -> Tracker {
    Tracker::with_profiles(tracker.profiles.clone())
}

pub fn add_habit(tracker: &Tracker, name: &str, now_millis: i64) -> Update {
    let name = name.trim();
    if name.is_empty() {
        return Update::unchanged(tracker);
    }

    let mut list = tracker.habits.clone();
    list.push(Habit::new(habits::next_id(&tracker.habits, now_millis), name));
    tracker
        .with_habits(list)
        .unwrap_or_else(|| Update::unchanged(tracker))
}

pub fn delete_habit(tracker: &Tracker, id: i64) -> Update {
    if !tracker.habits.iter().any(|habit| habit.id == id) {
        return Update::unchanged(tracker);
    }

    tracker
        .with_habits(habits::remove(&tracker.habits, id))
        .unwrap_or_else(|| Update::unchanged(tracker))
}

pub fn toggle_habit(tracker: &Tracker, id: i64, today: Day) -> Update {
    if !tracker.habits.iter().any(|habit| habit.id == id) {
        return Update::unchanged(tracker);
    }

    tracker
        .with_habits(habits::toggle_completion(&tracker.habits, id, today))
        .unwrap_or_else(|| Update::unchanged(tracker))
}

pub fn toggle_streaks(tracker: &Tracker) -> Tracker {
    Tracker {
        show_streaks: !tracker.show_streaks,
        ..tracker.clone()
    }
}

pub fn streaks(tracker: &Tracker, today: Day) -> Vec<StreakEntry> {
    tracker
        .habits
        .iter()
        .map(|habit| StreakEntry {
            id: habit.id,
            name: habit.name.clone(),
            streak: current_streak(&habit.completed_dates, today),
        })
        .collect()
}
