use crate::day::{normalize, Day};
use crate::errors::AppError;
use crate::habits;
use crate::models::StreakEntry;
use crate::storage::{self, KvStore};
use crate::tracker::{self, Persist, Tracker, Update};
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Owns the application state and its backing store. Each operation runs the
/// pure update and then writes the affected key through to storage.
#[derive(Debug)]
pub struct Session {
    tracker: Tracker,
    store: KvStore,
}

impl Session {
    pub fn new(store: KvStore) -> Self {
        let profiles = storage::load_profiles(&store);
        info!(count = profiles.len(), "loaded profiles");
        Self {
            tracker: Tracker::with_profiles(profiles),
            store,
        }
    }

    /// Current state with every `completed` flag re-derived for `today`. The
    /// process can outlive the day a habit was toggled on.
    pub fn tracker(&mut self, today: Day) -> &Tracker {
        self.roll_over(today);
        &self.tracker
    }

    fn roll_over(&mut self, today: Day) {
        let current = std::mem::take(&mut self.tracker.habits);
        self.tracker.habits = habits::refresh(current, today);
    }

    async fn commit(&mut self, update: Update) -> Result<(), AppError> {
        self.tracker = update.tracker;
        match update.persist {
            Some(Persist::Profiles) => {
                storage::save_profiles(&mut self.store, &self.tracker.profiles).await?
            }
            Some(Persist::Habits(profile)) => {
                storage::save_habits(&mut self.store, &profile, &self.tracker.habits).await?
            }
            None => debug!("nothing to persist"),
        }
        Ok(())
    }

    /// Registers a profile and makes it the active one.
    pub async fn create_profile(&mut self, name: &str, now: DateTime<Local>) -> Result<(), AppError> {
        let update = tracker::create_profile(&self.tracker, name);
        if update.persist.is_none() {
            return Ok(());
        }
        self.commit(update).await?;
        let name = name.trim();
        info!(profile = name, "created profile");
        self.select_profile(name, normalize(now));
        Ok(())
    }

    pub fn select_profile(&mut self, name: &str, today: Day) {
        let stored = storage::load_habits(&self.store, name, today);
        self.tracker = tracker::select_profile(&self.tracker, name, stored, today);
        debug!(active = ?self.tracker.active, "selected profile");
    }

    pub fn switch_profile(&mut self) {
        self.tracker = tracker::switch_profile(&self.tracker);
    }

    pub async fn add_habit(&mut self, name: &str, now: DateTime<Local>) -> Result<(), AppError> {
        self.roll_over(normalize(now));
        let update = tracker::add_habit(&self.tracker, name, now.timestamp_millis());
        self.commit(update).await
    }

    pub async fn delete_habit(&mut self, id: i64, today: Day) -> Result<(), AppError> {
        self.roll_over(today);
        let update = tracker::delete_habit(&self.tracker, id);
        self.commit(update).await
    }

    pub async fn toggle_habit(&mut self, id: i64, today: Day) -> Result<(), AppError> {
        self.roll_over(today);
        let update = tracker::toggle_habit(&self.tracker, id, today);
        self.commit(update).await
    }

    pub fn toggle_streaks(&mut self) {
        self.tracker = tracker::toggle_streaks(&self.tracker);
    }

    pub fn streaks(&self, today: Day) -> Vec<StreakEntry> {
        tracker::streaks(&self.tracker, today)
    }
}
