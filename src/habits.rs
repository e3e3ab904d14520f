use crate::day::Day;
use crate::models::Habit;
use std::collections::HashSet;

/// Flips whether `today` is recorded for the habit with `id`.
///
/// Returns a new list; the input is left untouched and an unknown id yields
/// an equal copy.
pub fn toggle_completion(habits: &[Habit], id: i64, today: Day) -> Vec<Habit> {
    habits
        .iter()
        .map(|habit| {
            if habit.id != id {
                return habit.clone();
            }
            let mut updated = habit.clone();
            match updated.completed_dates.iter().position(|date| *date == today) {
                Some(index) => {
                    updated.completed_dates.remove(index);
                    updated.completed = false;
                }
                None => {
                    updated.completed_dates.push(today);
                    updated.completed = true;
                }
            }
            updated
        })
        .collect()
}

/// Re-derives each habit's `completed` flag for `today` and drops repeated
/// days, keeping the first occurrence.
pub fn refresh(habits: Vec<Habit>, today: Day) -> Vec<Habit> {
    habits
        .into_iter()
        .map(|mut habit| {
            let mut seen = HashSet::with_capacity(habit.completed_dates.len());
            habit.completed_dates.retain(|date| seen.insert(*date));
            habit.completed = habit.is_done_on(today);
            habit
        })
        .collect()
}

/// Creation-time id in milliseconds, bumped past any existing id so two
/// habits added within the same millisecond stay distinct.
pub fn next_id(habits: &[Habit], now_millis: i64) -> i64 {
    match habits.iter().map(|habit| habit.id).max() {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}

pub fn remove(habits: &[Habit], id: i64) -> Vec<Habit> {
    habits.iter().filter(|habit| habit.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample() -> Vec<Habit> {
        let mut read = Habit::new(2, "Read");
        read.completed_dates.push(day(2026, 1, 4));
        vec![Habit::new(1, "Exercise"), read]
    }

    #[test]
    fn toggle_marks_today_done() {
        let today = day(2026, 1, 5);
        let habits = sample();
        let toggled = toggle_completion(&habits, 2, today);

        assert!(toggled[1].completed);
        assert_eq!(toggled[1].completed_dates, vec![day(2026, 1, 4), today]);
        assert_eq!(toggled[0], habits[0]);
        assert!(!habits[1].completed, "input must not change");
    }

    #[test]
    fn toggle_twice_restores_original() {
        let today = day(2026, 1, 5);
        let habits = sample();
        let once = toggle_completion(&habits, 2, today);
        let twice = toggle_completion(&once, 2, today);
        assert_eq!(twice, habits);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let habits = sample();
        assert_eq!(toggle_completion(&habits, 99, day(2026, 1, 5)), habits);
    }

    #[test]
    fn toggle_off_removes_only_today() {
        let today = day(2026, 1, 5);
        let mut habit = Habit::new(7, "Walk");
        habit.completed_dates = vec![day(2026, 1, 3), today, day(2026, 1, 4)];
        habit.completed = true;

        let toggled = toggle_completion(&[habit], 7, today);
        assert!(!toggled[0].completed);
        assert_eq!(toggled[0].completed_dates, vec![day(2026, 1, 3), day(2026, 1, 4)]);
    }

    #[test]
    fn refresh_rederives_flag_and_dedupes() {
        let today = day(2026, 1, 5);
        let mut stale = Habit::new(1, "Stretch");
        stale.completed = true;
        stale.completed_dates = vec![day(2026, 1, 4), day(2026, 1, 4)];

        let mut fresh = Habit::new(2, "Journal");
        fresh.completed_dates = vec![today];

        let refreshed = refresh(vec![stale, fresh], today);
        assert!(!refreshed[0].completed);
        assert_eq!(refreshed[0].completed_dates, vec![day(2026, 1, 4)]);
        assert!(refreshed[1].completed);
    }

    #[test]
    fn next_id_stays_unique() {
        assert_eq!(next_id(&[], 1_000), 1_000);
        let habits = vec![Habit::new(1_000, "a")];
        assert_eq!(next_id(&habits, 1_000), 1_001);
        assert_eq!(next_id(&habits, 2_000), 2_000);
    }

    #[test]
    fn remove_unknown_id_keeps_list() {
        let habits = sample();
        assert_eq!(remove(&habits, 42), habits);
        assert_eq!(remove(&habits, 1).len(), 1);
    }
}
