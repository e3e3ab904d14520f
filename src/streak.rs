use crate::day::Day;

/// Number of consecutive completed days ending today.
///
/// Days are walked newest first. A day matching the cursor extends the run
/// and moves the cursor back one day; the first day older than the cursor
/// ends it. Days newer than the cursor (future entries, repeats) are skipped.
/// A run that ended yesterday therefore counts as 0.
pub fn current_streak(dates: &[Day], today: Day) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0u32;
    let mut cursor = today;
    for date in sorted {
        if date == cursor {
            streak = streak.saturating_add(1);
            match cursor.pred() {
                Some(prev) => cursor = prev,
                None => break,
            }
        } else if date < cursor {
            break;
        }
    }

    streak
}
