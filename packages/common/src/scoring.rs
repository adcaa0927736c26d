/// Bonus points granted per whole minute finished under the time limit.
pub const TIME_BONUS_PER_MINUTE: i32 = 5;

/// Compute the time bonus for a finished attempt.
///
/// Awards [`TIME_BONUS_PER_MINUTE`] points per whole minute left on the
/// clock. Partial minutes round down, and the bonus clamps to zero once the
/// limit is exceeded.
pub fn time_bonus(time_limit_minutes: i64, time_spent_secs: i64) -> i32 {
    let remaining_secs = time_limit_minutes * 60 - time_spent_secs;
    let whole_minutes = remaining_secs.div_euclid(60);
    (whole_minutes.max(0) * i64::from(TIME_BONUS_PER_MINUTE)) as i32
}
