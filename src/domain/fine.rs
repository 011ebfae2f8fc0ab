//! Lending policy: borrow limit and late-return fine

use chrono::NaiveDate;

/// Maximum number of books a member may hold at once
pub const BORROW_LIMIT: usize = 3;

/// Days a book may be held before a fine accrues
pub const GRACE_DAYS: i64 = 7;

/// Fine charged per day past the grace period, in whole currency units
pub const FINE_PER_DAY: u64 = 5;

/// Calendar days from `from` to `to` (negative if `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Fine owed for holding a book `days_held` days
pub fn late_fine(days_held: i64) -> u64 {
    let late_days = (days_held - GRACE_DAYS).max(0);
    late_days as u64 * FINE_PER_DAY
}
