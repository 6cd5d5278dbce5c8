//! Time-to-counter conversion (RFC 6238 section 4.2).

pub type Counter = [u8; 8];

// Convert the interval to base 256 and stick each 0-ff digit in its own
// byte, lowest digit last. Non-positive intervals stay all zero.
pub fn interval_to_counter(interval: i64) -> Counter {
    let mut bytes = [0u8; 8];
    let mut num = interval;
    let mut i = bytes.len();
    while num > 0 {
        i -= 1;
        bytes[i] = (num % 256) as u8;
        num /= 256;
    }
    bytes
}

/// Returns the counter for `unixtime` and the seconds already elapsed in
/// the current period.
///
/// Uses floor division, so elapsed seconds stay in `[0, period)` even for
/// timestamps before the epoch. `period` must be positive.
pub fn counter_from_time(unixtime: i64, period: i64) -> (Counter, i64) {
    let intervals = unixtime.div_euclid(period);
    let elapsed = unixtime.rem_euclid(period);
    tracing::trace!(unixtime, period, intervals, elapsed, "derived counter");
    (interval_to_counter(intervals), elapsed)
}
