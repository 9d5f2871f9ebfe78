// Simulation time
//
// Every timestamp in the game is a millisecond count on the simulation clock.
// Components never read the wall clock; the tick timestamp is passed in.

/// Milliseconds on the simulation clock
pub type Millis = u64;

/// Time elapsed since `since`, saturating at zero if `since` lies in the future
#[inline]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.saturating_sub(since)
}

/// Whether at least `duration` has passed since `since`
#[inline]
pub fn has_elapsed(now: Millis, since: Millis, duration: Millis) -> bool {
    elapsed(now, since) >= duration
}

/// Time left in a window of `duration` that opened at `since`
#[inline]
pub fn remaining(now: Millis, since: Millis, duration: Millis) -> Millis {
    duration.saturating_sub(elapsed(now, since))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(elapsed(100, 40), 60);
        assert_eq!(elapsed(40, 100), 0);
    }

    #[test]
    fn test_has_elapsed_boundary() {
        assert!(!has_elapsed(4999, 0, 5000));
        assert!(has_elapsed(5000, 0, 5000));
    }

    #[test]
    fn test_remaining() {
        assert_eq!(remaining(1000, 0, 5000), 4000);
        assert_eq!(remaining(9000, 0, 5000), 0);
    }
}
