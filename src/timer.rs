use std::time::Duration;

const TICK: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// An 8-bit countdown register decremented at a steady 60Hz based on
/// accumulated real elapsed time, decoupled from however often the
/// execution engine itself is invoked.
#[derive(Debug, Default)]
pub struct TimerSubsystem {
    value: u8,
    accumulator: Duration,
}

impl TimerSubsystem {
    pub fn new() -> Self {
        TimerSubsystem::default()
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set(&mut self, value: u8) {
        self.value = value;
    }

    /// Accumulates `elapsed`, decrementing the register once per whole
    /// 1/60s tick. A `while`, not an `if`, so a large elapsed-time gap
    /// (e.g. a paused host) still produces the correct number of ticks.
    pub fn tick(&mut self, elapsed: Duration) {
        self.accumulator += elapsed;
        while self.accumulator >= TICK {
            self.value = self.value.saturating_sub(1);
            self.accumulator -= TICK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_underflows_below_zero() {
        let mut t = TimerSubsystem::new();
        t.set(0);
        t.tick(Duration::from_secs(1));
        assert_eq!(t.value(), 0);
    }

    #[test]
    fn decrements_at_60hz_over_two_seconds_any_chunking() {
        let mut t = TimerSubsystem::new();
        t.set(120);
        for _ in 0..2000 {
            t.tick(Duration::from_millis(1));
        }
        assert_eq!(t.value(), 0);
    }

    #[test]
    fn large_gap_produces_many_ticks_not_just_one() {
        let mut t = TimerSubsystem::new();
        t.set(200);
        t.tick(Duration::from_secs(2));
        assert_eq!(t.value(), 80);
    }

    #[test]
    fn fractional_ticks_carry_over_in_accumulator() {
        let mut t = TimerSubsystem::new();
        t.set(10);
        t.tick(Duration::from_millis(10));
        assert_eq!(t.value(), 10);
        t.tick(Duration::from_millis(10));
        assert_eq!(t.value(), 9);
    }
}
