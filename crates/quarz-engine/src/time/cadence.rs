/// Fixed-timestep trigger accumulator.
///
/// Sums measured elapsed time and fires one tick for every full `period`
/// crossed. On each fire the accumulator is reduced by exactly `period`
/// rather than reset to zero, so fractional remainders carry over and the
/// long-run tick rate does not drift regardless of how deltas are chunked.
///
/// A backlog cap bounds how many ticks a single `advance` can report after a
/// long stall; the remainder above the cap is discarded. The cap engages
/// only when one delta spans more than `max_backlog` periods. Deltas
/// measured by [`FrameClock`](super::FrameClock) are clamped to 2 s, which
/// stays under the cap for the one-second cadence, so on that path the
/// floor-of-elapsed total is exact. Callers that derive their state from an
/// absolute source (like a wall clock) lose nothing when backlogged ticks
/// collapse.
#[derive(Debug, Clone)]
pub struct TickCadence {
    period: f32,
    accumulator: f32,
    max_backlog: u32,
}

impl TickCadence {
    /// Creates a cadence firing every `period` seconds.
    ///
    /// # Panics
    /// Panics if `period` is not strictly positive and finite.
    pub fn new(period: f32) -> Self {
        assert!(period > 0.0 && period.is_finite(), "cadence period must be positive");
        Self {
            period,
            accumulator: 0.0,
            max_backlog: 3,
        }
    }

    /// One tick per second — the clock redraw cadence.
    pub fn per_second() -> Self {
        Self::new(1.0)
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Adds `dt` seconds of elapsed time and returns how many ticks fired.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        let mut fired = 0u32;
        while self.accumulator >= self.period && fired < self.max_backlog {
            self.accumulator -= self.period;
            fired += 1;
        }

        // Stall longer than the backlog cap: drop the excess whole periods,
        // keep the fractional remainder so phase is preserved.
        if fired == self.max_backlog && self.accumulator >= self.period {
            self.accumulator %= self.period;
        }

        fired
    }

    /// Drops any accumulated time without firing.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::TickCadence;

    // ── basic firing ──────────────────────────────────────────────────────

    #[test]
    fn does_not_fire_below_period() {
        let mut c = TickCadence::per_second();
        assert_eq!(c.advance(0.4), 0);
        assert_eq!(c.advance(0.5), 0);
    }

    #[test]
    fn fires_once_when_period_crossed() {
        let mut c = TickCadence::per_second();
        assert_eq!(c.advance(0.6), 0);
        assert_eq!(c.advance(0.6), 1);
    }

    #[test]
    fn remainder_carries_over_instead_of_resetting() {
        let mut c = TickCadence::per_second();
        assert_eq!(c.advance(1.5), 1);
        // 0.5s is still banked; another 0.5s completes the next period.
        assert_eq!(c.advance(0.5), 1);
    }

    // ── floor(N) property ─────────────────────────────────────────────────

    #[test]
    fn total_ticks_equal_floor_of_elapsed_regardless_of_chunking() {
        // Several chunkings of the same 7.3 seconds.
        let chunkings: &[&[f32]] = &[
            &[1.9, 1.9, 1.9, 1.6],
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.3],
            &[0.25; 29],
            &[2.5, 2.5, 2.3],
            &[0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.1],
        ];

        for deltas in chunkings {
            let mut c = TickCadence::per_second();
            let total: u32 = deltas.iter().map(|&dt| c.advance(dt)).sum();
            assert_eq!(total, 7, "chunking {deltas:?}");
        }
    }

    #[test]
    fn tiny_quantum_deltas_fire_close_to_once_per_second() {
        // 10ms polling quantum for 10 simulated seconds.
        let mut c = TickCadence::per_second();
        let mut total = 0u32;
        for _ in 0..1000 {
            total += c.advance(0.01);
        }
        // f32 summation of 0.01 accrues rounding; allow one tick of drift.
        assert!((9..=10).contains(&total), "total = {total}");
    }

    #[test]
    fn deltas_within_the_frame_clock_clamp_stay_floor_exact() {
        // FrameClock clamps a delta to 2s, under the 3-tick backlog cap for
        // a one-second period, so no clamped delta can trigger a collapse.
        let mut c = TickCadence::per_second();
        let total: u32 = (0..5).map(|_| c.advance(2.0)).sum();
        assert_eq!(total, 10);
    }

    // ── backlog & bad input ───────────────────────────────────────────────

    #[test]
    fn stall_is_capped_and_phase_preserved() {
        let mut c = TickCadence::per_second();
        assert_eq!(c.advance(10.25), 3);
        // Excess whole periods were dropped; the 0.25 remainder survives.
        assert_eq!(c.advance(0.75), 1);
    }

    #[test]
    fn negative_and_nan_deltas_are_ignored() {
        let mut c = TickCadence::per_second();
        assert_eq!(c.advance(-5.0), 0);
        assert_eq!(c.advance(f32::NAN), 0);
        assert_eq!(c.advance(1.0), 1);
    }

    #[test]
    fn reset_drops_banked_time() {
        let mut c = TickCadence::per_second();
        c.advance(0.9);
        c.reset();
        assert_eq!(c.advance(0.9), 0);
    }
}
