//! Cooperative timer scheduler
//!
//! Three named timers share one clock. The driver reads the clock once per
//! outer iteration and drains due timers one at a time in fire order, so no
//! two handlers ever overlap.

use crate::consts::{FRAME_PERIOD_MS, MAX_CATCH_UP_MS, SCORE_PERIOD_MS};

/// Named timers, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Physics, obstacle motion, collision (~60 Hz)
    Frame,
    /// One-shot obstacle spawn, re-armed with a fresh random delay
    Spawn,
    /// Score increment (every 100 ms)
    Score,
}

impl TimerId {
    pub const ALL: [TimerId; 3] = [TimerId::Frame, TimerId::Spawn, TimerId::Score];

    fn index(self) -> usize {
        match self {
            TimerId::Frame => 0,
            TimerId::Spawn => 1,
            TimerId::Score => 2,
        }
    }

    /// Fixed period, or None for one-shot timers
    fn period(self) -> Option<f64> {
        match self {
            TimerId::Frame => Some(FRAME_PERIOD_MS),
            TimerId::Spawn => None,
            TimerId::Score => Some(SCORE_PERIOD_MS),
        }
    }
}

/// Next-fire times for each timer (ms on the driver's monotonic clock)
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    next_fire: [Option<f64>; 3],
    last_now: Option<f64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm every timer relative to `now`
    pub fn arm(&mut self, now: f64, spawn_delay: f64) {
        self.next_fire = [
            Some(now + FRAME_PERIOD_MS),
            Some(now + spawn_delay),
            Some(now + SCORE_PERIOD_MS),
        ];
        self.last_now = Some(now);
    }

    /// Cancel every timer
    pub fn cancel(&mut self) {
        self.next_fire = [None; 3];
        self.last_now = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.iter().any(Option::is_some)
    }

    pub fn next_fire(&self, id: TimerId) -> Option<f64> {
        self.next_fire[id.index()]
    }

    /// Arm a single timer at an absolute time
    pub fn schedule(&mut self, id: TimerId, at: f64) {
        self.next_fire[id.index()] = Some(at);
    }

    /// Record a clock reading. A gap longer than [`MAX_CATCH_UP_MS`] is
    /// treated as a stall: timers slide forward instead of replaying it.
    pub fn observe(&mut self, now: f64) {
        if let Some(last) = self.last_now {
            let gap = now - last;
            if gap > MAX_CATCH_UP_MS {
                let shift = gap - MAX_CATCH_UP_MS;
                log::debug!("Clock jumped {:.0} ms, skipping {:.0} ms", gap, shift);
                for at in self.next_fire.iter_mut().flatten() {
                    *at += shift;
                }
            }
        }
        if self.is_armed() {
            self.last_now = Some(now);
        }
    }

    /// Take the earliest timer due at or before `now`.
    ///
    /// Periodic timers are re-armed one period after their scheduled time;
    /// one-shot timers are disarmed and must be re-scheduled by the caller.
    /// Returns the timer and the time it was scheduled for.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerId, f64)> {
        let (id, at) = TimerId::ALL
            .iter()
            .filter_map(|&id| self.next_fire(id).map(|at| (id, at)))
            .filter(|&(_, at)| at <= now)
            .min_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.0.index().cmp(&b.0.index()))
            })?;

        self.next_fire[id.index()] = id.period().map(|period| at + period);
        Some((id, at))
    }
}
