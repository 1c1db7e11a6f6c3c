//! Time-driven text and list effects: the home page tagline typewriter and
//! the staggered entrance of list entries. Both are advanced by the caller's
//! clock so they can be tested without sleeping.

use std::time::{Duration, Instant};

pub const TYPE_STEP: Duration = Duration::from_millis(60);
pub const DELETE_STEP: Duration = Duration::from_millis(30);
pub const HOLD: Duration = Duration::from_millis(2000);

pub const PROJECT_STAGGER: Duration = Duration::from_millis(100);
pub const SKILL_STAGGER: Duration = Duration::from_millis(80);
pub const EXPERIENCE_STAGGER: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Typing,
    Holding,
    Deleting,
}

/// Types each tagline out, holds it, deletes it and moves on, forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    taglines: Vec<String>,
    index: usize,
    shown: usize,
    stroke: Stroke,
    carry: Duration,
}

impl Typewriter {
    pub fn new(taglines: Vec<String>) -> Self {
        Self {
            taglines,
            index: 0,
            shown: 0,
            stroke: Stroke::Typing,
            carry: Duration::ZERO,
        }
    }

    fn current_len(&self) -> usize {
        self.taglines
            .get(self.index)
            .map(|t| t.chars().count())
            .unwrap_or(0)
    }

    fn step(&self) -> Duration {
        match self.stroke {
            Stroke::Typing => TYPE_STEP,
            Stroke::Holding => HOLD,
            Stroke::Deleting => DELETE_STEP,
        }
    }

    /// Feed `elapsed` wall time into the animation.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.taglines.is_empty() {
            return;
        }
        self.carry += elapsed;
        while self.carry >= self.step() {
            self.carry -= self.step();
            match self.stroke {
                Stroke::Typing => {
                    self.shown += 1;
                    if self.shown >= self.current_len() {
                        self.shown = self.current_len();
                        self.stroke = Stroke::Holding;
                    }
                }
                Stroke::Holding => self.stroke = Stroke::Deleting,
                Stroke::Deleting => {
                    self.shown = self.shown.saturating_sub(1);
                    if self.shown == 0 {
                        self.index = (self.index + 1) % self.taglines.len();
                        self.stroke = Stroke::Typing;
                    }
                }
            }
        }
    }

    /// Text currently on screen
    pub fn visible(&self) -> &str {
        let Some(tagline) = self.taglines.get(self.index) else {
            return "";
        };
        match tagline.char_indices().nth(self.shown) {
            Some((end, _)) => &tagline[..end],
            None => tagline,
        }
    }

    pub fn tagline_index(&self) -> usize {
        self.index
    }
}

/// Staggered entrance: entry `i` appears `i * stagger` after the list was
/// (re)started. A new filter or a different list length restarts it.
#[derive(Debug, Clone)]
pub struct Reveal {
    stagger: Duration,
    started: Option<Instant>,
    key: Option<(String, usize)>,
}

impl Reveal {
    pub fn new(stagger: Duration) -> Self {
        Self {
            stagger,
            started: None,
            key: None,
        }
    }

    /// Restart when `(filter, len)` differs from the last call. Returns
    /// whether a restart happened.
    pub fn track(&mut self, filter: &str, len: usize, now: Instant) -> bool {
        let key = (filter.to_string(), len);
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        self.key = Some(key);
        self.started = Some(now);
        true
    }

    /// How many of `total` entries are visible at `now`
    pub fn visible(&self, total: usize, now: Instant) -> usize {
        let Some(started) = self.started else {
            return 0;
        };
        if total == 0 {
            return 0;
        }
        let elapsed = now.saturating_duration_since(started);
        let shown = if self.stagger.is_zero() {
            total
        } else {
            1 + (elapsed.as_millis() / self.stagger.as_millis()) as usize
        };
        shown.min(total)
    }

    pub fn is_settled(&self, total: usize, now: Instant) -> bool {
        self.visible(total, now) >= total
    }
}
