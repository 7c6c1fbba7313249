use std::time::{Duration, Instant};

//
// ─── FACES ─────────────────────────────────────────────────────────────────────
//

/// Rotation of a card showing its question.
pub const FRONT_DEGREES: f32 = 0.0;
/// Rotation of a card showing its answer.
pub const BACK_DEGREES: f32 = 180.0;
/// Rotation at which the visible face switches from question to answer.
pub const FACE_SWITCH_DEGREES: f32 = 90.0;
/// Default duration of a single flip.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(500);

/// Which side of a card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Question,
    Answer,
}

/// Selects the visible face for a rotation in degrees.
///
/// The question is shown below 90°, the answer from 90° up. Callers pass the
/// animated value, never the tap target, so the face changes halfway through
/// the turn.
///
/// # Examples
///
/// ```
/// # use flashdeck_core::flip::{Face, face_for_progress};
/// assert_eq!(face_for_progress(89.999), Face::Question);
/// assert_eq!(face_for_progress(90.0), Face::Answer);
/// ```
#[must_use]
pub fn face_for_progress(degrees: f32) -> Face {
    if degrees < FACE_SWITCH_DEGREES {
        Face::Question
    } else {
        Face::Answer
    }
}

/// Coarse state of a card's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Front,
    Transitioning,
    Back,
}

impl FlipPhase {
    #[must_use]
    pub fn from_progress(degrees: f32) -> Self {
        if degrees <= FRONT_DEGREES {
            Self::Front
        } else if degrees >= BACK_DEGREES {
            Self::Back
        } else {
            Self::Transitioning
        }
    }
}

//
// ─── EASING ────────────────────────────────────────────────────────────────────
//

/// Interpolation curve applied to the flip animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Cubic Bézier (0.4, 0.0, 0.2, 1.0): quick start, gentle landing.
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Maps linear time in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let curve = |p1: f32, p2: f32, t: f32| {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    };
    let slope = |p1: f32, p2: f32, t: f32| {
        let inv = 1.0 - t;
        3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    };

    // Newton first, bisection if the slope gets too flat.
    let mut t = x;
    for _ in 0..8 {
        let err = curve(x1, x2, t) - x;
        if err.abs() < 1e-6 {
            return curve(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = curve(x1, x2, t);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    curve(y1, y2, t)
}

//
// ─── FLIP STATE ────────────────────────────────────────────────────────────────
//

/// Per-card flip animation.
///
/// Holds a tap target (`is_flipped`) and the single animated rotation that
/// both the renderer and [`face_for_progress`] read. Time is passed in by the
/// caller so frames and tests stay deterministic.
///
/// # Examples
///
/// ```
/// # use std::time::{Duration, Instant};
/// # use flashdeck_core::flip::{Face, FlipState};
/// let start = Instant::now();
/// let mut flip = FlipState::default();
/// flip.toggle(start);
///
/// assert_eq!(flip.face_at(start), Face::Question);
/// assert_eq!(flip.face_at(start + Duration::from_millis(500)), Face::Answer);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlipState {
    flipped: bool,
    from: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for FlipState {
    fn default() -> Self {
        Self::new(DEFAULT_FLIP_DURATION)
    }
}

impl FlipState {
    /// A card at rest on its question side.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            flipped: false,
            from: FRONT_DEGREES,
            started_at: None,
            duration,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Endpoint the card is heading to.
    #[must_use]
    pub fn target_degrees(&self) -> f32 {
        if self.flipped {
            BACK_DEGREES
        } else {
            FRONT_DEGREES
        }
    }

    /// Rotation in degrees at `now`, always within `[0, 180]`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        let target = self.target_degrees();
        let Some(started_at) = self.started_at else {
            return target;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return target;
        }
        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(fraction);
        (self.from + (target - self.from) * eased).clamp(FRONT_DEGREES, BACK_DEGREES)
    }

    #[must_use]
    pub fn face_at(&self, now: Instant) -> Face {
        face_for_progress(self.progress_at(now))
    }

    #[must_use]
    pub fn phase_at(&self, now: Instant) -> FlipPhase {
        FlipPhase::from_progress(self.progress_at(now))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }

    /// Handles a tap: flips the target and animates toward it from wherever
    /// the card currently is.
    ///
    /// A tap during a running flip reverses it from the in-flight rotation.
    pub fn toggle(&mut self, now: Instant) {
        let current = self.progress_at(now);
        self.flipped = !self.flipped;
        self.from = current;
        self.started_at = Some(now);
    }

    /// Drops the animation bookkeeping once the flip has finished.
    pub fn settle(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_animating(now) {
            self.from = self.target_degrees();
            self.started_at = None;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
