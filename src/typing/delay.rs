//! Keystroke delay heuristic
//!
//! Every character gets a base delay drawn from the range of its class, and
//! one keystroke in twenty is followed by an extra "thinking" pause.

use std::ops::Range;
use std::time::Duration;

/// Chance that a keystroke is followed by a long pause
pub const PAUSE_PROBABILITY: f64 = 0.05;

/// Extra pause added on top of the base delay, in milliseconds
pub const PAUSE_RANGE_MS: Range<f64> = 200.0..500.0;

/// Uniform random fractions in `[0, 1)`.
///
/// Implemented for every [`rand::Rng`]; tests can supply a scripted sequence
/// instead.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_fraction(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Delay class of a typed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Newline,
    Tab,
    Space,
    Alphanumeric,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\n' => CharClass::Newline,
            '\t' => CharClass::Tab,
            ' ' => CharClass::Space,
            c if c.is_ascii_alphanumeric() => CharClass::Alphanumeric,
            _ => CharClass::Other,
        }
    }

    /// Base delay range in milliseconds
    pub fn base_range_ms(self) -> Range<f64> {
        match self {
            CharClass::Newline => 100.0..200.0,
            CharClass::Tab => 30.0..70.0,
            CharClass::Space => 40.0..80.0,
            CharClass::Alphanumeric => 50.0..130.0,
            CharClass::Other => 80.0..200.0,
        }
    }
}

/// A computed keystroke delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keystroke {
    pub class: CharClass,
    pub base_ms: f64,
    pub pause_ms: Option<f64>,
}

impl Keystroke {
    pub fn total_ms(&self) -> f64 {
        self.base_ms + self.pause_ms.unwrap_or(0.0)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_nanos((self.total_ms() * 1_000_000.0).round() as u64)
    }
}

/// Maps a typed character to how long to wait before the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayPolicy;

impl DelayPolicy {
    /// Draw the delay for `c`.
    ///
    /// Consumes one fraction for the base delay and one for the pause coin,
    /// plus a third for the pause length when the coin lands.
    pub fn keystroke<R: RandomSource + ?Sized>(&self, c: char, rng: &mut R) -> Keystroke {
        let class = CharClass::of(c);
        let base_ms = scale(class.base_range_ms(), rng.next_fraction());
        let pause_ms = (rng.next_fraction() < PAUSE_PROBABILITY)
            .then(|| scale(PAUSE_RANGE_MS, rng.next_fraction()));
        Keystroke {
            class,
            base_ms,
            pause_ms,
        }
    }

    pub fn delay_for<R: RandomSource + ?Sized>(&self, c: char, rng: &mut R) -> Duration {
        self.keystroke(c, rng).duration()
    }
}

fn scale(range: Range<f64>, fraction: f64) -> f64 {
    let fraction = fraction.clamp(0.0, 1.0);
    let value = range.start + fraction * (range.end - range.start);
    // Rounding can land a fraction just under 1.0 on the excluded upper bound.
    value.min(range.end - range.end * f64::EPSILON)
}
