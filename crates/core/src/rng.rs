//! Seedable linear congruential generator used for question and choice generation.
//!
//! The constants are the classic Numerical Recipes pair; every draw is a pure
//! function of the previous state, so a seed plus a draw count fully
//! determines the output.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Anything that yields uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn draw(&mut self) -> f64;
}

impl<F> UnitSource for F
where
    F: FnMut() -> f64,
{
    fn draw(&mut self) -> f64 {
        self()
    }
}

/// 32-bit LCG: `s = (1664525 * s + 1013904223) mod 2^32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from a wider integer, keeping only the low 32 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_wide_seed(seed: u64) -> Self {
        Self::new(seed as u32)
    }

    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}

impl UnitSource for Lcg {
    fn draw(&mut self) -> f64 {
        self.next_unit()
    }
}

/// Returns a draw closure over a fresh generator seeded with `seed`.
pub fn make_generator(seed: u32) -> impl FnMut() -> f64 {
    let mut lcg = Lcg::new(seed);
    move || lcg.next_unit()
}

/// `floor(draw * n)` for a draw in `[0, 1)`, i.e. an index in `0..n`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_index(draw: f64, n: u32) -> u32 {
    let scaled = (draw * f64::from(n)).floor() as u32;
    scaled.min(n.saturating_sub(1))
}
