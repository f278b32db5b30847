//! RNG module - injectable random source for track generation
//!
//! Track generation never reaches for a global RNG; callers hand in anything that
//! implements [`TrackRng`]. [`SimpleRng`] is the default deterministic source.

/// Random source consumed by [`crate::Track::generate`].
pub trait TrackRng {
    /// Generate the next random u32
    fn next_u32(&mut self) -> u32;

    /// Fair coin flip.
    ///
    /// Uses the high bit: the low bits of an LCG cycle with a short period.
    fn coin_flip(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

impl<R: TrackRng + ?Sized> TrackRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; feeding it back into [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TrackRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
