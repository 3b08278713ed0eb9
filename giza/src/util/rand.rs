//! The mulberry32 pseudo-random number generator.
//!
//! PARITY: Every generation decision of the world goes through this stream, so the exact
//! bit sequence matters. All arithmetic is done on wrapping 32-bit unsigned integers.


const INCREMENT: u32 = 0x6D2B79F5;

const FLOAT_DIV: f64 = 4294967296.0;


/// A mulberry32 generator, its whole state is a single 32-bit accumulator. The state is
/// owned by whoever drives the generation and threaded by mutable reference through
/// every generator, there is no global stream. Not `Copy`, a fork of the stream must be
/// an explicit clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {

    /// Create a new generator from the given seed, negative seeds keep their two's
    /// complement bit pattern.
    #[inline]
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    /// Get the current accumulator.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Get the next pseudo-random 32-bit unsigned integer.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Get the next pseudo-random double-precision float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / FLOAT_DIV
    }

    /// Pure form of [`Self::next_f64`], the generator is consumed and the advanced one
    /// is returned along with the drawn value.
    #[inline]
    pub fn step(mut self) -> (f64, Self) {
        let value = self.next_f64();
        (value, self)
    }

    /// Get the next pseudo-random integer in `[0, bound)`, computed as the floor of a
    /// float draw scaled by the bound. Exactly one value is drawn.
    #[inline]
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        (self.next_f64() * bound as f64).floor() as i32
    }

}
