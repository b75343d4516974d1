/// A stream of 32-bit pseudo-random integers.
///
/// Callers reduce values with `% n` for bounded ranges. Implemented for
/// [`Lcg`] and for any `FnMut() -> u32` closure.
pub trait RandomSource {
    /// Advances the stream and returns the next value.
    fn next_u32(&mut self) -> u32;

    /// Returns `next_u32() % n`.
    ///
    /// `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "below() needs a non-empty range");
        self.next_u32() % n
    }

    /// Picks one item, or `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let len = u32::try_from(items.len()).ok()?;
        if len == 0 {
            return None;
        }
        items.get(self.below(len) as usize)
    }
}

impl<F: FnMut() -> u32> RandomSource for F {
    fn next_u32(&mut self) -> u32 {
        self()
    }
}

/// Seeded linear-congruential generator.
///
/// `state = 1664525 * state + 1013904223 (mod 2^32)`; each draw returns the
/// new state. Same seed, same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_664_525;
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Creates a generator whose first draw is derived from `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state (the last value returned, or the seed).
    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_draws_match_reference_values() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
        assert_eq!(rng.next_u32(), 3_519_870_697);
    }

    #[test]
    fn wraps_modulo_two_pow_32() {
        let mut rng = Lcg::new(u32::MAX);
        let expected = (u64::from(u32::MAX) * u64::from(Lcg::MULTIPLIER)
            + u64::from(Lcg::INCREMENT))
            % (1_u64 << 32);
        assert_eq!(u64::from(rng.next_u32()), expected);
    }

    #[test]
    fn closures_are_random_sources() {
        let mut values = [7_u32, 11].into_iter().cycle();
        let mut source = move || values.next().unwrap_or(0);
        assert_eq!(source.below(5), 2);
        assert_eq!(source.below(5), 1);
    }

    #[test]
    fn pick_handles_empty_and_non_empty() {
        let mut rng = Lcg::new(3);
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        let items = ["brick", "plaster", "wood"];
        assert!(items.contains(rng.pick(&items).unwrap()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]
        #[test]
        fn same_seed_same_stream(seed in any::<u32>()) {
            let mut a = Lcg::new(seed);
            let mut b = Lcg::new(seed);
            for _ in 0..10_000 {
                prop_assert_eq!(a.next_u32(), b.next_u32());
            }
        }
    }
}
