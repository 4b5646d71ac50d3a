use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `UniformSource`, so a seeded generator such as
/// `StdRng::seed_from_u64` makes an experiment reproducible.
pub trait UniformSource {
    /// A uniform sample from `low..high`. Requires `low < high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}
