use rand::Rng;

/// Source of the per-prediction jitter sample. The engine draws exactly one
/// value per call; implementations must return a uniform value in `[0, 1)`.
pub trait JitterSource {
    fn draw(&mut self) -> f64;
}

/// Production source: fresh uniform sample from the thread RNG per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Pinned jitter for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> f64 {
        self.0
    }
}
