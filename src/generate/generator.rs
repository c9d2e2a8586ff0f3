use chrono::{Days, Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of all synthesized dashboard data. Owns the random source and
/// the reference instant, so callers (and tests) can pin both.
pub struct Generator<R: Rng> {
    pub(crate) rng: R,
    pub(crate) now: NaiveDateTime,
}

// Create
impl Generator<Box<dyn RngCore>> {
    /// System clock plus either a seeded or an OS-backed random source.
    pub fn new(seed: Option<u64>) -> Self {
        let rng: Box<dyn RngCore> = match seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        Self::with_parts(rng, Local::now().naive_local())
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_parts(rng: R, now: NaiveDateTime) -> Self {
        Self { rng, now }
    }
}

// Dates
impl<R: Rng> Generator<R> {
    /// Calendar day `back` days before the reference instant, `YYYY-MM-DD`.
    pub(crate) fn day(&self, back: u32) -> String {
        let date = self.now.date() - Days::new(u64::from(back));
        date.format("%Y-%m-%d").to_string()
    }

    /// Instant `back` days before the reference instant, `YYYY-MM-DD HH:MM`.
    pub(crate) fn timestamp(&self, back: u32) -> String {
        let datetime = self.now - Days::new(u64::from(back));
        datetime.format("%Y-%m-%d %H:%M").to_string()
    }
}
