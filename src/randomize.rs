use std::collections::HashMap;

use rand::Rng;

/// One independent draw from `[0.0, 1.0)` per label.
pub fn randomize<R: Rng + ?Sized>(labels: &[String], rng: &mut R) -> HashMap<String, f64> {
    labels
        .iter()
        .map(|label| (label.clone(), rng.gen_range(0.0..1.0)))
        .collect()
}
