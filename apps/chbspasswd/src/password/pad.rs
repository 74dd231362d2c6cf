//! Pad builder — digit, special or mixed strings for the before, inside and
//! after insertion points.

use crate::password::config::PadSpec;
use crate::password::random::{choose_char, RandomSource};

/// Builds `spec.count` characters drawn independently and uniformly from the
/// pad type's alphabet. NONE always yields the empty string.
pub fn build_pad<R: RandomSource + ?Sized>(spec: &PadSpec, rng: &mut R) -> String {
    if spec.is_none() {
        return String::new();
    }

    let alphabet = spec.pad_type().alphabet();
    (0..spec.count()).map(|_| choose_char(alphabet, rng)).collect()
}
