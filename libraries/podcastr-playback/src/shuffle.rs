//! Random episode selection for shuffled navigation
//!
//! Shuffle here is a stateless pick, not a reordering of the playlist: every
//! call draws uniformly over the whole list, so the current episode can come
//! up again.

use rand::Rng;

/// Uniformly random index in `[0, len)`, or `None` for an empty list
pub fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}
