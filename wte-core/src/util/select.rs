use rand::{seq::SliceRandom, Rng};

/// Picks a single element uniformly at random.
///
/// Returns `None` if there is nothing to choose from.
pub fn pick_one<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
