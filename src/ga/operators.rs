//! Permutation-preserving genetic operators.
//!
//! Both operators map permutations to permutations, which is what keeps
//! the one-queen-per-column property intact across generations.

use rand::Rng;

/// Order Crossover (OX) for permutations.
///
/// Copies a random segment from each parent and fills the remaining
/// positions with the other parent's values in their original order,
/// skipping values the segment already contains. Preserves relative order
/// from both parents.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    (
        ox_child(parent1, parent2, start, end),
        ox_child(parent2, parent1, start, end),
    )
}

/// Builds one OX child: segment from `template`, the rest from `donor`.
fn ox_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !in_segment[v]);
    for i in (0..start).chain(end + 1..n) {
        child[i] = fill.next().expect("donor is a permutation");
    }

    child
}

/// Swaps two distinct random positions in place. No-op for fewer than two
/// genes.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    genes.swap(i, j);
}
