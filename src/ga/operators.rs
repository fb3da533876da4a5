//! Genetic operators for the two genome encodings.
//!
//! # Bit operators (`i32` genomes)
//!
//! The genome is treated as a raw 32-bit two's-complement pattern. All
//! shifting and masking happens on `u32`; conversion to `i32` happens only
//! at the function boundary.
//!
//! - [`bit_crossover`]: single-point crossover on the bit pattern
//! - [`bit_flip`]: toggle one random bit
//! - [`gene_replace`]: sign-dependent truncation around a random bit
//!
//! # Permutation operators (`[usize]` genomes)
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985) — preserves absolute position
//! - [`swap_mutation`]: exchange two random positions — O(1)
//!
//! Every random operator has a deterministic `*_at` counterpart taking the
//! drawn positions explicitly.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::RandomSource;

/// Width of a scalar genome in bits.
pub const GENOME_BITS: u32 = i32::BITS;

/// Number of extreme bits on each side never chosen as a crossover split.
pub const CROSSOVER_MARGIN: u32 = 4;

// ============================================================================
// Bit operators
// ============================================================================

/// Single-point crossover on the bit patterns of `a` and `b`.
///
/// The split `k` is drawn from `[4, 28]`, keeping the extreme bits out of
/// play so both children differ from their parents.
pub fn bit_crossover<R: RandomSource>(a: i32, b: i32, rng: &mut R) -> (i32, i32) {
    let split = rng.next_index(
        CROSSOVER_MARGIN as usize,
        (GENOME_BITS - CROSSOVER_MARGIN) as usize,
    ) as u32;
    crossover_bits_at(a, b, split)
}

/// Single-point crossover at a fixed split.
///
/// Child 1 takes the bits of `a` at and above `split` and the bits of `b`
/// below it; child 2 takes the complementary bits. `split` may range over
/// `0..=32`.
pub fn crossover_bits_at(a: i32, b: i32, split: u32) -> (i32, i32) {
    let (a, b) = (a as u32, b as u32);
    let high = high_mask(split);
    let low = !high;
    (((a & high) | (b & low)) as i32, ((b & high) | (a & low)) as i32)
}

/// Toggles one uniformly chosen bit.
pub fn bit_flip<R: RandomSource>(value: i32, rng: &mut R) -> i32 {
    let index = rng.next_index(0, (GENOME_BITS - 1) as usize) as u32;
    flip_bit_at(value, index)
}

/// Toggles bit `index` (0 is the least significant).
pub fn flip_bit_at(value: i32, index: u32) -> i32 {
    ((value as u32) ^ (1u32 << index)) as i32
}

/// Truncates the genome around a random index in `[1, 30]`.
pub fn gene_replace<R: RandomSource>(value: i32, rng: &mut R) -> i32 {
    let index = rng.next_index(1, (GENOME_BITS - 2) as usize) as u32;
    gene_replace_at(value, index)
}

/// Truncates the genome around `index`.
///
/// - Non-negative values keep their low `index` bits; bits at or above
///   `index` are cleared, so the result stays non-negative.
/// - Negative values keep their high `index` bits (the sign bit among them)
///   and clear the low `32 - index` bits, so the result stays negative.
pub fn gene_replace_at(value: i32, index: u32) -> i32 {
    let bits = value as u32;
    let kept = if value >= 0 {
        bits & !high_mask(index)
    } else {
        bits & !(u32::MAX.checked_shr(index).unwrap_or(0))
    };
    kept as i32
}

/// Mask with every bit at or above `split` set.
fn high_mask(split: u32) -> u32 {
    u32::MAX.checked_shl(split).unwrap_or(0)
}

// ============================================================================
// Permutation operators
// ============================================================================

/// Partially Mapped Crossover (PMX) for permutations.
///
/// Draws `i1` from `[0, n/2 - 1]` and `i2` from `[n/2, n - 1]`, then
/// delegates to [`pmx_crossover_at`].
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 elements.
pub fn pmx_crossover<R: RandomSource>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "parents must have at least 2 elements");

    let i1 = rng.next_index(0, n / 2 - 1);
    let i2 = rng.next_index(n / 2, n - 1);
    pmx_crossover_at(parent1, parent2, i1, i2)
}

/// PMX with a fixed mapped region `[i1, i2]`.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Child 1 takes parent2's segment, child 2 takes parent1's segment
/// 2. Each swapped pair defines a mapping between the two segment values
/// 3. Outside the segment each child inherits its own parent's value, or,
///    when that value already sits in the segment, follows the mapping chain
///    until it reaches a value that does not
///
/// # Complexity
/// O(n) space, O(n + k²) time for a segment of length k
///
/// # Panics
/// Panics if parents have different lengths, `i1 > i2`, or `i2 >= n`.
pub fn pmx_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    i1: usize,
    i2: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(i1 <= i2 && i2 < n, "invalid segment [{i1}, {i2}] for length {n}");

    let child1 = pmx_build_child(parent1, parent2, i1, i2);
    let child2 = pmx_build_child(parent2, parent1, i1, i2);
    (child1, child2)
}

/// Build one PMX child: segment from `donor`, remainder legalized from `own`.
fn pmx_build_child(own: &[usize], donor: &[usize], i1: usize, i2: usize) -> Vec<usize> {
    let n = own.len();
    // mapping[v] = value that replaces `v` when `v` is already in the segment.
    let mut mapping: Vec<Option<usize>> = vec![None; n];
    for i in i1..=i2 {
        if donor[i] != own[i] {
            mapping[donor[i]] = Some(own[i]);
        }
    }

    let mut child = own.to_vec();
    child[i1..=i2].copy_from_slice(&donor[i1..=i2]);

    for (i, slot) in child.iter_mut().enumerate() {
        if (i1..=i2).contains(&i) {
            continue;
        }
        let mut value = own[i];
        while let Some(next) = mapping[value] {
            value = next;
        }
        *slot = value;
    }

    child
}

/// Swap mutation: exchange two independently drawn positions.
///
/// The positions may coincide, leaving the permutation unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: RandomSource>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.next_index(0, n - 1);
    let j = rng.next_index(0, n - 1);
    perm.swap(i, j);
}

/// Builds a random permutation of `0..n` by `n` random swaps of the identity.
pub fn random_permutation<R: RandomSource>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for _ in 0..n {
        swap_mutation(&mut perm, rng);
    }
    perm
}

/// Check that a slice is a valid permutation of `0..perm.len()`.
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &v in perm {
        if v >= seen.len() || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
