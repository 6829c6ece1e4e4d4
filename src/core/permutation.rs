use std::io::Read;

use rand::{seq::SliceRandom, Rng};

use crate::{structs::Deque, utils::*};

/// Reads every whitespace-separated token from `reader`.
///
/// Invalid UTF-8 is replaced with U+FFFD instead of failing the read.
pub fn read_tokens(mut reader: impl Read) -> Result<Vec<String>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    let tokens: Vec<String> = String::from_utf8_lossy(&buf)
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    debug!("Read {} tokens", tokens.len());
    Ok(tokens)
}

/// Picks `k` of `tokens` in random order.
///
/// The index range is shuffled once and the first `k` picks are pushed to
/// the front of a deque; iterating the returned deque gives the output order.
pub fn sample_permutation<R: Rng + ?Sized>(
    tokens: &[String],
    k: usize,
    rng: &mut R,
) -> Result<Deque<String>> {
    let n = tokens.len();
    if k > n {
        return Err(CollectionError::InvalidCount { k, n });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let mut permutation = Deque::new();
    for &index in &indices[..k] {
        permutation.add_first(tokens[index].clone());
    }

    debug!("Selected {} of {} tokens", k, n);
    Ok(permutation)
}
