use crate::error::{AssemblyError, Result};

pub type Kmer = String;

/// Watson-Crick complement of a single upper-case base
#[inline]
pub fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Returns the reverse complement of a DNA sequence.
///
/// Only the four upper-case bases are accepted; anything else is reported
/// with its byte offset in the input.
pub fn reverse_complement(seq: &str) -> Result<String> {
    let mut result = String::with_capacity(seq.len());

    for (position, character) in seq.char_indices().rev() {
        match u8::try_from(character).ok().and_then(complement) {
            Some(c) => result.push(char::from(c)),
            None => return Err(AssemblyError::InvalidCharacter { character, position }),
        }
    }

    Ok(result)
}

/// Overlapping (source, target) k-mer pairs of a sequence.
///
/// Consecutive windows share k-1 bases. A sequence of length `k` or shorter
/// yields nothing.
pub fn kmer_pairs(seq: &str, k: usize) -> impl Iterator<Item = (&str, &str)> {
    let n = if k == 0 { 0 } else { seq.len().saturating_sub(k) };
    (0..n).map(move |i| (&seq[i..i + k], &seq[i + 1..i + 1 + k]))
}
