//! Linear time suffix array construction with the DC3 ("skew") algorithm.
//!
//! Positions split into class 0 (`i % 3 == 0`) and class 12 (`i % 3 != 0`). Class 12 suffixes
//! are sorted by their leading triples with three radix passes, named, and if the names are not
//! unique the name string is sorted recursively. Class 0 suffixes are then sorted from their
//! first symbol and the rank of their class 12 successor, and the two lists are merged.
//!
//! The text must be followed by three padding slots holding the alphabet minimum, so triples
//! read at the end of the text never leave the buffer.

use log::{debug, trace};

use super::radix::{radix_pass, Alphabet};
use crate::error::{Error, Result};

/// Longest text the builder accepts. Names and ranks are stored as i32.
pub const MAX_TEXT_LEN: usize = i32::MAX as usize - 4;

/// Alphabet of a byte text: bytes, the terminator and the padding.
pub const BYTE_ALPHABET: Alphabet = Alphabet::new(256, 2);

/// Counter slots allowed beyond the text length. Sparse alphabets up to this size are accepted
/// for any text.
pub const MAX_EXTRA_SLOTS: usize = 1 << 16;

/// Terminator appended to a byte text. Smaller than every byte, larger than the padding.
const TERMINATOR: i32 = -1;

/// Suffix array of the first `len` symbols of `text`, which must be followed by three
/// padding symbols equal to `alphabet.min()`. Every real symbol must lie above the padding and
/// no higher than `alphabet.max()`.
pub fn suffix_array(text: &[i32], len: usize, alphabet: Alphabet) -> Result<Vec<usize>> {
    validate(text, len, alphabet)?;
    let mut sa = vec![0_usize; len];
    skew(text, &mut sa, len, alphabet);
    debug!("Built suffix array of {} suffixes.", len);
    Ok(sa)
}

/// Suffix array of `data` followed by a terminator that sorts before every byte. The result
/// has `data.len() + 1` entries and starts with the terminator's own suffix, `data.len()`.
pub fn byte_suffix_array(data: &[u8]) -> Result<Vec<usize>> {
    if data.len() > MAX_TEXT_LEN - 1 {
        return Err(Error::InputTooLarge {
            len: data.len(),
            max: MAX_TEXT_LEN - 1,
        });
    }
    let pad = BYTE_ALPHABET.min();
    let mut text: Vec<i32> = Vec::with_capacity(data.len() + 4);
    text.extend(data.iter().map(|&b| b as i32));
    text.push(TERMINATOR);
    text.extend([pad; 3]);

    let sa = suffix_array(&text, data.len() + 1, BYTE_ALPHABET)?;
    if sa.len() <= 64 {
        trace!("Suffix array: {:?}", sa);
    }
    Ok(sa)
}

/// Check the caller's side of the contract before running the recursion.
fn validate(text: &[i32], len: usize, alphabet: Alphabet) -> Result<()> {
    if len > MAX_TEXT_LEN {
        return Err(Error::InputTooLarge {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    let limit = len.saturating_add(MAX_EXTRA_SLOTS);
    let slots = alphabet
        .size
        .checked_add(alphabet.offset)
        .and_then(|s| s.checked_add(1));
    if alphabet.size > i32::MAX as usize
        || alphabet.offset > i32::MAX as usize
        || slots.map_or(true, |s| s > limit)
    {
        return Err(Error::AlphabetTooLarge {
            size: alphabet.size,
            offset: alphabet.offset,
            len,
        });
    }
    let pad = alphabet.min();
    match text.get(len..len + 3) {
        Some(padding) if padding.iter().all(|&s| s == pad) => {}
        _ => return Err(Error::MissingPadding { len }),
    }
    if let Some((position, &symbol)) = text[..len]
        .iter()
        .enumerate()
        .find(|&(_, &s)| s <= pad || s > alphabet.max())
    {
        return Err(Error::SymbolOutOfRange {
            symbol,
            position,
            min: pad + 1,
            max: alphabet.max(),
        });
    }
    Ok(())
}

#[inline(always)]
fn leq_pair(a: (i32, i32), b: (i32, i32)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && a.1 <= b.1)
}

#[inline(always)]
fn leq_triple(a: (i32, i32, i32), b: (i32, i32, i32)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && leq_pair((a.1, a.2), (b.1, b.2)))
}

/// DC3 over `s[..len]`, writing the suffix array into `sa[..len]`.
fn skew(s: &[i32], sa: &mut [usize], len: usize, alphabet: Alphabet) {
    if len == 0 {
        return;
    }
    let n0 = (len + 2) / 3;
    let n1 = (len + 1) / 3;
    let n2 = len / 3;
    let n02 = n0 + n2;
    let pad = alphabet.min();

    // Class 12 start positions. When n0 > n1 this includes the dummy position `len`, whose
    // triple is all padding.
    let mut pos12: Vec<usize> = (0..len + (n0 - n1)).filter(|i| i % 3 != 0).collect();
    let mut sa12 = vec![0_usize; n02];

    // Sort the triples: least significant symbol first, so the first symbol ends up primary.
    radix_pass(&pos12, &mut sa12, s, 2, alphabet);
    radix_pass(&sa12, &mut pos12, s, 1, alphabet);
    radix_pass(&pos12, &mut sa12, s, 0, alphabet);

    // Name the triples in sorted order. Class 1 names fill the front half of s12, class 2
    // names the back half.
    let mut s12 = vec![pad; n02 + 3];
    let mut name = 0_i32;
    let mut last: Option<(i32, i32, i32)> = None;
    for &p in &sa12 {
        let triple = (s[p], s[p + 1], s[p + 2]);
        if last != Some(triple) {
            name += 1;
            last = Some(triple);
        }
        if p % 3 == 1 {
            s12[p / 3] = name;
        } else {
            s12[p / 3 + n0] = name;
        }
    }
    trace!("Skew level of {} suffixes: {} names for {} triples.", len, name, n02);

    if (name as usize) < n02 {
        // Names collide: sort the name string, then turn its suffix array into ranks.
        skew(&s12, &mut sa12, n02, Alphabet::new(name as usize, alphabet.offset));
        for (i, &p) in sa12.iter().enumerate() {
            s12[p] = i as i32 + 1;
        }
    } else {
        // Names are already ranks.
        for (i, &rank) in s12[..n02].iter().enumerate() {
            sa12[(rank - 1) as usize] = i;
        }
    }

    // Class 0 suffixes, pre-ordered by the rank of their successor, then sorted by first symbol.
    let s0: Vec<usize> = sa12.iter().filter(|&&p| p < n0).map(|&p| 3 * p).collect();
    let mut sa0 = vec![0_usize; n0];
    radix_pass(&s0, &mut sa0, s, 0, alphabet);

    // Merge. Position of the class 12 suffix at sa12[t]:
    let suffix12 = |t: usize| -> usize {
        if sa12[t] < n0 {
            sa12[t] * 3 + 1
        } else {
            (sa12[t] - n0) * 3 + 2
        }
    };
    let mut p = 0;
    let mut t = n0 - n1; // skip the dummy
    let mut k = 0;
    while k < len {
        if t == n02 {
            // Class 12 exhausted, the rest is class 0
            for (dst, &src) in sa[k..len].iter_mut().zip(&sa0[p..]) {
                *dst = src;
            }
            break;
        }
        if p == n0 {
            // Class 0 exhausted, the rest is class 12
            for (dst, t) in sa[k..len].iter_mut().zip(t..n02) {
                *dst = suffix12(t);
            }
            break;
        }

        let i = suffix12(t);
        let j = sa0[p];
        let class12_first = if sa12[t] < n0 {
            // i is class 1: one symbol then the rank of class 2 suffix i + 1
            leq_pair((s[i], s12[sa12[t] + n0]), (s[j], s12[j / 3]))
        } else {
            // i is class 2: two symbols then the rank of class 1 suffix i + 2
            leq_triple(
                (s[i], s[i + 1], s12[sa12[t] - n0 + 1]),
                (s[j], s[j + 1], s12[j / 3 + n0]),
            )
        };
        if class12_first {
            sa[k] = i;
            t += 1;
        } else {
            sa[k] = j;
            p += 1;
        }
        k += 1;
    }
}
