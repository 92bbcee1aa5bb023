use log::debug;

use super::symbols::{BWT_SENTINEL, SENTINEL_RANK};
use crate::error::{Error, Result};

/// Recency list seed: the ASCII block 96..128 first, then 64..96, 32..64, 0..32, and the high
/// half in order. Lower case text starts out with small ranks.
pub const BLOCK_SEED: [u8; 256] = block_seed();

/// Recency list seed holding the byte values in ascending order.
pub const IDENTITY_SEED: [u8; 256] = identity_seed();

const fn block_seed() -> [u8; 256] {
    let mut seed = [0_u8; 256];
    let mut i = 0;
    while i < 256 {
        let sym = match i {
            0..=31 => i + 96,
            32..=63 => i + 32,
            64..=95 => i - 32,
            96..=127 => i - 96,
            _ => i,
        };
        seed[i] = sym as u8;
        i += 1;
    }
    seed
}

const fn identity_seed() -> [u8; 256] {
    let mut seed = [0_u8; 256];
    let mut i = 0;
    while i < 256 {
        seed[i] = i as u8;
        i += 1;
    }
    seed
}

/// Check that `seed` holds every byte value exactly once.
pub fn check_seed(seed: &[u8; 256]) -> Result<()> {
    let mut seen = [false; 256];
    seed.iter().for_each(|&b| seen[b as usize] = true);
    match seen.iter().position(|&s| !s) {
        Some(missing) => Err(Error::InvalidSeed {
            missing: missing as u8,
        }),
        None => Ok(()),
    }
}

/// Move the entry at `idx` to the front, shifting everything in front of it back one slot.
#[inline]
fn move_to_front(index: &mut [u8; 256], mut idx: usize) {
    let temp_sym = index[idx];

    // Shift in blocks of 8 for speed, then 4...
    while idx > 7 {
        index[idx] = index[idx - 1];
        index[idx - 1] = index[idx - 2];
        index[idx - 2] = index[idx - 3];
        index[idx - 3] = index[idx - 4];
        index[idx - 4] = index[idx - 5];
        index[idx - 5] = index[idx - 6];
        index[idx - 6] = index[idx - 7];
        index[idx - 7] = index[idx - 8];
        idx -= 8;
    }
    while idx > 3 {
        index[idx] = index[idx - 1];
        index[idx - 1] = index[idx - 2];
        index[idx - 2] = index[idx - 3];
        index[idx - 3] = index[idx - 4];
        idx -= 4;
    }
    // ...then clean up any odd ones
    while idx > 0 {
        index[idx] = index[idx - 1];
        idx -= 1;
    }
    // ...and finally put the symbol at the front of the index.
    index[0] = temp_sym;
}

/// Encode BWT symbols using the Move To Front transform, starting from `seed`.
/// The sentinel is emitted as SENTINEL_RANK and leaves the recency list alone.
pub fn mtf_encode(bwt: &[u16], seed: &[u8; 256]) -> Result<Vec<u16>> {
    check_seed(seed)?;
    let mut index = *seed;
    let mut ranks = Vec::with_capacity(bwt.len());

    for (position, &sym) in bwt.iter().enumerate() {
        if sym == BWT_SENTINEL {
            ranks.push(SENTINEL_RANK);
            continue;
        }
        if sym > 255 {
            return Err(Error::InvalidBwtSymbol {
                symbol: sym,
                position,
            });
        }
        let byte = sym as u8;
        // The list stays a permutation of 0-255, so every byte is found
        let idx = index
            .iter()
            .position(|&c| c == byte)
            .ok_or(Error::InvalidSeed { missing: byte })?;
        ranks.push(idx as u16);
        move_to_front(&mut index, idx);
    }
    debug!(
        "MTF encoded {} symbols, {} zero ranks",
        ranks.len(),
        ranks.iter().filter(|&&r| r == 0).count()
    );
    Ok(ranks)
}

/// Decode Move To Front ranks back to BWT symbols, starting from `seed`.
pub fn mtf_decode(ranks: &[u16], seed: &[u8; 256]) -> Result<Vec<u16>> {
    check_seed(seed)?;
    let mut index = *seed;
    let mut bwt = Vec::with_capacity(ranks.len());

    for (position, &rank) in ranks.iter().enumerate() {
        if rank == SENTINEL_RANK {
            bwt.push(BWT_SENTINEL);
            continue;
        }
        if rank > 255 {
            return Err(Error::InvalidRank { rank, position });
        }
        let idx = rank as usize;
        bwt.push(index[idx] as u16);
        move_to_front(&mut index, idx);
    }
    Ok(bwt)
}
