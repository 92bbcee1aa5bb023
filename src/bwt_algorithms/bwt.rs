use log::debug;

use super::skew::byte_suffix_array;
use crate::error::{Error, Result};
use crate::tools::symbols::BWT_SENTINEL;

/// Burrows-Wheeler-Transform of `data` from its suffix array (as built by byte_suffix_array,
/// with the terminator suffix included). Position i holds the symbol before suffix sa[i], or
/// the sentinel for the suffix starting at 0. The result is one longer than `data`.
pub fn bwt_encode(data: &[u8], sa: &[usize]) -> Result<Vec<u16>> {
    if sa.len() != data.len() + 1 {
        return Err(Error::SuffixArrayMismatch {
            expected: data.len() + 1,
            found: sa.len(),
        });
    }
    let mut bwt = Vec::with_capacity(sa.len());
    let mut key = None;
    for (i, &suffix) in sa.iter().enumerate() {
        match suffix {
            0 => {
                if key.is_some() {
                    return Err(Error::SentinelCount { found: 2 });
                }
                key = Some(i);
                bwt.push(BWT_SENTINEL);
            }
            s if s <= data.len() => bwt.push(data[s - 1] as u16),
            _ => {
                return Err(Error::SuffixArrayMismatch {
                    expected: data.len() + 1,
                    found: sa.len(),
                })
            }
        }
    }
    match key {
        Some(key) => debug!("BWT of {} symbols, sentinel at {}.", bwt.len(), key),
        None => return Err(Error::SentinelCount { found: 0 }),
    }
    Ok(bwt)
}

/// Suffix array and Burrows-Wheeler-Transform in one call.
pub fn bwt(data: &[u8]) -> Result<Vec<u16>> {
    let sa = byte_suffix_array(data)?;
    bwt_encode(data, &sa)
}

/// Decode a Burrows-Wheeler-Transform holding exactly one sentinel.
pub fn bwt_decode(bwt_in: &[u16]) -> Result<Vec<u8>> {
    // Count each symbol and record every position's rank among equal symbols before it.
    let mut freq = [0_u32; 256];
    let mut rank = vec![0_u32; bwt_in.len()];
    let mut sentinels = 0;
    for (i, &sym) in bwt_in.iter().enumerate() {
        if sym == BWT_SENTINEL {
            sentinels += 1;
            continue;
        }
        if sym > 255 {
            return Err(Error::InvalidBwtSymbol {
                symbol: sym,
                position: i,
            });
        }
        rank[i] = freq[sym as usize];
        freq[sym as usize] += 1;
    }
    if sentinels != 1 {
        return Err(Error::SentinelCount { found: sentinels });
    }

    // Convert frequency count to a cumulative sum of frequencies
    let mut cumulative = [0_u32; 256];
    for i in 1..256 {
        cumulative[i] = cumulative[i - 1] + freq[i - 1];
    }

    // Walk backwards through the text from the row of the full text. Row 0 is the terminator
    // suffix, so every jump skips one row for it.
    let end = bwt_in.len() - 1;
    let mut orig = Vec::with_capacity(end);
    let mut at = 0;
    while bwt_in[at] != BWT_SENTINEL {
        if orig.len() == end {
            return Err(Error::BrokenCycle { steps: orig.len() });
        }
        let sym = bwt_in[at] as usize;
        orig.push(sym as u8);
        at = 1 + (cumulative[sym] + rank[at]) as usize;
    }
    if orig.len() != end {
        return Err(Error::BrokenCycle { steps: orig.len() });
    }
    orig.reverse();
    Ok(orig)
}
