use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::bwt_algorithms::bwt::bwt_encode;
use crate::bwt_algorithms::skew::byte_suffix_array;
use crate::error::Result;
use crate::huffman_coding::huffman::huf_encode;
use crate::tools::mtf::{check_seed, mtf_encode, BLOCK_SEED};
use crate::tools::timer::Timer;

/// Compress `data` with the default MTF seed.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, &BLOCK_SEED, &mut Timer::new())
}

/// Compress `data`, seeding the MTF recency list with `seed` and charging each stage to `timer`.
/// The decompressor must be given the same seed.
pub fn compress_with(data: &[u8], seed: &[u8; 256], timer: &mut Timer) -> Result<Vec<u8>> {
    info!("Compressing {} bytes.", data.len());
    check_seed(seed)?;

    let sa = byte_suffix_array(data)?;
    let bwt = bwt_encode(data, &sa)?;
    drop(sa);
    timer.mark("suffix array + bwt");

    let ranks = mtf_encode(&bwt, seed)?;
    debug!(
        "MTF produced {} ranks, {} of them zero.",
        ranks.len(),
        ranks.iter().filter(|&&r| r == 0).count()
    );
    timer.mark("mtf");

    let mut bp = BitPacker::new(data.len() / 2 + 64);
    huf_encode(&ranks, &mut bp)?;
    let bits = bp.bit_len();
    let output = bp.finish();
    timer.mark("huffman");

    info!("Wrote {} bits in {} bytes.", bits, output.len());
    Ok(output)
}
