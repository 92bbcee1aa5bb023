use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bwt_algorithms::bwt::bwt_decode;
use crate::error::Result;
use crate::huffman_coding::huffman_decode::huf_decode;
use crate::tools::mtf::{mtf_decode, BLOCK_SEED};
use crate::tools::timer::Timer;

/// Decompress a stream written by compress().
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decompress_with(input, &BLOCK_SEED, &mut Timer::new())
}

/// Decompress a stream written by compress_with() under the same `seed`.
pub fn decompress_with(input: &[u8], seed: &[u8; 256], timer: &mut Timer) -> Result<Vec<u8>> {
    info!("Decompressing {} bytes.", input.len());

    let mut br = BitReader::new(input);
    let ranks = huf_decode(&mut br)?;
    timer.mark("huffman decode");

    let bwt = mtf_decode(&ranks, seed)?;
    drop(ranks);
    timer.mark("inverse mtf");

    let output = bwt_decode(&bwt)?;
    timer.mark("inverse bwt");

    debug!("Inverse BWT of {} symbols.", bwt.len());
    info!("Restored {} bytes.", output.len());
    Ok(output)
}
