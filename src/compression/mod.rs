//! The compression module runs the bwzip pipeline.
//!
//! Compression happens in the following steps:
//! - Suffix array: Sort every suffix of the input (plus a terminator) with DC3.
//! - Burrows Wheeler Transform: Read the symbol before each sorted suffix, which groups similar contexts.
//! - Move To Front transform: Turn recently seen symbols into small ranks.
//! - Huffman coding: One tree for the whole rank stream, written in front of the payload.
//!
//! The whole input is one block. There is no container header, checksum or length field.
//!
//! Decompression follows the inverse of the compression process.
//! - Huffman decoding, up to the end-of-stream symbol.
//! - MTF inverse: Convert the ranks back to BWT symbols.
//! - BWT reversal: Walk the last-to-first mapping from the row of the full text.
//!
//! The files module holds the glue between the pipelines and the file system.

pub mod compress;
pub mod decompress;
pub mod files;
