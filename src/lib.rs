//! bwzip, a block-sorting file compressor.
//!
//! Version 0.1.0
//!
//! The whole input is treated as one block. It is sorted with a linear time DC3 suffix array,
//! transformed with Burrows-Wheeler, turned into small ranks with Move-To-Front, and coded with
//! a single Huffman tree that travels in front of the payload.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> bwzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.bwz.
//! The original file is kept unless `--remove` is given.
//!
//! In memory:
//!
//! ```
//! let packed = bwzip::compress(b"banana").unwrap();
//! assert_eq!(bwzip::decompress(&packed).unwrap(), b"banana");
//! ```
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::{Error, Result};
