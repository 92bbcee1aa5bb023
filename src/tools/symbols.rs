//! Internal alphabet shared by the BWT, MTF and huffman stages.
//!
//! Bytes keep their values 0-255. The BWT sentinel and the huffman end-of-stream marker get
//! their own slots above the byte range, so no real byte value is ever mistaken for either.

/// BWT symbol standing for the end of the original text.
pub const BWT_SENTINEL: u16 = 256;

/// MTF rank emitted for the BWT sentinel. It never enters the recency list.
pub const SENTINEL_RANK: u16 = 256;

/// Huffman symbol appended once to every stream; decoding stops when it is read.
pub const END_OF_STREAM: u16 = 257;

/// Size of the huffman alphabet: 256 byte ranks, the sentinel rank and end-of-stream.
pub const ALPHABET_SIZE: usize = END_OF_STREAM as usize + 1;

/// Width of a leaf symbol in the serialized tree header.
pub const SYMBOL_BITS: usize = 9;
