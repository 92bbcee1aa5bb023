//! Error types for the bwzip compressor.
//!
//! Every stage reports malformed input through [`Error`] instead of panicking. A failed
//! compression or decompression produces no partial output; the caller discards what it has
//! and reports the error.

use thiserror::Error;

/// Error variants for the transform pipeline and its file glue.
#[derive(Debug, Error)]
pub enum Error {
    /// The suffix array builder needs three trailing padding slots holding the smallest key.
    #[error("suffix array input of length {len} is not followed by three padding sentinels")]
    MissingPadding { len: usize },

    /// A symbol does not fit the alphabet handed to the suffix array builder.
    #[error("symbol {symbol} at position {position} is outside the alphabet [{min}, {max}]")]
    SymbolOutOfRange {
        symbol: i32,
        position: usize,
        min: i32,
        max: i32,
    },

    /// An alphabet whose counter table would not fit the text it sorts.
    #[error("alphabet of size {size} with offset {offset} is too large for a text of length {len}")]
    AlphabetTooLarge {
        size: usize,
        offset: usize,
        len: usize,
    },

    /// Input too long for the 32 bit symbol names used by the suffix array recursion.
    #[error("input of {len} bytes exceeds the supported maximum of {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    /// A suffix array that does not belong to the text it is paired with.
    #[error("suffix array of length {found} does not fit a text of length {expected}")]
    SuffixArrayMismatch { expected: usize, found: usize },

    /// BWT data must carry exactly one sentinel.
    #[error("expected exactly one BWT sentinel, found {found}")]
    SentinelCount { found: usize },

    /// The inverse BWT walk left the cycle that leads to the sentinel.
    #[error("inverse BWT did not reach the sentinel after {steps} steps")]
    BrokenCycle { steps: usize },

    /// A BWT symbol that is neither a byte nor the sentinel.
    #[error("invalid BWT symbol {symbol} at position {position}")]
    InvalidBwtSymbol { symbol: u16, position: usize },

    /// A move-to-front rank that points past the recency list.
    #[error("move-to-front rank {rank} at position {position} is out of range")]
    InvalidRank { rank: u16, position: usize },

    /// An MTF seed that is not a permutation of the 256 byte values.
    #[error("move-to-front seed is not a permutation: byte {missing} is missing")]
    InvalidSeed { missing: u8 },

    /// Ran out of bits while reading the tree header or the payload.
    #[error("unexpected end of bitstream at bit {bit_position}")]
    UnexpectedEof { bit_position: usize },

    /// A tree header leaf naming a symbol outside the alphabet.
    #[error("invalid symbol {symbol} in huffman tree header at bit {bit_position}")]
    InvalidTreeSymbol { symbol: u16, bit_position: usize },

    /// A tree header nested deeper than any tree over the alphabet can be.
    #[error("huffman tree header nests deeper than {max_depth} levels")]
    TreeTooDeep { max_depth: usize },

    /// Encoding was asked for a symbol with no leaf in the tree.
    #[error("symbol {symbol} has no huffman code")]
    MissingCode { symbol: u16 },

    /// A code that does not fit the 64 bit code register.
    #[error("huffman code of {len} bits exceeds the 64 bit limit")]
    CodeTooLong { len: usize },

    /// Refusing to replace an existing output file without --force.
    #[error("output file {path} already exists")]
    OutputExists { path: String },

    /// The output path resolves to the input file.
    #[error("output {path} is the input file")]
    OutputIsInput { path: String },

    /// A test run whose decompressed bytes differ from the input.
    #[error("round trip of {path} differs from the input at byte {position}")]
    VerifyFailed { path: String, position: usize },

    /// An I/O error from the file source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for bwzip operations.
pub type Result<T> = std::result::Result<T, Error>;
