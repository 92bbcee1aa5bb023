//! The bitstream module is the bit-level I/O layer of the compressor.
//!
//! The compressed format is a plain run of bits: the serialized huffman tree followed by the
//! huffman codes of the payload. Bits are packed most significant bit first, and the final byte
//! is padded with zeros. There is no container header, so these two types are the whole wire
//! format below the huffman layer.
//!
//! - bitpacker: queue bits and codes, then pack them into bytes.
//! - bitreader: read bits and small integers back out of a packed byte slice.
//!
pub mod bitpacker;
pub mod bitreader;
