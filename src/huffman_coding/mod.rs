//! The huffman module is the entropy coding stage of bwzip.
//!
//! One tree is built for the whole MTF rank stream. The tree travels in front of the payload as
//! a pre-order bit header, so the decoder needs nothing but the compressed bytes to rebuild it.
//! A dedicated end-of-stream symbol closes the payload; the zero padding of the final byte is
//! never decoded.
//!
//! Coding is inherently sequential and does not benefit from multithreading.

pub mod huffman;
pub mod huffman_decode;
