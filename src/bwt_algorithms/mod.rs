//! The bwt_algorithms module forms the sorting subsystem of bwzip.
//!
//! The Burrows-Wheeler Transform is read straight off a suffix array of the input followed by
//! a terminator. The suffix array is built in linear time with the DC3 (skew) algorithm, whose
//! only sorting primitive is a stable radix pass over an integer alphabet.
//!
pub mod bwt;
pub mod radix;
pub mod skew;
