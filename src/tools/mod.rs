//! The tools module provides the helper pieces of bwzip.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Symbol frequency count for the huffman stage.
//! - mtf: Move-To-Front transform and its inverse.
//! - symbols: The internal alphabet shared by every stage.
//! - timer: Per stage timing.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
pub mod symbols;
pub mod timer;
