use bwzip::bitstream::bitpacker::BitPacker;
use bwzip::bitstream::bitreader::BitReader;
use bwzip::bwt_algorithms::bwt::{bwt, bwt_decode};
use bwzip::bwt_algorithms::skew::byte_suffix_array;
use bwzip::huffman_coding::huffman::huf_encode;
use bwzip::huffman_coding::huffman_decode::huf_decode;
use bwzip::tools::mtf::{mtf_decode, mtf_encode, BLOCK_SEED, IDENTITY_SEED};
use bwzip::tools::symbols::{BWT_SENTINEL, SENTINEL_RANK};
use bwzip::{compress, decompress};
use proptest::prelude::*;

/// Sorts suffixes directly. A proper prefix sorts first, which is where the terminator puts it.
fn naive_suffix_array(data: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..data.len()).collect();
    sa.sort_by(|&a, &b| data[a..].cmp(&data[b..]));
    sa.insert(0, data.len());
    sa
}

proptest! {
    #[test]
    fn test_compress_roundtrip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_small_alphabet_roundtrip(input in prop::collection::vec(prop::sample::select(vec![b'a', b'b', 255]), 0..3000)) {
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_suffix_array_sorted(input in prop::collection::vec(0..4u8, 0..500)) {
        prop_assert_eq!(byte_suffix_array(&input).unwrap(), naive_suffix_array(&input));
    }

    #[test]
    fn test_bwt_inverse(input in prop::collection::vec(any::<u8>(), 0..1000)) {
        let out = bwt(&input).unwrap();
        prop_assert_eq!(out.len(), input.len() + 1);
        prop_assert_eq!(out.iter().filter(|&&s| s == BWT_SENTINEL).count(), 1);
        prop_assert_eq!(bwt_decode(&out).unwrap(), input);
    }

    #[test]
    fn test_mtf_inverse(
        input in prop::collection::vec(0..=256u16, 0..1000),
        identity in any::<bool>(),
    ) {
        let seed = if identity { &IDENTITY_SEED } else { &BLOCK_SEED };
        let ranks = mtf_encode(&input, seed).unwrap();
        prop_assert!(ranks.iter().all(|&r| r <= SENTINEL_RANK));
        prop_assert_eq!(mtf_decode(&ranks, seed).unwrap(), input);
    }

    #[test]
    fn test_huffman_inverse(input in prop::collection::vec(0..=256u16, 0..2000)) {
        let mut bp = BitPacker::new(input.len());
        huf_encode(&input, &mut bp).unwrap();
        let bytes = bp.finish();
        prop_assert_eq!(huf_decode(&mut BitReader::new(&bytes)).unwrap(), input);
    }

    #[test]
    fn test_decompress_never_panics(input in prop::collection::vec(any::<u8>(), 0..200)) {
        let _ = decompress(&input);
    }
}

#[test]
fn empty_input() {
    let packed = compress(b"").unwrap();
    assert!(!packed.is_empty());
    assert_eq!(decompress(&packed).unwrap(), b"");
}

#[test]
fn long_run_compresses_well() {
    let data = vec![b'a'; 1000];
    let packed = compress(&data).unwrap();
    assert!(packed.len() < data.len() / 4, "{} bytes", packed.len());
    assert_eq!(decompress(&packed).unwrap(), data);
}

#[test]
fn byte_255_is_plain_data() {
    for data in [vec![255_u8], vec![255; 1000], vec![255, 0, 255, 1, 255, 255, 2]] {
        let packed = compress(&data).unwrap();
        assert_eq!(decompress(&packed).unwrap(), data);
    }
}

#[test]
fn text_compresses() {
    let data = b"It was the best of times, it was the worst of times, it was the age of wisdom, \
                 it was the age of foolishness, it was the epoch of belief, it was the epoch of \
                 incredulity, it was the season of Light, it was the season of Darkness."
        .repeat(4);
    let packed = compress(&data).unwrap();
    assert!(packed.len() < data.len() / 2);
    assert_eq!(decompress(&packed).unwrap(), data);
}
