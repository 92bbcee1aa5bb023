use super::symbols::ALPHABET_SIZE;

/// Returns a frequency count of the input symbols over the huffman alphabet.
/// Symbols outside the alphabet are not counted.
pub fn freqs(data: &[u16]) -> Vec<u32> {
    let mut freqs = vec![0_u32; ALPHABET_SIZE];
    data.iter()
        .filter(|&&el| (el as usize) < ALPHABET_SIZE)
        .for_each(|&el| freqs[el as usize] += 1);
    freqs
}

#[test]
fn freqs_test() {
    let f = freqs(&[0, 0, 3, 256, 257, 300]);
    assert_eq!(f.len(), ALPHABET_SIZE);
    assert_eq!(f[0], 2);
    assert_eq!(f[3], 1);
    assert_eq!(f[256], 1);
    assert_eq!(f[257], 1);
    assert_eq!(f.iter().sum::<u32>(), 5);
}
