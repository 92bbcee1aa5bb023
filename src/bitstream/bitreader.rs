//! BitReader: reads a packed bitstream produced by the BitPacker.
//!
//! Bits come out most significant first. The reader never reads past the end of its slice;
//! every accessor returns None once the data runs out.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits from a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = (byte & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (big endian), or None if there is not enough
    /// data left. Nothing is consumed when the read would run off the end.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        if n > usize::BITS as usize || n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()?;
        }
        Some(result)
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len() * 8 - self.position()
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

/// Expands packed bytes into their bits, MSB first.
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    let mut br = BitReader::new(bytes);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    while let Some(bit) = br.bool_bit() {
        bits.push(bit);
    }
    bits
}

#[cfg(test)]
mod test {
    use super::{unpack_bits, BitReader};
    use crate::bitstream::bitpacker::pack_bits;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_across_bytes_test() {
        let x = [0b1111_0000, 0b1000_0000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(4), Some(0b1111));
        assert_eq!(br.bint(9), Some(0b0_0001_0000));
        assert_eq!(br.remaining(), 3);
    }

    #[test]
    fn short_bint_consumes_nothing() {
        let x = [0xff];
        let mut br = BitReader::new(&x);
        br.bit();
        assert_eq!(br.bint(8), None);
        assert_eq!(br.position(), 1);
        assert_eq!(br.bint(7), Some(0x7f));
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        br.bint(40);
        br.bit();
        assert_eq!(br.loc(), "[5.1]");
        assert_eq!(br.position(), 41);
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn unpack_reverses_pack() {
        let bits = [true, true, false, true, false, false, true, false, true];
        let unpacked = unpack_bits(&pack_bits(&bits));
        assert_eq!(unpacked.len(), 16);
        assert_eq!(&unpacked[..bits.len()], &bits);
        assert!(unpacked[bits.len()..].iter().all(|&b| !b));
    }
}
