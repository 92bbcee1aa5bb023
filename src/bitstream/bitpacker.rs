/// Creates a bitstream for output.
#[derive(Debug, Default)]
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Valid bits in the final byte after flush(). Zero means the last byte is full.
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified. Call flush() to
    /// flush the bit queue to the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out_XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.last_bits = 0;
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Writes the `depth` (0-32) least significant bits of `data`, most significant first.
    pub fn out_bits(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        let depth = depth.min(32);
        self.last_bits = 0;
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (u32::MAX >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Writes a right aligned code of up to 64 bits.
    pub fn out_code(&mut self, code: u64, len: u8) {
        if len > 32 {
            self.out_bits((code >> 32) as u32, len - 32);
            self.out_bits(code as u32, 32);
        } else {
            self.out_bits(code as u32, len);
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits.
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.write_stream(); // write out all that is left
        }
    }

    /// Number of bits put on the stream so far, padding excluded.
    pub fn bit_len(&self) -> usize {
        if self.q_bits == 0 && self.last_bits > 0 {
            return (self.output.len() - 1) * 8 + self.last_bits as usize;
        }
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Flush and hand back the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let bits = self.output.len() * 8 + self.q_bits as usize;
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}

/// Packs a logical bit sequence into bytes, MSB first, zero padded to a whole byte.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bp = BitPacker::new(bits.len() / 8 + 1);
    bits.iter().for_each(|&bit| bp.out_bit(bit));
    bp.finish()
}
