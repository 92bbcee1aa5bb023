/// Integer alphabet for the suffix array builder. Symbols lie in `[-offset, size]`; the offset
/// shifts the smallest (possibly negative) symbol to counter slot 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub size: usize,
    pub offset: usize,
}

impl Alphabet {
    pub const fn new(size: usize, offset: usize) -> Self {
        Self { size, offset }
    }

    /// Number of counter slots a counting sort over this alphabet needs. The suffix array
    /// builder checks this against the text length before sorting.
    pub fn slots(&self) -> usize {
        self.size + self.offset + 1
    }

    /// Smallest symbol. Padding sentinels take this value.
    pub fn min(&self) -> i32 {
        -(self.offset.min(i32::MAX as usize) as i32)
    }

    /// Largest symbol.
    pub fn max(&self) -> i32 {
        self.size.min(i32::MAX as usize) as i32
    }

    #[inline(always)]
    fn key(&self, sym: i32) -> usize {
        (sym as i64 + self.offset as i64) as usize
    }
}

/// One stable counting sort pass. Sorts the positions in `a` into `b` by the key
/// `r[a[i] + offset]`; positions with equal keys keep their relative order.
pub fn radix_pass(a: &[usize], b: &mut [usize], r: &[i32], offset: usize, alphabet: Alphabet) {
    // Tally the keys
    let mut count = vec![0_usize; alphabet.slots()];
    for &i in a {
        count[alphabet.key(r[i + offset])] += 1;
    }

    // Exclusive prefix sum gives the first output slot of each key
    let mut sum = 0;
    for c in count.iter_mut() {
        let t = *c;
        *c = sum;
        sum += t;
    }

    // Scatter in input order, which keeps the sort stable
    for &i in a {
        let key = alphabet.key(r[i + offset]);
        b[count[key]] = i;
        count[key] += 1;
    }
}
