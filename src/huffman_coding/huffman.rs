use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::{Error, Result};
use crate::tools::freq_count::freqs;
use crate::tools::symbols::{ALPHABET_SIZE, END_OF_STREAM, SYMBOL_BITS};

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// Longest code the 64 bit code register can hold.
pub const MAX_CODE_LEN: usize = 64;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u16),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

/// A right aligned bit pattern: `len` bits of `bits`, most significant first.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Huffman tree stored as an arena. Children always sit at lower indices than their parent.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree from a table of symbol frequencies. Symbols with a zero count get no leaf.
    /// Returns None when every count is zero.
    ///
    /// Nodes merge lightest first. Equal weights are broken by age: leaves are created in
    /// ascending symbol order, every merged node is younger than anything before it, and the
    /// older of two tied nodes is taken first. The first node taken becomes the left child.
    pub fn from_freqs(freqs: &[u32]) -> Option<Self> {
        let mut nodes = Vec::with_capacity(freqs.len() * 2);
        // (weight, arena index) - the arena index doubles as the age of the node
        let mut heap = BinaryHeap::with_capacity(freqs.len());

        for (sym, &f) in freqs.iter().enumerate().filter(|&(_, &f)| f > 0) {
            heap.push(Reverse((f as u64, nodes.len())));
            nodes.push(Node {
                weight: f as u64,
                node_data: NodeData::Leaf(sym as u16),
            });
        }

        // Pare it down to one single node with child nodes
        while heap.len() > 1 {
            let Reverse((left_weight, left)) = heap.pop()?;
            let Reverse((right_weight, right)) = heap.pop()?;
            let weight = left_weight + right_weight;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node {
                weight,
                node_data: NodeData::Kids(left, right),
            });
        }

        let Reverse((_, root)) = heap.pop()?;
        Some(Self { nodes, root })
    }

    /// Assemble a tree from an arena built elsewhere (the header parser).
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of leaves, i.e. symbols with a code.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.node_data, NodeData::Leaf(_)))
            .count()
    }

    /// Code for each symbol of the alphabet, indexed by symbol value. A code is the path from
    /// the root, 0 for left and 1 for right. A tree that is a single leaf gives that leaf the
    /// one bit code 0.
    pub fn codes(&self) -> Result<Vec<Option<Code>>> {
        let mut codes = vec![None; ALPHABET_SIZE];
        if let NodeData::Leaf(sym) = self.nodes[self.root].node_data {
            codes[sym as usize] = Some(Code { bits: 0, len: 1 });
            return Ok(codes);
        }
        self.return_codes(self.root, 0, 0, &mut codes)?;
        Ok(codes)
    }

    /// Recursively walk the tree and record each leaf's path.
    fn return_codes(
        &self,
        id: NodeId,
        bits: u64,
        depth: usize,
        codes: &mut [Option<Code>],
    ) -> Result<()> {
        match self.nodes[id].node_data {
            NodeData::Kids(left, right) => {
                if depth == MAX_CODE_LEN {
                    return Err(Error::CodeTooLong { len: depth + 1 });
                }
                self.return_codes(left, bits << 1, depth + 1, codes)?;
                self.return_codes(right, bits << 1 | 1, depth + 1, codes)?;
            }
            NodeData::Leaf(sym) => {
                if let Some(slot) = codes.get_mut(sym as usize) {
                    *slot = Some(Code {
                        bits,
                        len: depth as u8,
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize the tree in pre-order: 0 for an internal node (then its left and right
    /// subtrees), 1 and the SYMBOL_BITS wide symbol for a leaf.
    pub fn write_header(&self, bp: &mut BitPacker) {
        self.write_node(self.root, bp);
    }

    fn write_node(&self, id: NodeId, bp: &mut BitPacker) {
        match self.nodes[id].node_data {
            NodeData::Kids(left, right) => {
                bp.out_bit(false);
                self.write_node(left, bp);
                self.write_node(right, bp);
            }
            NodeData::Leaf(sym) => {
                bp.out_bit(true);
                bp.out_bits(sym as u32, SYMBOL_BITS as u8);
            }
        }
    }
}

/// Huffman encode a stream of MTF ranks: the tree header, one code per rank, and the
/// end-of-stream code. Returns the tree that was used.
pub fn huf_encode(ranks: &[u16], bp: &mut BitPacker) -> Result<HuffmanTree> {
    if let Some((position, &rank)) = ranks
        .iter()
        .enumerate()
        .find(|&(_, &r)| r >= END_OF_STREAM)
    {
        return Err(Error::InvalidRank { rank, position });
    }

    // The terminator always gets a leaf, even though it never occurs in the ranks.
    let mut freq = freqs(ranks);
    freq[END_OF_STREAM as usize] += 1;

    let tree = HuffmanTree::from_freqs(&freq).ok_or(Error::MissingCode {
        symbol: END_OF_STREAM,
    })?;
    let codes = tree.codes()?;
    debug!(
        "Huffman tree has {} leaves for {} symbols.",
        tree.leaf_count(),
        ranks.len()
    );

    tree.write_header(bp);
    trace!("Huffman header ends at {}.", bp.loc());

    for &sym in ranks.iter().chain(std::iter::once(&END_OF_STREAM)) {
        let code = codes[sym as usize].ok_or(Error::MissingCode { symbol: sym })?;
        bp.out_code(code.bits, code.len);
    }
    Ok(tree)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::symbols::SENTINEL_RANK;

    fn code_str(code: &Code) -> String {
        format!("{:0width$b}", code.bits, width = code.len as usize)
    }

    #[test]
    fn tie_break_test() {
        // Weights 3, 1, 1: the two 1s merge first, older (symbol 1) on the left
        let mut freq = vec![0_u32; ALPHABET_SIZE];
        freq[0] = 3;
        freq[1] = 1;
        freq[257] = 1;
        let tree = HuffmanTree::from_freqs(&freq).unwrap();
        let codes = tree.codes().unwrap();
        assert_eq!(code_str(&codes[1].unwrap()), "00");
        assert_eq!(code_str(&codes[257].unwrap()), "01");
        assert_eq!(code_str(&codes[0].unwrap()), "1");
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.node(tree.root()).weight, 5);
    }

    #[test]
    fn equal_weights_are_balanced() {
        let mut freq = vec![0_u32; ALPHABET_SIZE];
        freq[10..14].iter_mut().for_each(|f| *f = 7);
        let codes = HuffmanTree::from_freqs(&freq).unwrap().codes().unwrap();
        let got: Vec<String> = (10..14).map(|s| code_str(&codes[s].unwrap())).collect();
        assert_eq!(got, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn no_freqs_no_tree() {
        assert!(HuffmanTree::from_freqs(&[0; ALPHABET_SIZE]).is_none());
    }

    #[test]
    fn single_leaf_gets_zero_code() {
        let mut freq = vec![0_u32; ALPHABET_SIZE];
        freq[42] = 9;
        let codes = HuffmanTree::from_freqs(&freq).unwrap().codes().unwrap();
        assert_eq!(codes[42], Some(Code { bits: 0, len: 1 }));
        assert_eq!(codes.iter().flatten().count(), 1);
    }

    #[test]
    fn codes_are_prefix_free() {
        let mut freq = vec![0_u32; ALPHABET_SIZE];
        for (i, f) in freq.iter_mut().enumerate() {
            *f = ((i * 7919) % 97) as u32;
        }
        let tree = HuffmanTree::from_freqs(&freq).unwrap();
        let codes: Vec<String> = tree.codes().unwrap().iter().flatten().map(code_str).collect();
        assert_eq!(codes.len(), tree.leaf_count());
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn header_and_payload_layout() {
        let mut bp = BitPacker::new(8);
        huf_encode(&[0, 0, 0, 1], &mut bp).unwrap();
        assert_eq!(bp.bit_len(), 39);
        // 00 | 1 000000001 | 1 100000001 | 1 000000000 | 1 1 1 00 01
        assert_eq!(bp.finish(), vec![0x20, 0x1c, 0x06, 0x00, 0xe2]);
    }

    #[test]
    fn empty_stream_is_one_leaf() {
        let mut bp = BitPacker::new(2);
        let tree = huf_encode(&[], &mut bp).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        // 1 100000001 | 0
        assert_eq!(bp.finish(), vec![0b1100_0000, 0b0100_0000]);
    }

    #[test]
    fn rejects_reserved_symbols() {
        let mut bp = BitPacker::new(2);
        assert!(matches!(
            huf_encode(&[SENTINEL_RANK, END_OF_STREAM], &mut bp),
            Err(Error::InvalidRank {
                rank: END_OF_STREAM,
                position: 1
            })
        ));
    }

    #[test]
    fn deep_trees_are_refused() {
        // Fibonacci weights give a maximally skewed tree
        let mut freq = vec![0_u32; ALPHABET_SIZE];
        let (mut a, mut b) = (1_u32, 1_u32);
        for f in freq.iter_mut().take(46) {
            *f = a;
            (a, b) = (b, a.saturating_add(b));
        }
        let tree = HuffmanTree::from_freqs(&freq).unwrap();
        assert!(tree.codes().is_ok());

        // Hand built chain of 66 internal nodes
        let mut nodes = vec![Node {
            weight: 1,
            node_data: NodeData::Leaf(0),
        }];
        for i in 0..66 {
            let leaf = nodes.len();
            nodes.push(Node {
                weight: 1,
                node_data: NodeData::Leaf(i as u16 + 1),
            });
            let prev = if i == 0 { 0 } else { leaf - 1 };
            nodes.push(Node {
                weight: 2,
                node_data: NodeData::Kids(prev, leaf),
            });
        }
        let root = nodes.len() - 1;
        let chain = HuffmanTree::from_parts(nodes, root);
        assert!(matches!(chain.codes(), Err(Error::CodeTooLong { .. })));
    }
}
