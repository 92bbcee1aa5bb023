//! Rebuilds the huffman tree from the stream header and decodes the payload.
//!
//! The tree is read from the header alone. Decoding walks the tree one bit at a time and
//! stops at the end-of-stream symbol; whatever follows it (the zero padding of the last byte)
//! is ignored. Running out of bits anywhere is an error.

use log::{debug, trace};

use super::huffman::{HuffmanTree, Node, NodeData, NodeId};
use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};
use crate::tools::symbols::{ALPHABET_SIZE, END_OF_STREAM, SYMBOL_BITS};

/// Deepest internal node a tree over ALPHABET_SIZE leaves can have.
pub const MAX_TREE_DEPTH: usize = ALPHABET_SIZE - 1;

fn next_bit(br: &mut BitReader<'_>) -> Result<bool> {
    br.bool_bit().ok_or(Error::UnexpectedEof {
        bit_position: br.position(),
    })
}

/// Parse the pre-order tree header at the reader's position.
pub fn read_tree(br: &mut BitReader<'_>) -> Result<HuffmanTree> {
    let mut nodes = Vec::new();
    let root = read_node(br, &mut nodes, 0)?;
    trace!("Huffman header ends at {}.", br.loc());
    Ok(HuffmanTree::from_parts(nodes, root))
}

fn read_node(br: &mut BitReader<'_>, nodes: &mut Vec<Node>, depth: usize) -> Result<NodeId> {
    if depth > MAX_TREE_DEPTH {
        return Err(Error::TreeTooDeep {
            max_depth: MAX_TREE_DEPTH,
        });
    }
    let node_data = if next_bit(br)? {
        // Leaf: the symbol follows
        let bit_position = br.position();
        let symbol = br
            .bint(SYMBOL_BITS)
            .ok_or(Error::UnexpectedEof { bit_position })? as u16;
        if symbol as usize >= ALPHABET_SIZE {
            return Err(Error::InvalidTreeSymbol {
                symbol,
                bit_position,
            });
        }
        NodeData::Leaf(symbol)
    } else {
        // Internal node: left subtree, then right subtree
        let left = read_node(br, nodes, depth + 1)?;
        let right = read_node(br, nodes, depth + 1)?;
        NodeData::Kids(left, right)
    };
    nodes.push(Node {
        weight: 0,
        node_data,
    });
    Ok(nodes.len() - 1)
}

/// Read one symbol by walking from the root. A single leaf tree spends one bit per symbol.
fn decode_symbol(tree: &HuffmanTree, br: &mut BitReader<'_>) -> Result<u16> {
    let mut id = tree.root();
    if let NodeData::Leaf(sym) = tree.node(id).node_data {
        next_bit(br)?;
        return Ok(sym);
    }
    loop {
        match tree.node(id).node_data {
            NodeData::Leaf(sym) => return Ok(sym),
            NodeData::Kids(left, right) => id = if next_bit(br)? { right } else { left },
        }
    }
}

/// Starting size of the rank buffer for `bits` of payload. Skewed MTF streams average a few bits
/// per rank; the buffer grows past this when they don't.
fn rank_capacity(bits: usize) -> usize {
    bits / 4
}

/// Decode a huffman stream (header and payload) back to MTF ranks. The end-of-stream symbol
/// is not included in the result.
pub fn huf_decode(br: &mut BitReader<'_>) -> Result<Vec<u16>> {
    let tree = read_tree(br)?;
    debug!("Read huffman tree with {} leaves.", tree.leaf_count());

    let mut ranks = Vec::with_capacity(rank_capacity(br.remaining()));
    loop {
        let sym = decode_symbol(&tree, br)?;
        if sym == END_OF_STREAM {
            break;
        }
        ranks.push(sym);
    }
    debug!(
        "Decoded {} symbols, {} bits left over.",
        ranks.len(),
        br.remaining()
    );
    Ok(ranks)
}
