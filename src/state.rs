use crate::data::{Block, BlockType, MAX_BLOCKS};
use crate::vec2d::Vec2d;

/// Bytes per block in the canonical encoding: column, row, type.
const BLOCK_BYTES: usize = 3;

pub(crate) const MAX_ENCODED_LEN: usize = MAX_BLOCKS * BLOCK_BYTES;

/// Block positions of one configuration, always kept in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    blocks: Vec<Block>,
}

impl State {
    pub fn new(mut blocks: Vec<Block>) -> State {
        // sort to detect equal states when blocks are discovered in a different order
        blocks.sort();
        State { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Writes the canonical encoding into `buf` and returns its length.
    ///
    /// Panics if the state holds more than `MAX_BLOCKS` blocks,
    /// the solver rejects such levels before searching.
    pub(crate) fn encode_into(&self, buf: &mut [u8; MAX_ENCODED_LEN]) -> usize {
        assert!(self.blocks.len() <= MAX_BLOCKS);
        for (chunk, b) in buf.chunks_mut(BLOCK_BYTES).zip(&self.blocks) {
            chunk[0] = b.pos.c;
            chunk[1] = b.pos.r;
            chunk[2] = b.kind.raw();
        }
        self.blocks.len() * BLOCK_BYTES
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = [0; MAX_ENCODED_LEN];
        let len = self.encode_into(&mut buf);
        buf[..len].to_vec()
    }

    /// Marks which type occupies each cell.
    pub(crate) fn block_grid<T>(&self, grid: &Vec2d<T>) -> Vec2d<Option<BlockType>> {
        let mut block_grid = grid.scratchpad();
        for b in &self.blocks {
            block_grid[b.pos] = Some(b.kind);
        }
        block_grid
    }
}
