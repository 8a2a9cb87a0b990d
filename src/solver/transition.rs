use crate::data::{Block, Dir};
use crate::map::Map;
use crate::state::State;

/// Pushes every block one cell in `dir` at once.
///
/// A block moves only if the destination is neither a wall nor occupied.
/// Blocks are processed front to back in the push direction, so a block
/// can take the cell vacated by the one in front of it during this push
/// and a whole run slides together.
pub(crate) fn push_all(map: &Map, state: &State, dir: Dir) -> State {
    let mut block_grid = state.block_grid(&map.grid);
    let mut blocks = state.blocks().to_vec();

    let mut push = |block: &mut Block| {
        if let Some(dest) = block.pos.step(dir) {
            // is_wall covers out of bounds so indexing is safe
            if !map.is_wall(dest) && block_grid[dest].is_none() {
                block_grid[block.pos] = None;
                block_grid[dest] = Some(block.kind);
                block.pos = dest;
            }
        }
    };

    // blocks are sorted so ascending order is front to back for left and up
    if dir.towards_origin() {
        blocks.iter_mut().for_each(&mut push);
    } else {
        blocks.iter_mut().rev().for_each(&mut push);
    }

    State::new(blocks)
}
