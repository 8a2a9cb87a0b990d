use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{BlockType, MapCell};
use crate::map::Map;
use crate::state::State;
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    map: &'a Map,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a Map, state: Option<&'a State>) -> Self {
        Self { map, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.map.grid;

        let mut target_grid: Vec2d<Option<BlockType>> = grid.scratchpad();
        for (kind, pos) in self.map.targets.iter() {
            if grid.contains(pos) {
                target_grid[pos] = Some(kind);
            }
        }
        let block_grid = match self.state {
            Some(state) => state.block_grid(grid),
            None => grid.scratchpad(),
        };

        // all rows have the same width so print them whole,
        // a freshly parsed level then matches its input
        for pos in grid.positions() {
            let c = match (grid[pos], block_grid[pos], target_grid[pos]) {
                (MapCell::Wall, _, _) => '#',
                (MapCell::Empty, Some(kind), _) => kind.block_char(),
                (MapCell::Empty, None, Some(kind)) => kind.target_char(),
                (MapCell::Empty, None, None) => ' ',
            };
            write!(f, "{}", c)?;
            if pos.c + 1 == grid.cols() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Block, Pos};
    use crate::level::Level;

    use super::*;

    #[test]
    fn block_hides_target() {
        let level: Level = r"
######
#a  A#
#  bB#
######
"
        .parse()
        .unwrap();
        let a = BlockType::new(1).unwrap();
        let b = BlockType::new(2).unwrap();
        let state = State::new(vec![
            Block::new(Pos::new(1, 4), a),
            Block::new(Pos::new(2, 1), b),
        ]);
        let expected = r"
######
#   a#
#b  B#
######
"
        .trim_start_matches('\n');
        assert_eq!(level.map.format_with_state(&state).to_string(), expected);
    }
}
