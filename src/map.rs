use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{BlockType, MapCell, Pos, MAX_TYPES};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// One optional target per block type, index 0 is never used.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Targets([Option<Pos>; MAX_TYPES as usize + 1]);

impl Targets {
    pub fn get(&self, kind: BlockType) -> Option<Pos> {
        self.0[kind.index()]
    }

    /// Returns the previous target of this type.
    pub fn set(&mut self, kind: BlockType, pos: Pos) -> Option<Pos> {
        self.0[kind.index()].replace(pos)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (BlockType, Pos)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &target)| Some((BlockType::new(i as u8)?, target?)))
    }
}

impl Debug for Targets {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(kind, pos)| (kind.target_char(), pos)))
            .finish()
    }
}

/// The static part of a level - walls and targets.
#[derive(Clone, PartialEq, Eq)]
pub struct Map {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) targets: Targets,
}

impl Map {
    pub(crate) fn new(grid: Vec2d<MapCell>, targets: Targets) -> Self {
        Map { grid, targets }
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Cells outside the grid behave like walls.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None))
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn walls_and_targets() {
        let level: Level = r"
#####
#a A#
#####
"
        .parse()
        .unwrap();
        let map = &level.map;
        assert!(map.is_wall(Pos::new(0, 0)));
        assert!(!map.is_wall(Pos::new(1, 1)));
        assert!(!map.is_wall(Pos::new(1, 3)));
        // outside the grid
        assert!(map.is_wall(Pos::new(3, 1)));
        assert!(map.is_wall(Pos::new(1, 5)));

        let a = BlockType::new(1).unwrap();
        let b = BlockType::new(2).unwrap();
        assert_eq!(map.targets().get(a), Some(Pos::new(1, 3)));
        assert_eq!(map.targets().get(b), None);
        assert_eq!(format!("{:?}", map.targets()), "{'A': Pos { r: 1, c: 3 }}");
    }

    #[test]
    fn formatting_map() {
        let level: Level = r"
#####
#a A#
#####
"
        .parse()
        .unwrap();
        let expected = "#####\n#  A#\n#####\n";
        assert_eq!(level.map.to_string(), expected);
        assert_eq!(format!("{:?}", level.map), expected);
        assert_eq!(level.map.grid.to_string(), "#####\n#   #\n#####\n");
    }
}
