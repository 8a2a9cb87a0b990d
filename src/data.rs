use std::fmt::{self, Display, Formatter};

/// Blocks per state, the encoding and scratch maps are sized for it.
pub(crate) const MAX_BLOCKS: usize = 8;

/// Block types are `a..=g` / `A..=G`, stored as 1..=7.
pub(crate) const MAX_TYPES: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Empty => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
        }
    }
}

/// Row-major: deriving `Ord` with `r` first gives the canonical order (y, then x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// `None` when the step would leave the coordinate space,
    /// the upper bound is checked against the grid by the caller.
    pub(crate) fn step(self, dir: Dir) -> Option<Pos> {
        let (r, c) = match dir {
            Dir::Up => (self.r.checked_sub(1)?, self.c),
            Dir::Right => (self.r, self.c.checked_add(1)?),
            Dir::Down => (self.r.checked_add(1)?, self.c),
            Dir::Left => (self.r, self.c.checked_sub(1)?),
        };
        Some(Pos::new(r, c))
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// The order in which the search tries directions.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Dir {
    /// Blocks are processed in ascending canonical order when pushing
    /// towards the origin and in descending order otherwise
    /// so a whole run of blocks slides together.
    pub(crate) fn towards_origin(self) -> bool {
        match self {
            Dir::Left | Dir::Up => true,
            Dir::Right | Dir::Down => false,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Left => write!(f, "Left"),
            Dir::Right => write!(f, "Right"),
            Dir::Up => write!(f, "Up"),
            Dir::Down => write!(f, "Down"),
        }
    }
}

/// 1..=MAX_TYPES, `a`/`A` is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockType(u8);

impl BlockType {
    pub fn new(raw: u8) -> Option<BlockType> {
        if raw >= 1 && raw <= MAX_TYPES {
            Some(BlockType(raw))
        } else {
            None
        }
    }

    pub(crate) fn from_block_char(c: char) -> Option<BlockType> {
        if c >= 'a' && c <= 'z' {
            Self::new(c as u8 - b'a' + 1)
        } else {
            None
        }
    }

    pub(crate) fn from_target_char(c: char) -> Option<BlockType> {
        if c >= 'A' && c <= 'Z' {
            Self::new(c as u8 - b'A' + 1)
        } else {
            None
        }
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }

    pub(crate) fn block_char(self) -> char {
        (b'a' + self.0 - 1) as char
    }

    pub(crate) fn target_char(self) -> char {
        (b'A' + self.0 - 1) as char
    }
}

/// Field order matters - the derived `Ord` sorts by position first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    pub pos: Pos,
    pub kind: BlockType,
}

impl Block {
    pub fn new(pos: Pos, kind: BlockType) -> Block {
        Block { pos, kind }
    }
}
