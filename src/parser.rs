use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Bounds;
use crate::data::{Block, BlockType, MapCell, Pos};
use crate::level::Level;
use crate::map::{Map, Targets};
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    /// Invalid character at [row, column]
    Pos(usize, usize),
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    TooLarge,
    TooManyBlocks,
    Empty,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::RowWidth {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Row {} is {} cells wide, expected {}",
                row, actual, expected
            ),
            ParserErr::TooLarge => write!(f, "Map larger than allowed rows/columns"),
            ParserErr::TooManyBlocks => write!(f, "Too many blocks"),
            ParserErr::Empty => write!(f, "No rows"),
        }
    }
}

impl std::error::Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, &Bounds::default())
    }
}

pub(crate) fn parse(level: &str, bounds: &Bounds) -> Result<Level, ParserErr> {
    let mut grid = Vec::new();
    let mut targets = Targets::default();
    let mut blocks = Vec::new();
    let mut width = bounds.width.map(usize::from);

    // blank lines don't count as rows - also lets tests use raw strings
    let rows = level
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty());

    for (r, line) in rows.enumerate() {
        if r >= usize::from(bounds.max_rows) {
            return Err(ParserErr::TooLarge);
        }

        let actual = line.chars().count();
        let expected = *width.get_or_insert(actual);
        if actual > usize::from(bounds.max_cols) {
            return Err(ParserErr::TooLarge);
        }
        if actual != expected {
            return Err(ParserErr::RowWidth {
                row: r,
                expected,
                actual,
            });
        }

        let mut row = Vec::with_capacity(actual);
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r as u8, c as u8);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                ' ' => MapCell::Empty,
                _ => {
                    if let Some(kind) = BlockType::from_target_char(cur_char) {
                        if let Some(prev) = targets.set(kind, pos) {
                            warn!(
                                "Target {} at {} replaces the one at {}",
                                cur_char, pos, prev
                            );
                        }
                    } else if let Some(kind) = BlockType::from_block_char(cur_char) {
                        if blocks.len() >= bounds.max_blocks {
                            return Err(ParserErr::TooManyBlocks);
                        }
                        blocks.push(Block::new(pos, kind));
                    } else {
                        return Err(ParserErr::Pos(r, c));
                    }
                    MapCell::Empty
                }
            };
            row.push(cell);
        }
        grid.push(row);
    }

    if grid.is_empty() || grid[0].is_empty() {
        return Err(ParserErr::Empty);
    }

    Ok(Level::new(
        Map::new(Vec2d::new(&grid), targets),
        State::new(blocks),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_copy() {
        let err = ParserErr::RowWidth {
            row: 2,
            expected: 7,
            actual: 8,
        };
        let copy = err;
        assert_eq!(err, copy);
    }

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\n\n\n", ParserErr::Empty);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#aX #
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn fail_letters_past_g() {
        assert_failure("#h A#", ParserErr::Pos(0, 1));
        assert_failure("#a H#", ParserErr::Pos(0, 3));
    }

    #[test]
    fn fail_row_width() {
        let level = r"
#####
#a A
#####
";
        assert_failure(
            level,
            ParserErr::RowWidth {
                row: 1,
                expected: 5,
                actual: 4,
            },
        );
    }

    #[test]
    fn fail_declared_width() {
        let bounds = Bounds {
            width: Some(9),
            ..Bounds::default()
        };
        let level = "#####\n#a A#\n#####\n";
        assert_eq!(
            parse(level, &bounds).unwrap_err(),
            ParserErr::RowWidth {
                row: 0,
                expected: 9,
                actual: 5,
            }
        );
    }

    #[test]
    fn fail_too_large() {
        let bounds = Bounds {
            max_rows: 2,
            ..Bounds::default()
        };
        assert_eq!(
            parse("###\n#a#\n###\n", &bounds).unwrap_err(),
            ParserErr::TooLarge
        );
        assert_failure(&"#".repeat(17), ParserErr::TooLarge);
    }

    #[test]
    fn fail_too_many_blocks() {
        assert_failure("#aaaaaaaaa#", ParserErr::TooManyBlocks);
    }

    #[test]
    fn windows_line_endings() {
        let level: Level = "#####\r\n#a A#\r\n#####\r\n".parse().unwrap();
        assert_eq!(level.to_string(), "#####\n#a A#\n#####\n");
    }

    #[test]
    fn blocks_and_targets() {
        let level = r"
#########
#a  b  A#

#  c  B #
#########


";
        let level: Level = level.parse().unwrap();
        assert_eq!(level.map.rows(), 4);
        assert_eq!(level.map.cols(), 9);

        let kinds: Vec<_> = level
            .state
            .blocks()
            .iter()
            .map(|b| (b.pos, b.kind.raw()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Pos::new(1, 1), 1),
                (Pos::new(1, 4), 2),
                (Pos::new(2, 3), 3),
            ]
        );

        let targets = level.map.targets();
        assert_eq!(targets.get(BlockType::new(1).unwrap()), Some(Pos::new(1, 7)));
        assert_eq!(targets.get(BlockType::new(2).unwrap()), Some(Pos::new(2, 6)));
        assert_eq!(targets.get(BlockType::new(3).unwrap()), None);
    }

    #[test]
    fn later_target_wins() {
        let level: Level = "#A aA#".parse().unwrap();
        assert_eq!(
            level.map.targets().get(BlockType::new(1).unwrap()),
            Some(Pos::new(0, 4))
        );
    }

    #[test]
    fn reference_instance() {
        let level = r"
#########
#   #   #
# a   b #
### # ###
# B   A #
#   #   #
#########
";
        assert_success(level);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str) {
        let level: Level = input_level.parse().unwrap();
        assert_eq!(level.to_string(), input_level.trim_start_matches('\n'));
    }
}
