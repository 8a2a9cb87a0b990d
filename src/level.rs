use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Map;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: Map,
    pub state: State,
}

impl Level {
    pub fn new(map: Map, state: State) -> Self {
        Level { map, state }
    }

    pub fn format(&self) -> MapFormatter<'_> {
        self.map.format_with_state(&self.state)
    }

    pub fn solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_level() {
        let input: &str = r"
#########
#a  b  A#
#   B   #
#########
"
        .trim_start_matches('\n');

        let level: Level = input.parse().unwrap();
        assert_eq!(level.to_string(), input);
        assert_eq!(format!("{}", level), input);
        assert_eq!(format!("{:?}", level), input);
        assert_eq!(level.format().to_string(), input);
        assert_eq!(level.map.format_with_state(&level.state).to_string(), input);
    }
}
