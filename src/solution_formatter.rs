use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Map;
use crate::moves::Moves;
use crate::solver::push_all;
use crate::state::State;

/// Renders the initial grid and then the grid after every move.
pub struct SolutionFormatter<'a> {
    map: &'a Map,
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(map: &'a Map, initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            map,
            initial_state,
            moves,
        }
    }

    /// Replays the moves and returns every state including the initial one.
    pub(crate) fn states(&self) -> Vec<State> {
        let mut states = vec![self.initial_state.clone()];
        for &dir in self.moves {
            let next = push_all(self.map, &states[states.len() - 1], dir);
            states.push(next);
        }
        states
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let states = self.states();
        writeln!(f, "{}", self.map.format_with_state(&states[0]))?;
        for (i, (dir, state)) in self.moves.iter().zip(&states[1..]).enumerate() {
            writeln!(f, "{}/{} {}:", i + 1, self.moves.move_cnt(), dir)?;
            writeln!(f, "{}", self.map.format_with_state(state))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Bounds, HashKind};
    use crate::level::Level;
    use crate::{LoadLevel, Solve};

    #[test]
    fn corridor_steps() {
        let level: Level = "#a A #".parse().unwrap();
        let moves = level.solve(HashKind::Djb, false).unwrap().moves.unwrap();
        let expected = "\
#a A #

1/2 Right:
# aA #

2/2 Right:
#  a #

";
        assert_eq!(level.solution(&moves).to_string(), expected);
    }

    #[test]
    fn replay_ends_solved() {
        for name in &["reference", "two-blocks", "three-blocks"] {
            let level = format!("levels/{}.txt", name)
                .load_level(&Bounds::default())
                .unwrap();
            let moves = level.solve(HashKind::Djb, false).unwrap().moves.unwrap();
            let states = level.solution(&moves).states();
            assert_eq!(states.len(), moves.move_cnt() + 1);

            let last = &states[states.len() - 1];
            for b in last.blocks() {
                if let Some(target) = level.map.targets().get(b.kind) {
                    assert_eq!(b.pos, target, "{}", name);
                }
            }
        }
    }
}
