use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// Whole-grid pushes from the initial state to the goal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{} ", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Left, Dir::Right, Dir::Up, Dir::Down]);
        assert_eq!(moves.to_string(), "Left Right Up Down ");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn adding_and_iterating() {
        let mut moves = Moves::default();
        moves.add(Dir::Up);
        moves.add(Dir::Left);
        assert_eq!(moves.move_cnt(), 2);

        let mut v = Vec::new();
        for &m in &moves {
            v.push(m);
        }
        for &m in moves.iter() {
            v.push(m);
        }
        for m in moves {
            v.push(m);
        }
        assert_eq!(v, vec![Dir::Up, Dir::Left, Dir::Up, Dir::Left, Dir::Up, Dir::Left]);
    }
}
