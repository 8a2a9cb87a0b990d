mod stats;
mod transition;
mod visited;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;

use fnv::FnvBuildHasher;

use crate::config::HashKind;
use crate::data::{Dir, MapCell, Pos, DIRECTIONS, MAX_BLOCKS};
use crate::level::Level;
use crate::map::Map;
use crate::moves::Moves;
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::Solve;

pub use self::stats::Stats;
pub use self::visited::{DjbBuildHasher, DjbHasher, StateId, VisitedSet};

use self::stats::Progress;
pub(crate) use self::transition::push_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    TooManyBlocks,
    BlockOutOfBounds(Pos),
    BlockOnWall(Pos),
    OverlappingBlocks(Pos),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::TooManyBlocks => write!(f, "More than {} blocks", MAX_BLOCKS),
            SolverErr::BlockOutOfBounds(pos) => write!(f, "Block outside the map at {}", pos),
            SolverErr::BlockOnWall(pos) => write!(f, "Block on a wall at {}", pos),
            SolverErr::OverlappingBlocks(pos) => write!(f, "Multiple blocks at {}", pos),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if every reachable state was expanded without reaching the goal
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub(crate) hash: HashKind,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, hash: HashKind) -> Self {
        Self { moves, stats, hash }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.hash, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, hash: HashKind, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, hash, print_status)
    }
}

fn solve(level: &Level, hash: HashKind, print_status: bool) -> Result<SolverOk, SolverErr> {
    check_blocks(&level.map, &level.state)?;

    debug!("Searching using {} hash", hash);
    let (moves, stats) = match hash {
        HashKind::Djb => search::<DjbBuildHasher>(&level.map, &level.state, print_status),
        HashKind::Fnv => search::<FnvBuildHasher>(&level.map, &level.state, print_status),
    };
    Ok(SolverOk::new(moves, stats, hash))
}

/// The parser guarantees all of this but levels can also be built by hand.
fn check_blocks(map: &Map, state: &State) -> Result<(), SolverErr> {
    if state.blocks().len() > MAX_BLOCKS {
        return Err(SolverErr::TooManyBlocks);
    }

    let mut occupied: Vec2d<bool> = map.grid.scratchpad();
    for b in state.blocks() {
        match map.grid.get(b.pos) {
            None => return Err(SolverErr::BlockOutOfBounds(b.pos)),
            Some(MapCell::Wall) => return Err(SolverErr::BlockOnWall(b.pos)),
            Some(MapCell::Empty) => {}
        }
        if occupied[b.pos] {
            return Err(SolverErr::OverlappingBlocks(b.pos));
        }
        occupied[b.pos] = true;
    }
    Ok(())
}

/// How a stored state was reached, indexed by `StateId`.
#[derive(Debug, Clone, Copy)]
struct Node {
    prev: Option<(StateId, Dir)>,
    depth: u32,
}

/// Everything the search owns: states, their links and the counters.
///
/// States are never removed, ids are handed out in the order states are found
/// so the id range past the current one is exactly the FIFO queue.
struct SearchContext<S> {
    visited: VisitedSet<S>,
    nodes: Vec<Node>,
    stats: Stats,
}

impl<S: BuildHasher + Default> SearchContext<S> {
    fn new(initial_state: &State) -> Self {
        let mut ctx = SearchContext {
            visited: VisitedSet::with_hasher(S::default()),
            nodes: Vec::new(),
            stats: Stats::new(),
        };
        ctx.visited.insert(initial_state.clone());
        ctx.nodes.push(Node {
            prev: None,
            depth: 0,
        });
        ctx.stats.add_unique(0);
        ctx
    }

    /// Stores `state` unless it was seen before.
    fn add(&mut self, state: State, prev: StateId, dir: Dir) -> Option<StateId> {
        let depth = self.nodes[prev.index()].depth + 1;
        self.stats.add_created(depth);

        match self.visited.insert(state) {
            None => {
                self.stats.add_duplicate(depth);
                None
            }
            Some(id) => {
                debug_assert_eq!(id.index(), self.nodes.len());
                self.nodes.push(Node {
                    prev: Some((prev, dir)),
                    depth,
                });
                self.stats.add_unique(depth);
                Some(id)
            }
        }
    }

    /// Tries all directions, stops at the first successor that is solved.
    fn expand(&mut self, map: &Map, id: StateId) -> Option<StateId> {
        for &dir in &DIRECTIONS {
            let new_state = push_all(map, self.visited.get(id), dir);
            if let Some(new_id) = self.add(new_state, id, dir) {
                if solved(map, self.visited.get(new_id)) {
                    return Some(new_id);
                }
            }
        }
        None
    }
}

fn search<S: BuildHasher + Default>(
    map: &Map,
    initial_state: &State,
    print_status: bool,
) -> (Option<Moves>, Stats) {
    debug!("Search called");

    let mut ctx = SearchContext::<S>::new(initial_state);
    if solved(map, initial_state) {
        debug!("Initial state is solved");
        return (Some(Moves::default()), ctx.stats);
    }

    let mut progress = Progress::new(print_status);
    let mut head = 0;
    while head < ctx.nodes.len() {
        let id = StateId::from_index(head);
        let depth = ctx.nodes[head].depth;
        if ctx.stats.add_expanded(depth) {
            progress.new_depth(&ctx.stats, depth);
        }
        progress.tick(&ctx.stats, depth);

        if let Some(goal) = ctx.expand(map, id) {
            debug!("Solved, backtracking path");
            let moves = backtrack_path(&ctx.nodes, goal);
            return (Some(moves), ctx.stats);
        }
        head += 1;
    }

    debug!("Exhausted {} states", ctx.visited.len());
    (None, ctx.stats)
}

/// Every block whose type has a target must stand on it.
fn solved(map: &Map, state: &State) -> bool {
    state
        .blocks()
        .iter()
        .all(|b| map.targets.get(b.kind).map_or(true, |target| target == b.pos))
}

fn backtrack_path(nodes: &[Node], goal: StateId) -> Moves {
    // a loop rather than recursion - solutions can be long
    let mut dirs = Vec::new();
    let mut cur = goal;
    while let Some((prev, dir)) = nodes[cur.index()].prev {
        dirs.push(dir);
        cur = prev;
    }

    let mut moves = Moves::default();
    for dir in dirs.into_iter().rev() {
        moves.add(dir);
    }
    moves
}
