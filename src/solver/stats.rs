use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::config::PROGRESS_BATCH;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    unique_states: Vec<usize>,
    expanded_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn total_unique(&self) -> usize {
        self.unique_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_unique(&mut self, depth: u32) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    /// Returns true when this is the first state at `depth`.
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn at(counts: &[usize], depth: usize) -> usize {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique by depth: {:?}", self.unique_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Unique states total: {}", self.total_unique().separated_string())?;
        writeln!(f, "Expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Duplicates", "Unique", "Expanded"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        // the root is unique but not created so unique is the longest
        let depths = self.unique_states.len().max(self.created_states.len());
        for depth in 0..depths {
            let counts = [
                Self::at(&self.created_states, depth),
                Self::at(&self.duplicate_states, depth),
                Self::at(&self.unique_states, depth),
                Self::at(&self.expanded_states, depth),
            ];
            let mut cells = vec![Cell::new(&format!("{}:", depth))];
            cells.extend(counts.iter().map(|c| Cell::new(&c.separated_string())));
            table.add_row(Row::new(cells));
        }
        write!(f, "{}", table)
    }
}

/// Logs how far the search got, at most once per interval.
pub(crate) struct Progress {
    enabled: bool,
    interval: Duration,
    since_check: usize,
    last_report: Instant,
}

impl Progress {
    pub(crate) fn new(enabled: bool) -> Self {
        Self::with_interval(enabled, Duration::from_secs(1))
    }

    pub(crate) fn with_interval(enabled: bool, interval: Duration) -> Self {
        Progress {
            enabled,
            interval,
            since_check: 0,
            last_report: Instant::now(),
        }
    }

    /// Called once per expanded state, only looks at the clock once per batch.
    pub(crate) fn tick(&mut self, stats: &Stats, depth: u32) {
        if !self.enabled {
            return;
        }
        self.since_check += 1;
        if self.since_check < PROGRESS_BATCH {
            return;
        }
        self.since_check = 0;

        let now = Instant::now();
        if now.duration_since(self.last_report) >= self.interval {
            info!(
                "Expanded states: {}, stored states: {}, current depth: {}",
                stats.total_expanded().separated_string(),
                stats.total_unique().separated_string(),
                depth
            );
            self.last_report = now;
        }
    }

    pub(crate) fn new_depth(&self, stats: &Stats, depth: u32) {
        if self.enabled {
            info!(
                "Reached depth {} after expanding {} states",
                depth,
                stats.total_expanded().separated_string()
            );
        }
    }
}
