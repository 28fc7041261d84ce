//! Line layout and run counting for the full-board win/lead scan.
//!
//! Every move rescans the whole board, one line at a time, in a fixed order:
//! verticals, horizontals, ascending diagonals, descending diagonals. The
//! order matters. The first run that reaches the winning count ends the scan,
//! and tie detection depends on which runs were seen before it.

use super::{Board, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Bottom to top
    Vertical,
    /// Left to right
    Horizontal,
    /// Bottom-left to top-right
    Ascending,
    /// Top-left to bottom-right
    Descending,
}

impl Direction {
    /// Column and row deltas of one step along the line
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::Ascending => (1, 1),
            Direction::Descending => (1, -1),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Direction::Vertical => "COL",
            Direction::Horizontal => "ROW",
            Direction::Ascending => "ASC",
            Direction::Descending => "DSC",
        }
    }
}

/// A straight run of cells through the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub direction: Direction,
    pub start: (usize, usize),
    pub len: usize,
}

impl Line {
    /// `(column, row)` coordinates along the line
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dc, dr) = self.direction.step();
        let (col, row) = self.start;
        (0..self.len).map(move |i| {
            let i = i as isize;
            (
                (col as isize + dc * i) as usize,
                (row as isize + dr * i) as usize,
            )
        })
    }
}

/// All lines of a `columns` x `rows` board in scan order.
pub fn scan_lines(columns: usize, rows: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(3 * (columns + rows));

    for col in 0..columns {
        lines.push(Line {
            direction: Direction::Vertical,
            start: (col, 0),
            len: rows,
        });
    }

    for row in 0..rows {
        lines.push(Line {
            direction: Direction::Horizontal,
            start: (0, row),
            len: columns,
        });
    }

    // Ascending: left edge from the top down, then the bottom edge.
    for row in (1..rows).rev() {
        lines.push(Line {
            direction: Direction::Ascending,
            start: (0, row),
            len: (rows - row).min(columns),
        });
    }
    for col in 0..columns {
        lines.push(Line {
            direction: Direction::Ascending,
            start: (col, 0),
            len: rows.min(columns - col),
        });
    }

    // Descending: left edge from the bottom up, then the top edge.
    for row in 0..rows {
        lines.push(Line {
            direction: Direction::Descending,
            start: (0, row),
            len: (row + 1).min(columns),
        });
    }
    for col in 1..columns {
        lines.push(Line {
            direction: Direction::Descending,
            start: (col, rows - 1),
            len: rows.min(columns - col),
        });
    }

    lines
}

/// Best run seen so far and whether another player matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTracker {
    pub count: usize,
    pub player: PlayerId,
    pub tied: bool,
}

impl LeadTracker {
    /// Seed the tracker with the opening move.
    pub fn new(player: PlayerId) -> Self {
        LeadTracker {
            count: 1,
            player,
            tied: false,
        }
    }

    /// Report a run. Ties are only checked against the tracked best.
    pub fn observe(&mut self, run: usize, player: PlayerId) {
        if run > self.count {
            self.count = run;
            self.player = player;
            self.tied = false;
        } else if run == self.count && player != self.player {
            self.tied = true;
        }
    }
}

/// Scan `lines` in order, feeding every run to `lead`. Returns the first
/// player whose run reaches exactly `winning_count`.
pub fn scan(
    board: &Board,
    lines: &[Line],
    winning_count: usize,
    lead: &mut LeadTracker,
) -> Option<PlayerId> {
    for line in lines {
        if let Some(winner) = scan_line(board, line, winning_count, lead) {
            return Some(winner);
        }
    }
    None
}

fn scan_line(
    board: &Board,
    line: &Line,
    winning_count: usize,
    lead: &mut LeadTracker,
) -> Option<PlayerId> {
    let mut cells = line.cells();
    let (col, row) = cells.next()?;

    // The first cell seeds the run without being reported
    let mut prev = board.get(col, row);
    let mut run = usize::from(prev.is_some());

    for (col, row) in cells {
        let cell = board.get(col, row);
        let Some(player) = cell else {
            // Columns are packed, nothing sits above a gap
            if line.direction == Direction::Vertical {
                break;
            }
            run = 0;
            prev = None;
            continue;
        };

        run = if prev == cell { run + 1 } else { 1 };
        prev = cell;

        lead.observe(run, player);
        if run == winning_count {
            log::trace!(
                "{} line from {:?}: {} reached {}",
                line.direction.label(),
                line.start,
                player,
                run
            );
            return Some(player);
        }
    }

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("{}:{}", line.direction.label(), describe(board, line));
    }
    None
}

/// `[col,row]` listing of a line with occupants, for trace output
fn describe(board: &Board, line: &Line) -> String {
    line.cells()
        .map(|(col, row)| match board.get(col, row) {
            Some(player) => format!("[{},{}={}]", col, row, player.index() + 1),
            None => format!("[{},{}]", col, row),
        })
        .collect()
}
