//! The dots-and-squares board state machine.
//!
//! A board of `rows × cols` squares has three ownership grids:
//! - horizontal edges, `(rows + 1) × cols`; edge `(i, j)` lies above square row `i`
//! - vertical edges, `rows × (cols + 1)`; edge `(i, j)` lies left of square `(i, j)`
//! - squares, `rows × cols`
//!
//! Claiming the fourth edge of a square awards it to the claiming player and
//! that player keeps the turn. Any other legal claim passes the turn on.

use std::fmt;

use tracing::{debug, info};

use crate::config::{GameConfig, check_size};
use crate::constants::{DEFAULT_COLS, DEFAULT_PLAYERS, DEFAULT_ROWS};
use crate::error::ConfigError;

/// Index of a player, in `0..n_players`.
pub type PlayerId = usize;

/// Owner of an edge or square; `None` while unclaimed.
pub type Ownership = Option<PlayerId>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single claimable edge, addressed in its orientation's grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Edge {
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{o}({},{})", self.row, self.col)
    }
}

/// Whether a claim must come from the player whose turn it is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TurnPolicy {
    /// Any known player may claim; only turn advancement follows the order.
    #[default]
    Lenient,
    /// Claims from anyone but the current player are rejected.
    Strict,
}

/// Why a claim was refused. The board is unchanged in every case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Coordinates lie outside the edge grid for that orientation
    OutOfRange,
    /// Edge already has an owner
    AlreadyClaimed,
    /// Player id is not below the player count
    UnknownPlayer,
    /// Strict policy and the claimant is not the current player
    OutOfTurn,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OutOfRange => write!(f, "illegal move: edge out of range"),
            Rejection::AlreadyClaimed => write!(f, "illegal move: edge already claimed"),
            Rejection::UnknownPlayer => write!(f, "illegal move: unknown player"),
            Rejection::OutOfTurn => write!(f, "illegal move: not this player's turn"),
        }
    }
}

/// Result of [`Board::claim`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Rejected(Rejection),
    /// Edge taken, no square closed, turn passed to the next player.
    Passed,
    /// Edge taken and it closed one or two squares; the claimant moves again.
    Completed(u8),
}

impl ClaimOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ClaimOutcome::Rejected(_))
    }

    pub fn completed(&self) -> u8 {
        match self {
            ClaimOutcome::Completed(n) => *n,
            _ => 0,
        }
    }
}

/// Row-major grid of ownership cells.
#[derive(Clone, Debug)]
struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Ownership>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// `None` when out of range, otherwise the cell's ownership.
    fn get(&self, row: usize, col: usize) -> Option<Ownership> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    fn is_claimed(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Callers check the range first.
    fn set(&mut self, row: usize, col: usize, owner: PlayerId) {
        let Some(i) = self.idx(row, col) else {
            unreachable!("cell ({row}, {col}) outside {}x{} grid", self.rows, self.cols);
        };
        self.cells[i] = Some(owner);
    }
}

/// The full game state: edges, squares, scores and whose turn it is.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    n_players: usize,
    policy: TurnPolicy,
    horizontal: Grid,
    vertical: Grid,
    squares: Grid,
    scores: Vec<u32>,
    current: PlayerId,
    claimed_squares: usize,
    claimed_edges: usize,
}

impl Board {
    /// Create an empty board with the lenient turn policy.
    pub fn new(rows: usize, cols: usize, n_players: usize) -> Result<Self, ConfigError> {
        Self::with_policy(rows, cols, n_players, TurnPolicy::Lenient)
    }

    pub fn with_policy(
        rows: usize,
        cols: usize,
        n_players: usize,
        policy: TurnPolicy,
    ) -> Result<Self, ConfigError> {
        check_size(rows, cols, n_players)?;
        info!(rows, cols, n_players, ?policy, "new board");
        Ok(Self::empty(rows, cols, n_players, policy))
    }

    /// Empty board; sizes must already have passed `check_size`.
    fn empty(rows: usize, cols: usize, n_players: usize, policy: TurnPolicy) -> Self {
        Self {
            rows,
            cols,
            n_players,
            policy,
            horizontal: Grid::new(rows + 1, cols),
            vertical: Grid::new(rows, cols + 1),
            squares: Grid::new(rows, cols),
            scores: vec![0; n_players],
            current: 0,
            claimed_squares: 0,
            claimed_edges: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_policy(config.rows, config.cols, config.n_players, config.policy)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn n_players(&self) -> usize {
        self.n_players
    }

    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.scores.get(player).copied()
    }

    /// Owner of square `(row, col)`; `None` for both unclaimed and out of range.
    pub fn square(&self, row: usize, col: usize) -> Ownership {
        self.squares.get(row, col).flatten()
    }

    /// Owner of an edge. The outer `None` means the edge does not exist.
    pub fn edge(&self, edge: Edge) -> Option<Ownership> {
        self.edge_grid(edge.orientation).get(edge.row, edge.col)
    }

    pub fn horizontal_edge(&self, row: usize, col: usize) -> Ownership {
        self.horizontal.get(row, col).flatten()
    }

    pub fn vertical_edge(&self, row: usize, col: usize) -> Ownership {
        self.vertical.get(row, col).flatten()
    }

    pub fn claimed_squares(&self) -> usize {
        self.claimed_squares
    }

    pub fn claimed_edges(&self) -> usize {
        self.claimed_edges
    }

    /// Total number of edges on the board.
    pub fn edge_count(&self) -> usize {
        (self.rows + 1) * self.cols + self.rows * (self.cols + 1)
    }

    /// Every unclaimed edge, horizontal edges first, each in row-major order.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let h = (0..=self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Edge::horizontal(r, c)));
        let v = (0..self.rows)
            .flat_map(move |r| (0..=self.cols).map(move |c| Edge::vertical(r, c)));
        h.chain(v).filter(move |e| self.edge(*e) == Some(None))
    }

    /// True once every square has an owner.
    pub fn is_game_over(&self) -> bool {
        self.claimed_squares == self.rows * self.cols
    }

    /// Players tied on the highest score, in id order.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let best = self.scores.iter().copied().max().unwrap_or(0);
        (0..self.n_players)
            .filter(|&p| self.scores[p] == best)
            .collect()
    }

    /// Claim an edge for `player`. Returns whether the claim was accepted.
    ///
    /// With [`TurnPolicy::Lenient`] the claim is accepted and scored under
    /// `player` even when it is not `player`'s turn.
    pub fn claim_edge(
        &mut self,
        player: PlayerId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        self.claim(
            player,
            Edge {
                orientation,
                row,
                col,
            },
        )
        .is_accepted()
    }

    /// Claim an edge for `player`, reporting what happened.
    pub fn claim(&mut self, player: PlayerId, edge: Edge) -> ClaimOutcome {
        if let Err(reason) = self.check_claim(player, edge) {
            debug!(player, %edge, %reason, "claim rejected");
            return ClaimOutcome::Rejected(reason);
        }

        match edge.orientation {
            Orientation::Horizontal => self.horizontal.set(edge.row, edge.col, player),
            Orientation::Vertical => self.vertical.set(edge.row, edge.col, player),
        }
        self.claimed_edges += 1;

        let mut completed = 0;
        for (row, col) in self.adjacent_squares(edge) {
            if self.complete_square(row, col, player) {
                completed += 1;
            }
        }

        if completed == 0 {
            self.current = (self.current + 1) % self.n_players;
            debug!(player, %edge, next = self.current, "edge claimed");
            return ClaimOutcome::Passed;
        }

        debug!(player, %edge, completed, "edge claimed, squares completed");
        if self.is_game_over() {
            info!(scores = ?self.scores, leaders = ?self.leaders(), "game over");
        }
        ClaimOutcome::Completed(completed)
    }

    fn check_claim(&self, player: PlayerId, edge: Edge) -> Result<(), Rejection> {
        if player >= self.n_players {
            return Err(Rejection::UnknownPlayer);
        }
        match self.edge(edge) {
            None => return Err(Rejection::OutOfRange),
            Some(Some(_)) => return Err(Rejection::AlreadyClaimed),
            Some(None) => {}
        }
        if self.policy == TurnPolicy::Strict && player != self.current {
            return Err(Rejection::OutOfTurn);
        }
        Ok(())
    }

    fn edge_grid(&self, orientation: Orientation) -> &Grid {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Squares touching `edge`, lower index first.
    fn adjacent_squares(&self, edge: Edge) -> Vec<(usize, usize)> {
        let Edge { row, col, .. } = edge;
        let (before, after) = match edge.orientation {
            Orientation::Horizontal => (row.checked_sub(1).map(|r| (r, col)), (row, col)),
            Orientation::Vertical => (col.checked_sub(1).map(|c| (row, c)), (row, col)),
        };
        before
            .into_iter()
            .chain(std::iter::once(after))
            .filter(|&(r, c)| r < self.rows && c < self.cols)
            .collect()
    }

    /// Award square `(row, col)` to `player` if all four of its edges are
    /// claimed. No-op on a square that already has an owner.
    fn complete_square(&mut self, row: usize, col: usize, player: PlayerId) -> bool {
        if self.squares.get(row, col) != Some(None) {
            return false;
        }
        let closed = self.horizontal.is_claimed(row, col)
            && self.horizontal.is_claimed(row + 1, col)
            && self.vertical.is_claimed(row, col)
            && self.vertical.is_claimed(row, col + 1);
        if !closed {
            return false;
        }
        self.squares.set(row, col, player);
        self.scores[player] += 1;
        self.claimed_squares += 1;
        true
    }
}

impl Default for Board {
    /// The default 6x6 two-player game.
    fn default() -> Self {
        Self::empty(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            DEFAULT_PLAYERS,
            TurnPolicy::Lenient,
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..=self.rows {
            for c in 0..self.cols {
                let line = if self.horizontal_edge(r, c).is_some() {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{line}")?;
            }
            writeln!(f, "+")?;
            if r == self.rows {
                break;
            }
            for c in 0..=self.cols {
                let wall = if self.vertical_edge(r, c).is_some() {
                    '|'
                } else {
                    ' '
                };
                write!(f, "{wall}")?;
                if c < self.cols {
                    match self.square(r, c) {
                        Some(p) => write!(f, "{p:^3}")?,
                        None => write!(f, "   ")?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
