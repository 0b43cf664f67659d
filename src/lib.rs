//! Dots-and-squares: the rules engine for the classic pencil game.
//!
//! Players take turns claiming edges of a grid of dots. Claiming the fourth
//! edge of a unit square wins that square and an extra turn. The game ends
//! when every square is owned.
//!
//! ## Modules
//!
//! - [`board`] - Board state machine (edges, squares, scores, turn order)
//! - [`config`] - Game setup and validation
//! - [`constants`] - Defaults for games and geometry
//! - [`error`] - Configuration errors
//! - [`layout`] - Pixel geometry and pointer-to-edge mapping
//! - [`palette`] - Player colors
//! - [`playout`] - Random game simulation
//! - [`protocol`] - Line-oriented text protocol
//!
//! ## Example
//!
//! ```
//! use dots_and_squares::board::{Board, Orientation};
//!
//! let mut board = Board::new(1, 1, 2).unwrap();
//! assert!(board.claim_edge(0, 0, 0, Orientation::Horizontal));
//! assert!(board.claim_edge(1, 1, 0, Orientation::Horizontal));
//! assert!(board.claim_edge(0, 0, 0, Orientation::Vertical));
//! assert!(board.claim_edge(1, 0, 1, Orientation::Vertical));
//!
//! assert!(board.is_game_over());
//! assert_eq!(board.scores(), &[0, 1]);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod palette;
pub mod playout;
pub mod protocol;
