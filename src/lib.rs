pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::definitions::{Cell, Color, Piece, PieceType, Position};
pub use crate::core::engine::Board;
pub use crate::core::errors::BoardError;
