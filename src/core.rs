pub mod definitions;
pub mod engine;
pub mod errors;
mod pieces;
pub mod utils;
