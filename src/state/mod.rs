pub mod board_view;
pub mod touch;

pub use board_view::{Banner, BoardView, HoleView};
pub use touch::{InputSource, TouchGate};
