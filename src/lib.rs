pub mod framework;
pub mod gomoku;
pub mod util;
