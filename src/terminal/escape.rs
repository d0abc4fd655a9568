//! ANSI escape sequences written around rendered frames.

pub use crate::ascii::RESET;

/// Move the cursor to row 1, column 1.
pub const CURSOR_HOME: &str = "\x1b[1;1H";

/// Erase the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Hide the cursor (DECTCEM).
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the cursor (DECTCEM).
pub const SHOW_CURSOR: &str = "\x1b[?25h";
