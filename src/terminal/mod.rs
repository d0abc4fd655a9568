//! Terminal helpers: escape sequences, cursor handling, and size detection.

mod cursor;
mod escape;
mod size;

pub use cursor::{install_panic_hook, HiddenCursor};
pub use escape::{CLEAR_SCREEN, CURSOR_HOME, HIDE_CURSOR, RESET, SHOW_CURSOR};
pub use size::{auto_width, resolve_width, terminal_size, FALLBACK_SIZE, WIDTH_MARGIN};
