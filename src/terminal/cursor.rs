//! Cursor visibility with panic-safe cleanup.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use super::escape::{HIDE_CURSOR, RESET, SHOW_CURSOR};

/// Static flag to track if the cursor is hidden (for panic handler)
pub(crate) static CURSOR_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Guard that hides the cursor and shows it again on drop.
///
/// Wraps the writer that frames are drawn to, so normal exits, early `?`
/// returns, and panics all leave the terminal with a visible cursor.
pub struct HiddenCursor<W: Write> {
    out: W,
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl<W: Write> HiddenCursor<W> {
    /// Hide the cursor on `out` and return a guard that restores it.
    pub fn enter(mut out: W) -> io::Result<Self> {
        install_panic_hook();

        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        CURSOR_HIDDEN.store(true, Ordering::SeqCst);

        Ok(Self { out, active: true })
    }

    /// The wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Show the cursor now and report write errors.
    /// After calling this, the guard's drop will be a no-op.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            CURSOR_HIDDEN.store(false, Ordering::SeqCst);
            self.out.write_all(RESET.as_bytes())?;
            self.out.write_all(SHOW_CURSOR.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        // Best-effort cleanup - ignore errors during drop
        let _ = self.exit();
    }
}

/// Install a panic hook that resets colors and shows the cursor before the
/// panic message is printed.
pub fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(RESET.as_bytes());
            let _ = stdout.write_all(SHOW_CURSOR.as_bytes());
            let _ = stdout.flush();
        }

        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_hides_then_shows() {
        let mut out = Vec::new();
        {
            let mut guard = HiddenCursor::enter(&mut out).unwrap();
            guard.get_mut().write_all(b"frame").unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}frame{}{}", HIDE_CURSOR, RESET, SHOW_CURSOR));
    }

    #[test]
    fn test_manual_exit_makes_drop_noop() {
        let mut out = Vec::new();
        {
            let mut guard = HiddenCursor::enter(&mut out).unwrap();
            guard.exit().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(SHOW_CURSOR).count(), 1);
    }

    #[test]
    fn test_panic_hook_installation() {
        install_panic_hook();
        install_panic_hook(); // Second call should be no-op
    }
}
