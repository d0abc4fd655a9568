//! Terminal size detection.

/// Size used when stdout is not a terminal.
pub const FALLBACK_SIZE: (u16, u16) = (120, 40);

/// Columns left free when the width is picked automatically.
pub const WIDTH_MARGIN: u16 = 2;

/// Current terminal size as (columns, rows), or [`FALLBACK_SIZE`].
pub fn terminal_size() -> (u16, u16) {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), terminal_size::Height(h))) => (w, h),
        None => {
            log::debug!("stdout is not a terminal, assuming {:?}", FALLBACK_SIZE);
            FALLBACK_SIZE
        }
    }
}

/// Resolve the render width: an explicit non-zero `requested` wins,
/// otherwise the terminal width minus [`WIDTH_MARGIN`].
pub fn resolve_width(requested: u32) -> u32 {
    if requested > 0 {
        return requested;
    }
    auto_width(terminal_size().0)
}

/// Width used for a terminal that is `columns` wide.
pub fn auto_width(columns: u16) -> u32 {
    columns.saturating_sub(WIDTH_MARGIN) as u32
}
