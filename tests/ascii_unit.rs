//! Unit tests for the pixel-to-text pipeline.
//!
//! These tests cover:
//! - Luminance and glyph selection
//! - Nearest-neighbor resampling
//! - Line assembly in each render mode

use ascii_view::ascii::*;

fn gradient(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb::gray(v)
    })
    .unwrap()
}

// ==================== Luminance Tests ====================

#[test]
fn test_luminance_primaries() {
    assert!((luminance(Rgb::new(255, 0, 0)) - 76.245).abs() < 1e-9);
    assert!((luminance(Rgb::new(0, 255, 0)) - 149.685).abs() < 1e-9);
    assert!((luminance(Rgb::new(0, 0, 255)) - 29.07).abs() < 1e-9);
}

#[test]
fn test_luminance_index_extremes() {
    assert_eq!(luminance_index(0, 0, 0, 10), 0);
    assert_eq!(luminance_index(255, 255, 255, 10), 9);
}

#[test]
fn test_luminance_index_rounds_to_nearest() {
    // Pure red: 76.245 / 255 * 9 = 2.69 -> 3
    assert_eq!(luminance_index(255, 0, 0, 10), 3);
    // Mid gray: 128 / 255 * 9 = 4.52 -> 5
    assert_eq!(luminance_index(128, 128, 128, 10), 5);
}

#[test]
fn test_single_glyph_ramp_always_index_zero() {
    for v in [0u8, 17, 128, 255] {
        assert_eq!(luminance_index(v, v, v, 1), 0);
    }
}

// ==================== Resampling Tests ====================

#[test]
fn test_resample_output_size() {
    let source = gradient(64, 48);
    let out = resample(&source, 20, 10).unwrap();
    assert_eq!(out.width(), 20);
    assert_eq!(out.height(), 10);
}

#[test]
fn test_resample_picks_top_left_of_cell() {
    // 4x4 source where each pixel encodes its own coordinates
    let source = PixelGrid::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
    let out = resample(&source, 2, 2).unwrap();
    assert_eq!(out.get(0, 0), Rgb::new(0, 0, 0));
    assert_eq!(out.get(1, 0), Rgb::new(2, 0, 0));
    assert_eq!(out.get(0, 1), Rgb::new(0, 2, 0));
    assert_eq!(out.get(1, 1), Rgb::new(2, 2, 0));
}

#[test]
fn test_resample_upscale_repeats_pixels() {
    let source = PixelGrid::from_fn(2, 1, |x, _| Rgb::gray(x as u8 * 200)).unwrap();
    let out = resample(&source, 4, 1).unwrap();
    let row: Vec<Rgb> = out.row(0).collect();
    assert_eq!(
        row,
        vec![Rgb::gray(0), Rgb::gray(0), Rgb::gray(200), Rgb::gray(200)]
    );
}

#[test]
fn test_resample_zero_target_rejected() {
    let source = gradient(8, 8);
    assert!(matches!(
        resample(&source, 0, 4),
        Err(ascii_view::ViewError::InvalidDimension { .. })
    ));
}

#[test]
fn test_target_dimensions_one_row_minimum() {
    assert_eq!(target_dimensions(1).unwrap(), (1, 1));
    assert_eq!(target_dimensions(3).unwrap(), (3, 1));
    assert_eq!(target_dimensions(120).unwrap(), (120, 60));
}

// ==================== Render Tests ====================

#[test]
fn test_all_black_uses_first_glyph() {
    let grid = PixelGrid::filled(3, 2, Rgb::BLACK).unwrap();
    let renderer = Renderer::new(CharSet::Standard.ramp());
    let frame = renderer.render(&grid, RenderMode::Character);

    for line in frame.lines() {
        assert_eq!(line.matches("\x1b[38;2;0;0;0m ").count(), 3);
        assert!(line.ends_with(RESET));
    }
}

#[test]
fn test_all_white_uses_last_glyph() {
    let grid = PixelGrid::filled(3, 2, Rgb::WHITE).unwrap();
    let renderer = Renderer::new(CharSet::Standard.ramp());
    let frame = renderer.render(&grid, RenderMode::Character);

    for line in frame.lines() {
        assert_eq!(line.matches("\x1b[38;2;255;255;255m@").count(), 3);
    }
}

#[test]
fn test_gradient_glyphs_are_monotonic() {
    let grid = gradient(10, 1);
    let ramp = CharSet::Standard.ramp();
    let renderer = Renderer::new(ramp.clone());
    let frame = renderer.render(&grid, RenderMode::Character);

    let glyphs: Vec<usize> = frame.lines()[0]
        .split('m')
        .filter_map(|chunk| chunk.chars().next())
        .filter(|c| *c != '\x1b')
        .filter_map(|c| ramp.as_chars().iter().position(|g| *g == c))
        .collect();
    assert_eq!(glyphs.len(), 10);
    assert!(glyphs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(glyphs[0], 0);
    assert_eq!(glyphs[9], ramp.len() - 1);
}

#[test]
fn test_line_counts_per_mode() {
    let even = PixelGrid::filled(4, 6, Rgb::BLACK).unwrap();
    let odd = PixelGrid::filled(4, 5, Rgb::BLACK).unwrap();
    let renderer = Renderer::default();

    assert_eq!(renderer.render(&even, RenderMode::Character).line_count(), 6);
    assert_eq!(renderer.render(&even, RenderMode::Block).line_count(), 6);
    assert_eq!(renderer.render(&even, RenderMode::HalfBlock).line_count(), 3);
    assert_eq!(renderer.render(&odd, RenderMode::HalfBlock).line_count(), 3);
}

#[test]
fn test_half_block_pairs_rows() {
    let grid = PixelGrid::from_fn(1, 2, |_, y| if y == 0 { Rgb::new(255, 0, 0) } else { Rgb::new(0, 0, 255) })
        .unwrap();
    let frame = Renderer::default().render(&grid, RenderMode::HalfBlock);
    assert_eq!(
        frame.lines(),
        &["\x1b[48;2;0;0;255m\x1b[38;2;255;0;0m▀\x1b[0m".to_string()]
    );
}

#[test]
fn test_half_block_odd_last_row_foreground_only() {
    let grid = PixelGrid::filled(2, 3, Rgb::new(1, 2, 3)).unwrap();
    let frame = Renderer::default().render(&grid, RenderMode::HalfBlock);
    let last = &frame.lines()[1];
    assert!(!last.contains("\x1b[48;2;"));
    assert_eq!(last.matches("\x1b[38;2;1;2;3m▀").count(), 2);
}

#[test]
fn test_to_ansi_newline_per_line() {
    let grid = PixelGrid::filled(2, 4, Rgb::BLACK).unwrap();
    let frame = Renderer::default().render(&grid, RenderMode::Block);
    let text = frame.to_ansi();
    assert_eq!(text.matches('\n').count(), 4);
    assert!(text.ends_with("\x1b[0m\n"));
}

#[test]
fn test_custom_ramp_renders_its_glyphs() {
    let ramp = GlyphRamp::new("ab").unwrap();
    let grid = PixelGrid::from_fn(2, 1, |x, _| if x == 0 { Rgb::BLACK } else { Rgb::WHITE }).unwrap();
    let frame = Renderer::new(ramp).render(&grid, RenderMode::Character);
    assert_eq!(
        frame.lines()[0],
        "\x1b[38;2;0;0;0ma\x1b[38;2;255;255;255mb\x1b[0m"
    );
}
