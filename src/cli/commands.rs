//! Subcommand handlers for config actions.

use std::io::Write;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};

/// Handle config subcommand actions.
///
/// `config_path` is the `--config` override; the default location is used
/// when it is `None`.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let cfg = if path.exists() {
                match Config::load_from(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                Config::default()
            };

            let stdout = std::io::stdout();
            if let Err(e) = write_config_summary(&mut stdout.lock(), &cfg, &path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        ConfigAction::Init => {
            if let Err(e) = init_config(&path) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            println!("Created config file: {}", path.display());
        }
    }
}

/// Print the effective settings from `cfg`, with built-in defaults filled in.
pub fn write_config_summary<W: Write>(out: &mut W, cfg: &Config, path: &Path) -> std::io::Result<()> {
    let width = if cfg.render.width == 0 {
        "auto".to_string()
    } else {
        cfg.render.width.to_string()
    };

    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Mode: {}", cfg.render.mode.as_deref().unwrap_or("ascii"))?;
    match cfg.render.glyphs.as_deref() {
        Some(glyphs) => writeln!(out, "  Glyphs: {:?}", glyphs)?,
        None => writeln!(
            out,
            "  Charset: {}",
            cfg.render.charset.as_deref().unwrap_or("detailed")
        )?,
    }
    writeln!(out, "  Filter: {}", cfg.render.filter.as_deref().unwrap_or("nearest"))?;
    writeln!(out, "  Fit: {}", if cfg.render.fit { "yes" } else { "no" })?;
    writeln!(out, "  Width: {}", width)?;
    writeln!(out, "  Frame interval: {}ms", cfg.video.interval_ms)?;
    writeln!(out, "  Extract fps: {}", cfg.video.extract_fps)?;
    writeln!(out, "  ffmpeg: {}", cfg.video.ffmpeg)?;
    writeln!(out)?;

    if path.exists() {
        writeln!(out, "Config file: {} (exists)", path.display())
    } else {
        writeln!(out, "Config file: {} (not found)", path.display())
    }
}

/// Write the commented default config to `path`.
///
/// Refuses to overwrite an existing file.
pub fn init_config(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "Config file already exists: {}\nUse 'ascii-view config show' to view current settings.",
            path.display()
        ));
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating config directory: {}", e))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML)
        .map_err(|e| format!("Error writing config file: {}", e))
}
