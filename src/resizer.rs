use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::ImageReader;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ResizeConfig;

/// An icon that was found and overwritten during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedIcon {
    pub name: String,
    pub original_size: (u32, u32),
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeReport {
    pub resized: Vec<ResizedIcon>,
    pub missing: Vec<String>,
}

/// Resize every configured icon in place, printing progress to stdout.
pub fn resize_icons(config: &ResizeConfig) -> Result<ResizeReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    resize_icons_to(config, &mut out)
}

/// Resize every configured icon in place, writing progress lines to `out`.
///
/// Icons that don't exist are reported and skipped. The first icon that
/// fails to decode or encode aborts the run; icons later in the list are
/// left untouched.
pub fn resize_icons_to<W: Write>(config: &ResizeConfig, out: &mut W) -> Result<ResizeReport> {
    config.validate()?;

    let size = config.target_size;
    let mut report = ResizeReport::default();

    for name in &config.icons {
        let path = config.icon_path(name);

        if !path.is_file() {
            writeln!(out, "Warning: {} not found", name)?;
            report.missing.push(name.clone());
            continue;
        }

        let (width, height) = resize_icon_with_filter(&path, size, config.filter)?;
        writeln!(out, "Original {}: ({}, {})", name, width, height)?;
        writeln!(out, "Resized {} to {}x{}", name, size, size)?;

        report.resized.push(ResizedIcon {
            name: name.clone(),
            original_size: (width, height),
        });
    }

    writeln!(out)?;
    writeln!(out, "All icons resized to {}x{}!", size, size)?;

    Ok(report)
}

/// Resize a single image to `size`x`size` with Lanczos3, overwriting it in
/// its original format. Returns the dimensions it had before.
pub fn resize_icon(path: &Path, size: u32) -> Result<(u32, u32)> {
    resize_icon_with_filter(path, size, FilterType::Lanczos3)
}

fn resize_icon_with_filter(path: &Path, size: u32, filter: FilterType) -> Result<(u32, u32)> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let format = reader
        .format()
        .with_context(|| format!("Unrecognized image format: {}", path.display()))?;

    let img = reader
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let original = (img.width(), img.height());

    // Aspect ratio is not preserved; every icon ends up square
    let resized = img.resize_exact(size, size, filter);
    resized
        .save_with_format(path, format)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(original)
}
