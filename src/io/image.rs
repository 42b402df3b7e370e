//! PNG export of a tiled board

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{PackingError, Result, invalid_parameter};
use crate::spatial::layout::Layout;

// Colour of uncovered cells
const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Fill colour for a layout label
///
/// Hues step by the golden angle so neighbouring labels stay distinct.
pub fn label_color(label: u32) -> [u8; 4] {
    if label == 0 {
        return EMPTY_COLOR;
    }
    let hue = (f64::from(label) * 137.507_764) % 360.0;
    let (r, g, b) = hsv_to_rgb(hue, 0.55, 0.92);
    [r, g, b, 255]
}

/// Darker variant of a fill colour used for piece borders
pub fn border_color(fill: [u8; 4]) -> [u8; 4] {
    [fill[0] / 2, fill[1] / 2, fill[2] / 2, fill[3]]
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let offset = value - chroma;
    let channel = |c: f64| ((c + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// Export a layout as a PNG with `scale` pixels per cell
///
/// Each piece gets its own colour; cell edges that border a different piece
/// or the board edge are drawn darker.
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(layout: &Layout, scale: u32, output_path: &Path) -> Result<()> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let size = layout.size() as u32;
    let mut img = ImageBuffer::new(size * scale, size * scale);

    for y in 0..layout.size() {
        for x in 0..layout.size() {
            let label = layout.label_at(x, y).unwrap_or(0);
            let fill = label_color(label);
            let border = border_color(fill);

            // A missing neighbour is off the board and counts as a boundary
            let differs = |nx: Option<usize>, ny: Option<usize>| match (nx, ny) {
                (Some(nx), Some(ny)) => layout.label_at(nx, ny) != Some(label),
                _ => true,
            };
            let left = differs(x.checked_sub(1), Some(y));
            let right = differs(Some(x + 1), Some(y));
            let top = differs(Some(x), y.checked_sub(1));
            let bottom = differs(Some(x), Some(y + 1));

            for dy in 0..scale {
                for dx in 0..scale {
                    let on_edge = (left && dx == 0)
                        || (right && dx == scale - 1)
                        || (top && dy == 0)
                        || (bottom && dy == scale - 1);
                    let color = if on_edge && label != 0 { border } else { fill };
                    img.put_pixel(
                        x as u32 * scale + dx,
                        y as u32 * scale + dy,
                        Rgba(color),
                    );
                }
            }
        }
    }

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| PackingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PackingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
