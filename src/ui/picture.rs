use image::RgbImage;
use image::imageops::{self, FilterType};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::path::{Path, PathBuf};

/// Keeps the last decoded picture so redraws do not hit the disk.
#[derive(Debug, Default)]
pub struct ImageCache {
    entry: Option<(PathBuf, Result<RgbImage, String>)>,
}

impl ImageCache {
    pub fn load(&mut self, path: &Path) -> Result<&RgbImage, &str> {
        let stale = !matches!(&self.entry, Some((cached, _)) if cached.as_path() == path);
        if stale {
            let decoded = image::open(path)
                .map(|img| img.to_rgb8())
                .map_err(|e| e.to_string());
            if let Err(e) = &decoded {
                tracing::warn!(path = %path.display(), "could not load question image: {}", e);
            }
            self.entry = Some((path.to_path_buf(), decoded));
        }

        match &self.entry {
            Some((_, decoded)) => decoded.as_ref().map_err(String::as_str),
            None => Err("no image"),
        }
    }
}

/// Render `img` into at most `width` x `height` cells using upper half blocks,
/// two pixels per cell. Aspect ratio is preserved.
pub fn render_half_blocks(img: &RgbImage, width: u16, height: u16) -> Vec<Line<'static>> {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 || width == 0 || height == 0 {
        return Vec::new();
    }

    let max_w = width as f64;
    let max_h = height as f64 * 2.0;
    let scale = (max_w / src_w as f64).min(max_h / src_h as f64);
    let dst_w = ((src_w as f64 * scale).floor() as u32).max(1);
    let dst_h = ((src_h as f64 * scale).floor() as u32).max(1);

    let scaled = imageops::resize(img, dst_w, dst_h, FilterType::Triangle);

    (0..dst_h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..dst_w)
                .map(|x| {
                    let top = scaled.get_pixel(x, y).0;
                    let bottom = if y + 1 < dst_h {
                        scaled.get_pixel(x, y + 1).0
                    } else {
                        top
                    };
                    Span::styled(
                        "▀",
                        Style::default()
                            .fg(Color::Rgb(top[0], top[1], top[2]))
                            .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
