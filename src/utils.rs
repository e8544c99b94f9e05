//! Utility functions

// Pong court icon: paddles, ball, dashed center line. Rasterized for the
// window/taskbar icon and the in-window header.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><rect width="128" height="128" rx="24" fill="#0a0a0c"/><g fill="#3f3f46"><rect x="62" y="12" width="4" height="12" rx="2"/><rect x="62" y="36" width="4" height="12" rx="2"/><rect x="62" y="60" width="4" height="12" rx="2"/><rect x="62" y="84" width="4" height="12" rx="2"/><rect x="62" y="108" width="4" height="12" rx="2"/></g><rect x="14" y="36" width="8" height="36" rx="3" fill="#fafafa"/><rect x="106" y="58" width="8" height="36" rx="3" fill="#fafafa"/><circle cx="78" cy="48" r="7" fill="#4ade80"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image.
pub fn rasterize_icon(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default())
        .expect("embedded icon SVG is valid");
    let scale = size as f32 / tree.size().width();
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(size, size).expect("icon size is non-zero");
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

// tiny-skia renders premultiplied alpha; egui wants straight alpha.
fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_at_requested_size() {
        let (pixels, w, h) = rasterize_icon(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        // The court background is opaque, so the image cannot be fully transparent.
        assert!(pixels.chunks_exact(4).any(|px| px[3] == 255));
    }
}
