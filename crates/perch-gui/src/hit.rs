//! Geometric hit-testing: first-match rectangle scan plus the per-kind
//! sub-region resolvers. Active areas must not overlap; when they do, the
//! scan is order-dependent by construction and the first-added control
//! wins.

use perch_core::{Control, Vec2};

pub(crate) fn locate(controls: &[Control], p: Vec2) -> Option<usize> {
    controls.iter().position(|c| c.active_area.contains(p))
}

/// Row index inside a radio list, `None` when the fractional position
/// falls outside the item range.
pub(crate) fn radio_index(control: &Control, p: Vec2) -> Option<usize> {
    let count = control.items.len();
    let h = control.active_area.height();
    if count == 0 || h <= 0.0 {
        return None;
    }
    let idx = (count as f32 * (p.y - control.active_area.min.y) / h).floor() as isize;
    if idx < 0 || idx >= count as isize {
        return None;
    }
    Some(idx as usize)
}

/// Texture-list child under the point, by re-testing each child's own
/// active area.
pub(crate) fn texture_child(control: &Control, p: Vec2) -> Option<usize> {
    control
        .texture_items
        .iter()
        .position(|item| item.active_area.contains(p))
}

/// Horizontal slider band for multislider and color controls, clamped into
/// range so a drag below the last band still steers it.
pub(crate) fn slider_band(count: usize, top: f32, region_height: f32, y: f32) -> usize {
    if count == 0 {
        return 0;
    }
    if region_height <= 0.0 {
        return 0;
    }
    let idx = (count as f32 * (y - top) / region_height).floor() as isize;
    idx.clamp(0, count as isize - 1) as usize
}

/// Which part of a color control a point falls in. The palette image, when
/// configured, occupies the bottom of the active area at the image's own
/// aspect ratio; the channel sliders share the strip above it.
pub(crate) enum ColorRegion {
    /// Fractional position inside the palette image.
    Palette { u: f32, v: f32 },
    Sliders,
}

pub(crate) fn color_region(control: &Control, p: Vec2) -> ColorRegion {
    let Some(img) = &control.options.palette else {
        return ColorRegion::Sliders;
    };
    let aa = control.active_area;
    let w = aa.width();
    if w <= 0.0 || img.width == 0 {
        return ColorRegion::Sliders;
    }
    let image_h = w * img.height as f32 / img.width as f32;
    let image_top = aa.max.y - image_h;
    if p.y > image_top && image_h > 0.0 {
        ColorRegion::Palette {
            u: (p.x - aa.min.x) / w,
            v: (p.y - image_top) / image_h,
        }
    } else {
        ColorRegion::Sliders
    }
}

/// Height of the channel-slider strip of a color control (active area
/// minus the palette image, when present).
pub(crate) fn color_sliders_height(control: &Control) -> f32 {
    let aa = control.active_area;
    let mut h = aa.height();
    if let Some(img) = &control.options.palette {
        if img.width > 0 {
            h -= aa.width() * img.height as f32 / img.width as f32;
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::{ControlKind, PaletteImage, RadioItem, Rect};

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_points(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn test_radio_index_rows() {
        let mut c = Control::new(ControlKind::RadioList, "mode");
        c.items = vec![
            RadioItem::new("a", 0.0),
            RadioItem::new("b", 1.0),
            RadioItem::new("c", 2.0),
        ];
        c.active_area = rect(0.0, 0.0, 100.0, 60.0);

        assert_eq!(radio_index(&c, Vec2::new(10.0, 5.0)), Some(0));
        assert_eq!(radio_index(&c, Vec2::new(10.0, 25.0)), Some(1));
        assert_eq!(radio_index(&c, Vec2::new(10.0, 59.0)), Some(2));
        // Bottom edge rounds to index == count.
        assert_eq!(radio_index(&c, Vec2::new(10.0, 60.0)), None);
    }

    #[test]
    fn test_slider_band_clamps() {
        assert_eq!(slider_band(3, 0.0, 60.0, -5.0), 0);
        assert_eq!(slider_band(3, 0.0, 60.0, 30.0), 1);
        assert_eq!(slider_band(3, 0.0, 60.0, 400.0), 2);
    }

    #[test]
    fn test_color_region_split() {
        let mut c = Control::new(ControlKind::Color, "tint");
        // 2:1 palette under a 40px-wide area -> 20px image strip.
        c.options.palette = Some(PaletteImage::new(4, 2, vec![[0, 0, 0]; 8]));
        c.active_area = rect(0.0, 0.0, 40.0, 60.0);

        assert!(matches!(
            color_region(&c, Vec2::new(10.0, 30.0)),
            ColorRegion::Sliders
        ));
        match color_region(&c, Vec2::new(24.0, 51.0)) {
            ColorRegion::Palette { u, v } => {
                assert!((u - 0.6).abs() < 1e-5);
                assert!((v - 0.55).abs() < 1e-5);
            }
            ColorRegion::Sliders => panic!("expected palette hit"),
        }
        assert!((color_sliders_height(&c) - 40.0).abs() < 1e-5);
    }
}
