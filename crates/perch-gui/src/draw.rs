//! Dirty-tracking render scheduler. Chrome is rasterized at most once per
//! frame, and only on frames where some control changed; steady-state
//! frames just re-composite the retained image.

use perch_core::{ChromeRenderer, Control, ControlKind, QuadParams, Rect, RenderContext};

use crate::panel::Panel;

/// Scans all controls, clearing every dirty flag, and reports whether any
/// was set. Batched: one regeneration covers the whole panel.
fn take_any_dirty(controls: &mut [Control]) -> bool {
    let mut dirty = false;
    for c in controls {
        if c.dirty {
            c.dirty = false;
            dirty = true;
        }
    }
    dirty
}

impl Panel {
    /// One render pass: regenerate chrome if anything changed, composite
    /// it, then draw the live texture previews. Skipped entirely while the
    /// panel is disabled or empty.
    pub fn draw(&mut self, chrome: &mut dyn ChromeRenderer, ctx: &mut dyn RenderContext) {
        if !self.enabled || self.controls.is_empty() {
            return;
        }
        if take_any_dirty(&mut self.controls) {
            let style = self.style();
            chrome.regenerate(&mut self.controls, style);
        }
        ctx.draw_chrome([0.0, 0.0, self.window_width, self.window_height]);
        self.draw_textures(ctx);
    }

    /// Texture previews sample live host textures, so they are drawn every
    /// frame regardless of chrome dirtiness.
    fn draw_textures(&self, ctx: &mut dyn RenderContext) {
        let scale = self.scale * self.pixel_ratio;
        for c in &self.controls {
            match c.kind {
                ControlKind::Texture2D => {
                    if let Some(texture) = c.texture {
                        ctx.draw_texture_2d(
                            texture,
                            self.flip_bounds(c.active_area, scale),
                            QuadParams {
                                hdr: c.options.hdr,
                                level: 0.0,
                            },
                        );
                    }
                }
                ControlKind::TextureCube => {
                    if let Some(texture) = c.texture {
                        ctx.draw_texture_cube(
                            texture,
                            self.flip_bounds(c.active_area, scale),
                            QuadParams {
                                hdr: c.options.hdr,
                                level: c.options.level,
                            },
                        );
                    }
                }
                ControlKind::TextureList => {
                    for item in &c.texture_items {
                        ctx.draw_texture_2d(
                            item.texture,
                            self.flip_bounds(item.active_area, scale),
                            QuadParams {
                                hdr: c.options.hdr,
                                level: 0.0,
                            },
                        );
                    }
                }
                _ => {}
            }
        }
    }

    /// Panel-local rect to window-space bounds: the chrome image has its
    /// origin at the top, window coordinates at the bottom.
    fn flip_bounds(&self, area: Rect, scale: f32) -> [f32; 4] {
        [
            area.min.x * scale,
            self.window_height - area.max.y * scale,
            area.max.x * scale,
            self.window_height - area.min.y * scale,
        ]
    }
}
