//! Input state machine: Idle ⇄ Tracking(control). One event is fully
//! processed (including any callbacks it fires) before the next is
//! accepted. Handlers return `true` when the event was consumed; a
//! disabled panel consumes nothing.

use perch_core::{
    BoundValue, ControlKind, Key, KeyEvent, PointerEvent, TextInputEvent, Vec2,
};

use crate::hit::{self, ColorRegion};
use crate::panel::{ControlId, Panel};

/// Whether a down-commit wants the immediate drag re-invocation that gives
/// drag-capable controls their value on the very first sample.
enum Press {
    Drag,
    NoDrag,
}

impl Panel {
    fn to_panel(&self, event: &PointerEvent) -> Vec2 {
        Vec2::new(
            event.position.x / self.pixel_ratio - self.x,
            event.position.y / self.pixel_ratio - self.y,
        )
    }

    fn focused_text(&self) -> Option<usize> {
        self.controls
            .iter()
            .position(|c| c.kind == ControlKind::Text && c.focus)
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        // Any press ends text focus; the hit control re-takes it below.
        for c in &mut self.controls {
            if c.kind == ControlKind::Text && c.focus {
                c.focus = false;
                c.dirty = true;
            }
        }
        self.active_control = None;
        self.mouse_pos = self.to_panel(event);

        let Some(idx) = hit::locate(&self.controls, self.mouse_pos) else {
            return false;
        };
        self.active_control = Some(ControlId(idx));
        self.controls[idx].active = true;
        self.controls[idx].dirty = true;

        if matches!(self.press_commit(idx), Press::Drag) {
            self.pointer_drag(event);
        }
        true
    }

    /// Single-click commit for the control under the pointer. Dragless
    /// kinds do all their work here; slider-like kinds get their first
    /// sample from the drag re-invocation instead.
    fn press_commit(&mut self, idx: usize) -> Press {
        match self.controls[idx].kind {
            ControlKind::Button => {
                if let Some(cb) = &self.controls[idx].onclick {
                    cb();
                }
                Press::Drag
            }
            ControlKind::Toggle => {
                if let Some(BoundValue::Bool(b)) = &self.controls[idx].value {
                    b.update(|v| *v = !*v);
                }
                self.controls[idx].fire_change();
                Press::Drag
            }
            ControlKind::RadioList => {
                let Some(row) = hit::radio_index(&self.controls[idx], self.mouse_pos) else {
                    return Press::NoDrag;
                };
                let value = self.controls[idx].items[row].value;
                if let Some(BoundValue::Number(b)) = &self.controls[idx].value {
                    b.set(value);
                }
                self.controls[idx].fire_change();
                Press::Drag
            }
            ControlKind::TextureList => {
                let Some(child) = hit::texture_child(&self.controls[idx], self.mouse_pos)
                else {
                    return Press::NoDrag;
                };
                let value = self.controls[idx].texture_items[child].value;
                if let Some(BoundValue::Number(b)) = &self.controls[idx].value {
                    b.set(value);
                }
                self.controls[idx].fire_change();
                Press::Drag
            }
            ControlKind::Color => {
                match hit::color_region(&self.controls[idx], self.mouse_pos) {
                    ColorRegion::Palette { u, v } => {
                        // Skipping the drag re-invocation keeps
                        // `clicked_slider` unset, so the drag phase stays
                        // in palette-sampling mode.
                        self.palette_commit(idx, u, v);
                        Press::NoDrag
                    }
                    ColorRegion::Sliders => Press::Drag,
                }
            }
            ControlKind::Text => {
                self.controls[idx].focus = true;
                Press::Drag
            }
            _ => Press::Drag,
        }
    }

    fn palette_commit(&mut self, idx: usize, u: f32, v: f32) {
        let c = &mut self.controls[idx];
        let Some(img) = &c.options.palette else {
            return;
        };
        let x = (img.width as f32 * u) as u32;
        let y = (img.height as f32 * v) as u32;
        let rgb = img.color_at(x, y);
        if let Some(BoundValue::NumberArray(b)) = &c.value {
            b.update(|arr| {
                for (slot, component) in arr.iter_mut().zip(rgb) {
                    *slot = component;
                }
            });
        }
        c.dirty = true;
        self.controls[idx].fire_change();
    }

    pub fn pointer_drag(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(ControlId(idx)) = self.active_control else {
            return false;
        };
        let pos = self.to_panel(event);
        let aa = self.controls[idx].active_area;
        let w = aa.width();
        let t = if w > 0.0 {
            ((pos.x - aa.min.x) / w).clamp(0.0, 1.0)
        } else {
            0.0
        };

        match self.controls[idx].kind {
            ControlKind::Slider => {
                self.controls[idx].set_normalized(t, None);
                self.controls[idx].dirty = true;
                self.controls[idx].fire_change();
            }
            ControlKind::MultiSlider => {
                let band = hit::slider_band(
                    self.controls[idx].channel_count(),
                    aa.min.y,
                    aa.height(),
                    pos.y,
                );
                let channel = self.lock_channel(idx, band);
                self.controls[idx].set_normalized(t, Some(channel));
                self.controls[idx].dirty = true;
                self.controls[idx].fire_change();
            }
            ControlKind::Color => {
                // Palette sampling applies only while no channel is locked,
                // i.e. while the whole drag started inside the palette.
                if self.controls[idx].clicked_slider.is_none() {
                    if let ColorRegion::Palette { u, v } =
                        hit::color_region(&self.controls[idx], pos)
                    {
                        self.palette_commit(idx, u, v);
                        return true;
                    }
                }
                let band = hit::slider_band(
                    self.controls[idx].channel_count(),
                    aa.min.y,
                    hit::color_sliders_height(&self.controls[idx]),
                    pos.y,
                );
                let channel = self.lock_channel(idx, band);
                self.controls[idx].set_normalized(t, Some(channel));
                self.controls[idx].dirty = true;
                self.controls[idx].fire_change();
            }
            // Tracked, but nothing continuous to steer.
            _ => {}
        }
        true
    }

    /// First drag sample locks the band; the lock holds for the rest of
    /// the drag even when the pointer crosses into another band.
    fn lock_channel(&mut self, idx: usize, band: usize) -> usize {
        match self.controls[idx].clicked_slider {
            Some(locked) => locked,
            None => {
                self.controls[idx].clicked_slider = Some(band);
                band
            }
        }
    }

    pub fn pointer_up(&mut self, _event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(ControlId(idx)) = self.active_control.take() else {
            return false;
        };
        let c = &mut self.controls[idx];
        c.active = false;
        c.clicked_slider = None;
        c.dirty = true;
        true
    }

    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        if event.key != Key::Backspace {
            return false;
        }
        let Some(idx) = self.focused_text() else {
            return false;
        };
        if let Some(BoundValue::Text(b)) = &self.controls[idx].value {
            // No-op on an already-empty string, by contract.
            b.update(|s| {
                s.pop();
            });
        }
        self.controls[idx].dirty = true;
        self.controls[idx].fire_change();
        true
    }

    pub fn text_input(&mut self, event: &TextInputEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(idx) = self.focused_text() else {
            return false;
        };
        let mut appended = false;
        if let Some(BoundValue::Text(b)) = &self.controls[idx].value {
            b.update(|s| {
                for ch in event.text.chars() {
                    // Printable ASCII only; anything else is left for the
                    // host to handle.
                    if (' '..='~').contains(&ch) {
                        s.push(ch);
                        appended = true;
                    }
                }
            });
        }
        if appended {
            self.controls[idx].dirty = true;
            self.controls[idx].fire_change();
        }
        appended
    }
}
