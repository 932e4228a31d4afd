use std::fmt;
use std::rc::Rc;

use crate::{BoundValue, ParamValue, Rect, TextureHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Header,
    Separator,
    Label,
    Toggle,
    Slider,
    MultiSlider,
    Color,
    Text,
    Button,
    RadioList,
    TextureList,
    Texture2D,
    TextureCube,
}

/// Palette image a color control samples from. Pixels are RGB8 in row-major
/// order; sampled components are committed as raw 0..255 floats. Owned by
/// the control so sampling stays off the chrome renderer.
#[derive(Clone)]
pub struct PaletteImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl PaletteImage {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Sample, clamped to the image bounds.
    pub fn color_at(&self, x: u32, y: u32) -> [f32; 3] {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let [r, g, b] = self.pixels[(y * self.width + x) as usize];
        [r as f32, g as f32, b as f32]
    }
}

impl fmt::Debug for PaletteImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Per-kind configuration bag. Unrecognized combinations are ignored by
/// kinds that do not read them, matching the original options object.
#[derive(Clone, Debug)]
pub struct ControlOptions {
    pub min: f32,
    pub max: f32,
    pub step: Option<f32>,
    /// Marks a number-array binding as a color control.
    pub color: bool,
    /// Color controls: expose a fourth alpha channel slider.
    pub alpha: bool,
    pub palette: Option<PaletteImage>,
    /// Texture previews: tonemap HDR content before display.
    pub hdr: bool,
    /// Cube previews: mip level to sample.
    pub level: f32,
    /// Texture lists: children laid out per row by the chrome renderer.
    pub items_per_row: usize,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: None,
            color: false,
            alpha: false,
            palette: None,
            hdr: false,
            level: 0.0,
            items_per_row: 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RadioItem {
    pub name: String,
    pub value: f32,
}

impl RadioItem {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One entry of a texture list. `active_area` is written by the chrome
/// renderer during layout, like the parent control's.
#[derive(Clone, Copy, Debug)]
pub struct TextureItem {
    pub texture: TextureHandle,
    pub value: f32,
    pub active_area: Rect,
}

impl TextureItem {
    pub fn new(texture: TextureHandle, value: f32) -> Self {
        Self {
            texture,
            value,
            active_area: Rect::zero(),
        }
    }
}

/// One panel entry. Created by a `Panel` factory which fixes `kind` for the
/// control's whole lifetime; mutated only through the input state machine or
/// programmatic setters, both of which set `dirty`.
pub struct Control {
    pub kind: ControlKind,
    /// Display name and serialization key. Must be unique panel-wide for
    /// save/restore to be lossless.
    pub title: String,
    /// Hit-test rectangle in panel-local pixels. Storage lives here; the
    /// chrome renderer rewrites it whenever it regenerates.
    pub active_area: Rect,
    /// `None` for display-only kinds (header, label, button, previews).
    pub value: Option<BoundValue>,
    pub options: ControlOptions,
    pub onchange: Option<Rc<dyn Fn(&ParamValue)>>,
    pub onclick: Option<Rc<dyn Fn()>>,
    pub dirty: bool,
    /// True only while the pointer button is held on this control.
    pub active: bool,
    /// Text controls: accepting keyboard input. At most one control
    /// panel-wide holds focus.
    pub focus: bool,
    /// Multi-region controls: sub-slider a drag locked on first contact, so
    /// a drag crossing bands keeps steering the original slider.
    pub clicked_slider: Option<usize>,
    pub items: Vec<RadioItem>,
    pub texture_items: Vec<TextureItem>,
    pub texture: Option<TextureHandle>,
}

impl Control {
    pub fn new(kind: ControlKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            active_area: Rect::zero(),
            value: None,
            options: ControlOptions::default(),
            onchange: None,
            onclick: None,
            dirty: true,
            active: false,
            focus: false,
            clicked_slider: None,
            items: Vec::new(),
            texture_items: Vec::new(),
            texture: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Number of horizontal slider bands this control exposes: the bound
    /// array length for multisliders, 3 (+alpha) for colors, 1 otherwise.
    pub fn channel_count(&self) -> usize {
        match self.kind {
            ControlKind::MultiSlider => match &self.value {
                Some(BoundValue::NumberArray(b)) => b.with(|v| v.len()),
                _ => 0,
            },
            ControlKind::Color => 3 + self.options.alpha as usize,
            _ => 1,
        }
    }

    /// Current value of channel `idx` mapped into [0, 1] over the option
    /// range.
    pub fn normalized(&self, idx: usize) -> f32 {
        let span = self.options.max - self.options.min;
        if span == 0.0 {
            return 0.0;
        }
        let raw = match &self.value {
            Some(BoundValue::Number(b)) => b.get(),
            Some(BoundValue::NumberArray(b)) => b.with(|v| v.get(idx).copied().unwrap_or(0.0)),
            _ => return 0.0,
        };
        (raw - self.options.min) / span
    }

    /// Writes `t` in [0, 1] through the binding as `min + t * (max - min)`,
    /// quantized down to `step` when configured. `idx` selects the array
    /// component for multislider and color channels; out-of-range indices
    /// are ignored rather than growing the array.
    pub fn set_normalized(&mut self, t: f32, idx: Option<usize>) {
        let mut val = self.options.min + t * (self.options.max - self.options.min);
        if let Some(step) = self.options.step {
            if step > 0.0 {
                val -= val % step;
            }
        }
        match &self.value {
            Some(BoundValue::Number(b)) => b.set(val),
            Some(BoundValue::NumberArray(b)) => {
                let idx = idx.unwrap_or(0);
                b.update(|v| {
                    if let Some(slot) = v.get_mut(idx) {
                        *slot = val;
                    }
                });
            }
            _ => {}
        }
    }

    /// Current bound value keyed for serialization; `None` for display-only
    /// kinds, which are skipped by `Panel::serialize`.
    pub fn snapshot_value(&self) -> Option<ParamValue> {
        self.value.as_ref().map(BoundValue::snapshot)
    }

    /// Writes a serialized value back through the binding with the coercion
    /// the kind expects. Marks dirty on success.
    pub fn restore_value(&mut self, value: &ParamValue) -> bool {
        let restored = match &self.value {
            Some(bound) => bound.restore(value),
            None => false,
        };
        if restored {
            self.dirty = true;
        }
        restored
    }

    /// Fires `onchange` with a snapshot of the current value, synchronously.
    pub fn fire_change(&self) {
        if let Some(cb) = &self.onchange {
            if let Some(v) = self.snapshot_value() {
                cb(&v);
            }
        }
    }
}
