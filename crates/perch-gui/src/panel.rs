use std::collections::BTreeMap;
use std::rc::Rc;

use perch_core::{
    Binding, BoundValue, Control, ControlKind, ControlOptions, PanelError, ParamValue,
    RadioItem, RenderStyle, TextureHandle, TextureItem, Vec2,
};

/// Index handle into a panel's control sequence. The sequence is
/// append-only for the panel's lifetime, so handles never dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered stack of controls rendered as one GUI surface. Insertion order
/// is display order, top to bottom, and is never reordered implicitly.
pub struct Panel {
    pub(crate) controls: Vec<Control>,
    pub(crate) enabled: bool,
    /// Panel offset in window space.
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) pixel_ratio: f32,
    pub(crate) window_width: f32,
    pub(crate) window_height: f32,
    /// Chrome scale factor forwarded to the renderer.
    pub scale: f32,
    pub(crate) mouse_pos: Vec2,
    /// Control currently tracked between pointer-down and pointer-up.
    pub(crate) active_control: Option<ControlId>,
}

impl Panel {
    pub fn new(window_width: f32, window_height: f32, pixel_ratio: f32) -> Self {
        log::debug!("panel {window_width}x{window_height} @{pixel_ratio}x");
        Self {
            controls: Vec::new(),
            enabled: true,
            x: 0.0,
            y: 0.0,
            pixel_ratio,
            window_width,
            window_height,
            scale: 1.0,
            mouse_pos: Vec2::default(),
            active_control: None,
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, id: ControlId) -> &Control {
        &self.controls[id.0]
    }

    /// Direct access for further setup after a factory call. Programmatic
    /// mutations through this must mark the control dirty themselves, or
    /// use the dedicated setters which do.
    pub fn control_mut(&mut self, id: ControlId) -> &mut Control {
        &mut self.controls[id.0]
    }

    pub fn set_onchange(&mut self, id: ControlId, f: impl Fn(&ParamValue) + 'static) {
        self.controls[id.0].onchange = Some(Rc::new(f));
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Window resize: chrome must re-lay out, so every control goes dirty.
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        self.window_width = window_width;
        self.window_height = window_height;
        for c in &mut self.controls {
            c.dirty = true;
        }
    }

    pub(crate) fn style(&self) -> RenderStyle {
        RenderStyle {
            pixel_ratio: self.pixel_ratio,
            scale: self.scale,
        }
    }

    fn push(&mut self, control: Control) -> ControlId {
        if !control.title.is_empty()
            && self.controls.iter().any(|c| c.title == control.title)
        {
            log::warn!(
                "duplicate control title {:?}; serialization keys collide",
                control.title
            );
        }
        self.controls.push(control);
        ControlId(self.controls.len() - 1)
    }

    pub fn add_header(&mut self, title: impl Into<String>) -> ControlId {
        self.push(Control::new(ControlKind::Header, title))
    }

    pub fn add_separator(&mut self) -> ControlId {
        self.push(Control::new(ControlKind::Separator, ""))
    }

    pub fn add_label(&mut self, title: impl Into<String>) -> ControlId {
        self.push(Control::new(ControlKind::Label, title))
    }

    /// Adds a value control. The kind is resolved once from the binding's
    /// tag (bool: toggle, number: slider, number array: multislider, or
    /// color when `options.color` is set, string: text) and stays frozen
    /// for the control's lifetime, even if the bound value changes shape.
    pub fn add_param(
        &mut self,
        title: impl Into<String>,
        value: BoundValue,
        options: ControlOptions,
    ) -> Result<ControlId, PanelError> {
        let title = title.into();
        let kind = match &value {
            BoundValue::NumberArray(b) if options.color => {
                let needed = 3 + options.alpha as usize;
                let len = b.with(|v| v.len());
                if len < needed {
                    return Err(PanelError::InvalidWidgetBinding {
                        title,
                        reason: format!(
                            "color binding holds {len} components, {needed} required"
                        ),
                    });
                }
                ControlKind::Color
            }
            BoundValue::NumberArray(b) => {
                if b.with(|v| v.is_empty()) {
                    return Err(PanelError::InvalidWidgetBinding {
                        title,
                        reason: "multislider binding holds an empty array".into(),
                    });
                }
                ControlKind::MultiSlider
            }
            _ if options.color => {
                return Err(PanelError::InvalidWidgetBinding {
                    title,
                    reason: "color options require a number-array binding".into(),
                });
            }
            BoundValue::Bool(_) => ControlKind::Toggle,
            BoundValue::Number(_) => ControlKind::Slider,
            BoundValue::Text(_) => ControlKind::Text,
        };
        let mut control = Control::new(kind, title);
        control.value = Some(value);
        control.options = options;
        Ok(self.push(control))
    }

    pub fn add_button(&mut self, title: impl Into<String>, onclick: impl Fn() + 'static) -> ControlId {
        let mut control = Control::new(ControlKind::Button, title);
        control.onclick = Some(Rc::new(onclick));
        self.push(control)
    }

    pub fn add_radio_list(
        &mut self,
        title: impl Into<String>,
        value: Binding<f32>,
        items: Vec<RadioItem>,
    ) -> ControlId {
        let mut control = Control::new(ControlKind::RadioList, title);
        control.value = Some(BoundValue::Number(value));
        control.items = items;
        self.push(control)
    }

    pub fn add_texture_list(
        &mut self,
        title: impl Into<String>,
        value: Binding<f32>,
        items: Vec<TextureItem>,
        items_per_row: usize,
    ) -> ControlId {
        let mut control = Control::new(ControlKind::TextureList, title);
        control.value = Some(BoundValue::Number(value));
        control.texture_items = items;
        control.options.items_per_row = items_per_row;
        self.push(control)
    }

    pub fn add_texture_2d(
        &mut self,
        title: impl Into<String>,
        texture: TextureHandle,
        options: ControlOptions,
    ) -> ControlId {
        let mut control = Control::new(ControlKind::Texture2D, title);
        control.texture = Some(texture);
        control.options = options;
        self.push(control)
    }

    pub fn add_texture_cube(
        &mut self,
        title: impl Into<String>,
        texture: TextureHandle,
        options: ControlOptions,
    ) -> ControlId {
        let mut control = Control::new(ControlKind::TextureCube, title);
        control.texture = Some(texture);
        control.options = options;
        self.push(control)
    }

    /// Exports every value control keyed by title. Titles are the
    /// persistence key: two controls sharing one collide silently and the
    /// later one wins, so callers must keep them unique.
    pub fn serialize(&self) -> BTreeMap<String, ParamValue> {
        self.controls
            .iter()
            .filter_map(|c| Some((c.title.clone(), c.snapshot_value()?)))
            .collect()
    }

    /// Writes values back through control bindings by title. Controls whose
    /// title is absent are left untouched; partial restore is allowed.
    pub fn deserialize(&mut self, data: &BTreeMap<String, ParamValue>) {
        for c in &mut self.controls {
            let Some(value) = data.get(&c.title) else {
                continue;
            };
            if !c.restore_value(value) {
                log::warn!(
                    "restore for {:?} skipped: value shape does not match the binding",
                    c.title
                );
            }
        }
    }
}
