#[cfg(test)]
mod tests {
    use crate::binding::binding;
    use crate::control::*;
    use crate::geometry::{Rect, Vec2};
    use crate::value::{BoundValue, ParamValue};

    #[test]
    fn test_binding_basic() {
        let b = binding(1.0f32);
        assert_eq!(b.get(), 1.0);

        b.set(2.5);
        assert_eq!(b.get(), 2.5);

        b.update(|v| *v *= 2.0);
        assert_eq!(b.get(), 5.0);

        let other = b.clone();
        other.set(0.0);
        assert_eq!(b.get(), 0.0);
    }

    #[test]
    fn test_rect_contains_inclusive() {
        let r = Rect::from_points(Vec2::new(10.0, 20.0), Vec2::new(110.0, 40.0));

        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 40.0)));
        assert!(r.contains(Vec2::new(60.0, 30.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert!(!r.contains(Vec2::new(60.0, 40.1)));
    }

    #[test]
    fn test_set_normalized_maps_over_range() {
        let value = binding(0.0f32);
        let mut c = Control::new(ControlKind::Slider, "ev");
        c.value = Some(BoundValue::Number(value.clone()));
        c.options.min = -2.0;
        c.options.max = 2.0;

        c.set_normalized(0.5, None);
        assert_eq!(value.get(), 0.0);

        c.set_normalized(1.0, None);
        assert_eq!(value.get(), 2.0);

        assert_eq!(c.normalized(0), 1.0);
    }

    #[test]
    fn test_set_normalized_quantizes_down_to_step() {
        let value = binding(0.0f32);
        let mut c = Control::new(ControlKind::Slider, "count");
        c.value = Some(BoundValue::Number(value.clone()));
        c.options.min = 0.0;
        c.options.max = 10.0;
        c.options.step = Some(2.0);

        c.set_normalized(0.55, None); // 5.5 -> 4.0
        assert_eq!(value.get(), 4.0);
    }

    #[test]
    fn test_set_normalized_array_component() {
        let value = binding(vec![0.0f32, 0.0, 0.0]);
        let mut c = Control::new(ControlKind::MultiSlider, "levels");
        c.value = Some(BoundValue::NumberArray(value.clone()));

        c.set_normalized(0.25, Some(1));
        assert_eq!(value.get(), vec![0.0, 0.25, 0.0]);

        // Out-of-range component is ignored, not grown.
        c.set_normalized(1.0, Some(7));
        assert_eq!(value.get(), vec![0.0, 0.25, 0.0]);
    }

    #[test]
    fn test_channel_count() {
        let mut c = Control::new(ControlKind::Color, "tint");
        c.value = Some(BoundValue::NumberArray(binding(vec![0.0; 4])));
        assert_eq!(c.channel_count(), 3);
        c.options.alpha = true;
        assert_eq!(c.channel_count(), 4);

        let mut m = Control::new(ControlKind::MultiSlider, "levels");
        m.value = Some(BoundValue::NumberArray(binding(vec![0.0; 5])));
        assert_eq!(m.channel_count(), 5);
    }

    #[test]
    fn test_restore_coerces_by_tag() {
        let flag = binding(false);
        let bound = BoundValue::Bool(flag.clone());

        assert!(bound.restore(&ParamValue::Bool(true)));
        assert!(flag.get());

        // Tag mismatch leaves the value untouched.
        assert!(!bound.restore(&ParamValue::Number(1.0)));
        assert!(flag.get());
    }

    #[test]
    fn test_restore_marks_dirty() {
        let text = binding(String::from("old"));
        let mut c = Control::new(ControlKind::Text, "name");
        c.value = Some(BoundValue::Text(text.clone()));
        c.dirty = false;

        assert!(c.restore_value(&ParamValue::Text("new".into())));
        assert!(c.dirty);
        assert_eq!(text.get(), "new");
    }

    #[test]
    fn test_palette_sample_clamps() {
        let img = PaletteImage::new(
            2,
            2,
            vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]],
        );
        assert_eq!(img.color_at(0, 0), [1.0, 2.0, 3.0]);
        assert_eq!(img.color_at(1, 1), [10.0, 11.0, 12.0]);
        assert_eq!(img.color_at(9, 9), [10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_param_value_untagged_json() {
        let v = ParamValue::NumberArray(vec![0.5, 1.0]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0.5,1.0]");

        let back: ParamValue = serde_json::from_str("true").unwrap();
        assert_eq!(back, ParamValue::Bool(true));

        let back: ParamValue = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(back, ParamValue::Text("hi".into()));
    }
}
