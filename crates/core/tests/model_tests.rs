// ═══════════════════════════════════════════════════════════════════
// Model Tests — ChartDefaults, ChartConfig JSON, errors
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;

use fallvision_charts_core::errors::CoreError;
use fallvision_charts_core::models::chart::{ChartConfig, ChartHandle, ChartKind, Fill};
use fallvision_charts_core::models::defaults::ChartDefaults;
use fallvision_charts_core::models::gradient::LinearGradient;
use fallvision_charts_core::services::chart_service::ChartService;

// ── ChartDefaults ───────────────────────────────────────────────────

mod defaults {
    use super::*;

    #[test]
    fn stock_values() {
        let d = ChartDefaults::default();
        assert_eq!(d.font_family, "'Segoe UI', 'Inter', sans-serif");
        assert_eq!(d.color, "#6c757d");
        assert!(!d.legend_display);
        assert_eq!(d.point_radius, 0.0);
        assert_eq!(d.line_border_width, 3.0);
        assert_eq!(d.line_tension, 0.4);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let d = ChartDefaults::from_json(r##"{"color": "#222", "legendDisplay": true}"##).unwrap();
        assert_eq!(d.color, "#222");
        assert!(d.legend_display);
        assert_eq!(d.line_tension, 0.4);
        assert_eq!(d.font_family, ChartDefaults::default().font_family);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ChartDefaults::from_json("{}").unwrap(), ChartDefaults::default());
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = ChartDefaults::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn negative_tension_rejected() {
        let err = ChartDefaults::from_json(r#"{"lineTension": -1.0}"#).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn negative_point_radius_rejected() {
        let err = ChartDefaults::from_json(r#"{"pointRadius": -2}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: pointRadius must be non-negative, got -2"
        );
    }

    #[test]
    fn negative_border_width_rejected() {
        let err = ChartDefaults::from_json(r#"{"lineBorderWidth": -0.5}"#).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(ref m) if m.contains("lineBorderWidth")));
    }

    #[test]
    fn zero_sizes_accepted() {
        let d = ChartDefaults::from_json(
            r#"{"pointRadius": 0, "lineBorderWidth": 0, "lineTension": 0}"#,
        )
        .unwrap();
        assert_eq!(d.line_border_width, 0.0);
    }

    #[test]
    fn json_uses_camel_case() {
        let value: serde_json::Value =
            serde_json::from_str(&ChartDefaults::default().to_json().unwrap()).unwrap();
        assert_eq!(value["fontFamily"], "'Segoe UI', 'Inter', sans-serif");
        assert_eq!(value["lineBorderWidth"], 3.0);
        assert_eq!(value["pointRadius"], 0.0);
    }
}

// ── ChartConfig JSON ────────────────────────────────────────────────

mod config_json {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ChartKind::Line).unwrap(), json!("line"));
        assert_eq!(serde_json::to_value(ChartKind::Bar).unwrap(), json!("bar"));
        assert_eq!(
            serde_json::to_value(ChartKind::Doughnut).unwrap(),
            json!("doughnut")
        );
    }

    #[test]
    fn gradient_fill_serializes_as_object() {
        let mut g = LinearGradient::new(0.0, 0.0, 0.0, 400.0);
        g.add_color_stop(0.0, "a");
        g.add_color_stop(1.0, "b");
        let value = serde_json::to_value(Fill::Gradient(g)).unwrap();
        assert_eq!(value["y1"], 400.0);
        assert_eq!(value["stops"][1], json!({ "offset": 1.0, "color": "b" }));
    }

    #[test]
    fn solid_fill_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(Fill::Solid("#fff".into())).unwrap(),
            json!("#fff")
        );
    }

    #[test]
    fn config_parses_back_from_chartjs_json() {
        let config = ChartService::new().risk_config(5.0, 2.0, 1.0);
        let parsed: ChartConfig = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn hand_written_chartjs_config_parses() {
        let parsed: ChartConfig = serde_json::from_value(json!({
            "type": "bar",
            "data": {
                "labels": ["Right Arm", "Left Arm"],
                "datasets": [{ "label": "Limb Angles", "data": [90, 110] }]
            }
        }))
        .unwrap();
        assert_eq!(parsed.kind, ChartKind::Bar);
        assert_eq!(parsed.data.datasets[0].data, vec![90.0, 110.0]);
        assert_eq!(parsed.options, Default::default());
    }

    #[test]
    fn legend_settings_come_from_defaults_only() {
        // Per-chart legend blocks are not modelled; unknown plugin keys are dropped.
        let parsed: ChartConfig = serde_json::from_value(json!({
            "type": "doughnut",
            "data": { "datasets": [{ "data": [1, 2] }] },
            "options": { "plugins": { "legend": { "display": true } } }
        }))
        .unwrap();
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["options"]["plugins"], json!({}));
    }

    #[test]
    fn handle_has_fresh_id() {
        let a = ChartHandle::new("c", ChartKind::Line);
        let b = ChartHandle::new("c", ChartKind::Line);
        assert_ne!(a.id, b.id);
        assert_eq!(a.canvas_id, "c");
    }
}

// ── Error display ───────────────────────────────────────────────────

mod errors {
    use super::*;

    #[test]
    fn surface_not_found() {
        let err = CoreError::SurfaceNotFound("m1".into());
        assert_eq!(err.to_string(), "No drawing surface registered for canvas: m1");
    }

    #[test]
    fn render() {
        let err = CoreError::Render {
            canvas_id: "c1".into(),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Render failed on canvas c1: boom");
    }

    #[test]
    fn validation() {
        assert_eq!(
            CoreError::ValidationError("bad".into()).to_string(),
            "Validation failed: bad"
        );
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().starts_with("Deserialization error:"));
    }
}
