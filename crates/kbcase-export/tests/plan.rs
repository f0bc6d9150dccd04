use approx::assert_abs_diff_eq;
use kbcase_core::CaseConfig;
use kbcase_export::{svg, CasePlan, ExportError};
use kbcase_layout::{parse_value, LayoutContext};
use serde_json::{json, Value};

fn grid() -> Value {
    json!([
        {"name": "plan"},
        ["Esc", "1", "2", "3"],
        [{"w": 1.5}, "Tab", "Q", {"w": 2}, "W"]
    ])
}

fn plan(ctx: &LayoutContext) -> CasePlan {
    let layout = parse_value(ctx, &grid()).unwrap();
    CasePlan::new(ctx, layout)
}

#[test]
fn unsplit_plan_has_one_outline() {
    let ctx = LayoutContext::default();
    let plan = plan(&ctx);
    assert_eq!(plan.outlines.len(), 1);
    assert_eq!(plan.outlines[0].rect, plan.layout.rect);
    assert_eq!(plan.hole_templates, ctx.holes);
    assert_eq!(plan.controller.holder.len(), 3);
    assert_eq!(plan.jack.holder.len(), 1);
}

#[test]
fn split_plan_has_two_outlines() {
    let cfg = CaseConfig::default().with_split_keys([(1, 2), (2, 2)]);
    let ctx = LayoutContext::new(cfg).unwrap();
    let plan = plan(&ctx);
    assert_eq!(plan.outlines.len(), 2);
    assert_eq!(plan.outlines[0], plan.layout.left);
    assert_eq!(plan.outlines[1], plan.layout.right);
}

#[test]
fn tilt_uses_configured_heights() {
    let cfg = CaseConfig {
        front_height: 10.0,
        rear_height: 18.0,
        ..CaseConfig::default()
    };
    let ctx = LayoutContext::new(cfg).unwrap();
    let plan = plan(&ctx);
    // the panel is centred, so the centre height is the mean
    assert_abs_diff_eq!(plan.tilt.center_height, 14.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.tilt.height_at(plan.layout.rect.p1.y), 18.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.tilt.height_at(plan.layout.rect.p2.y), 10.0, epsilon = 1e-9);
}

#[test]
fn json_hand_off_shape() {
    let plan = plan(&LayoutContext::default());
    let value: Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();

    assert_eq!(value["layout"]["name"], "plan");
    assert_eq!(value["layout"]["keys"].as_array().unwrap().len(), 7);
    assert_eq!(value["layout"]["keys"][6]["text"], "W");
    assert_eq!(value["layout"]["keys"][6]["hole"]["points"].as_array().unwrap().len(), 36);
    assert_eq!(value["outlines"].as_array().unwrap().len(), 1);
    assert!(value["tilt"]["angle_deg"].as_f64().unwrap() > 0.0);
    assert!(value["controller"]["usb"]["p1"].is_object());
    assert!(value["jack"]["body"].is_object());
}

#[test]
fn json_reloads_into_a_plan() {
    let plan = plan(&LayoutContext::default());
    let back = CasePlan::from_json(&plan.to_json().unwrap()).unwrap();
    assert_eq!(back.layout.keys.len(), plan.layout.keys.len());
    assert_eq!(back.layout.name, plan.layout.name);
    assert_abs_diff_eq!(back.layout.rect.w(), plan.layout.rect.w(), epsilon = 1e-9);
    assert_abs_diff_eq!(back.tilt.center_height, plan.tilt.center_height, epsilon = 1e-9);
}

#[test]
fn malformed_json_is_rejected() {
    let err = CasePlan::from_json("{\"layout\": 1}").unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
}

#[test]
fn svg_preview_has_all_layers() {
    let plan = plan(&LayoutContext::default());
    let out = svg::render_plan(&plan).unwrap();
    assert!(out.starts_with("<svg "));
    assert!(out.contains("id=\"outline\""));
    assert!(out.contains("id=\"holes\""));
    assert!(out.contains("id=\"clearance\""));
    // 7 holes plus the panel, each a closed subpath
    let outline_and_holes = out.matches(" Z").count();
    assert!(outline_and_holes >= 1 + 7 + 7, "{outline_and_holes}");
}

#[test]
fn svg_preview_matches_panel_size() {
    let plan = plan(&LayoutContext::default());
    let out = svg::render_plan(&plan).unwrap();
    // 4.5U widest row plus padding, two rows plus padding
    assert!(out.contains("viewBox=\"0 0 91.5 44\""), "{out}");
}
