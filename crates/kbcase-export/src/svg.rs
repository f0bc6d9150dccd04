use kbcase_core::Point;
use kbcase_geometry::{Polygon, Rect};
use tracing::debug;

use crate::{CasePlan, ExportError};

const EPS: f64 = 1e-3;

/// One named group of closed outlines in the preview.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub id: &'a str,
    pub stroke: &'a str,
    pub polygons: &'a [Polygon],
}

/// Top-down preview of a plan: panel outlines, switch holes and the
/// plate clearance box around each hole.
pub fn render_plan(plan: &CasePlan) -> Result<String, ExportError> {
    if plan.outlines.is_empty() {
        return Err(ExportError::Empty);
    }
    let holes: Vec<Polygon> = plan.layout.keys.iter().map(|k| k.hole.clone()).collect();
    let clearance: Vec<Polygon> = plan
        .layout
        .keys
        .iter()
        .map(|k| Polygon::from_rect(k.hole.rect))
        .collect();

    svg_from_layers(&[
        Layer {
            id: "outline",
            stroke: "#000",
            polygons: &plan.outlines,
        },
        Layer {
            id: "holes",
            stroke: "#c00",
            polygons: &holes,
        },
        Layer {
            id: "clearance",
            stroke: "#999",
            polygons: &clearance,
        },
    ])
}

/// Render each layer as one `<path>` in a shared, Y-flipped viewBox.
pub fn svg_from_layers(layers: &[Layer<'_>]) -> Result<String, ExportError> {
    let mut bounds = Bounds::new();
    for layer in layers {
        for poly in layer.polygons {
            for (a, b) in poly.edges() {
                bounds.update_point(a);
                bounds.update_point(b);
            }
        }
    }
    if !bounds.is_valid() {
        return Err(ExportError::Empty);
    }

    let rect = bounds.rect();
    let (width, height) = (rect.w(), rect.h());
    if width <= 0.0 || height <= 0.0 {
        return Err(ExportError::Empty);
    }

    let transform = |p: Point| Point::xy(p.x - bounds.min_x, bounds.max_y - p.y);

    let mut body = String::new();
    for layer in layers {
        let mut path = String::new();
        for poly in layer.polygons {
            push_subpath(&mut path, &edges_path(&poly.edges(), transform));
        }
        if path.is_empty() {
            continue;
        }
        body.push_str(&format!(
            "<path id=\"{id}\" stroke=\"{stroke}\" d=\"{path}\" vector-effect=\"non-scaling-stroke\"/>",
            id = layer.id,
            stroke = layer.stroke,
        ));
    }
    debug!(width, height, layers = layers.len(), "rendered svg preview");

    Ok(format!(
        "<svg width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svgGroup\" stroke-linecap=\"round\" fill-rule=\"evenodd\" stroke-width=\"0.25mm\" fill=\"none\">{body}</g></svg>",
        w = fmt_num(width),
        h = fmt_num(height),
    ))
}

fn edges_path(edges: &[(Point, Point)], transform: impl Fn(Point) -> Point) -> String {
    let mut path = String::new();
    let mut current: Option<Point> = None;
    let mut sub_start: Option<Point> = None;

    for &(a, b) in edges {
        let start = transform(a);
        let end = transform(b);

        if current.map_or(true, |p| !close(p, start)) {
            if !path.is_empty() {
                path.push(' ');
            }
            path.push_str(&format!("M {} {}", fmt_num(start.x), fmt_num(start.y)));
            sub_start = Some(start);
        }

        path.push_str(&format!(" L {} {}", fmt_num(end.x), fmt_num(end.y)));
        current = Some(end);

        if let Some(s) = sub_start {
            if close(end, s) {
                path.push_str(" Z");
                current = None;
                sub_start = None;
            }
        }
    }
    path
}

fn push_subpath(path: &mut String, sub: &str) {
    if sub.is_empty() {
        return;
    }
    if !path.is_empty() {
        path.push(' ');
    }
    path.push_str(sub);
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
}

fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let mut buf = ryu::Buffer::new();
    let s = buf.format(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn update_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
    }

    fn rect(&self) -> Rect {
        Rect::new(
            Point::xy(self.min_x, self.max_y),
            Point::xy(self.max_x, self.min_y),
        )
    }
}
