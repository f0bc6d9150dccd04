//! Keyboard Layout Editor (KLE) JSON to [`Layout`].
//!
//! The document is a top-level array. Its first element may be a metadata
//! object; every other element is a row of cells. A cell is either a key
//! caption or a modifier object that applies to the next caption only.
//!
//! Keys are placed in a Y-up frame with the first row's top edge at
//! `y = 0`. Every row advances the cursor by exactly 1U regardless of the
//! tallest key in it. The finished layout is re-centred on its panel rect.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use kbcase_core::{Point, Vector};
use kbcase_geometry::Rect;
use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::layout::{Key, Layout, LayoutMeta};
use crate::split::panel_outlines;
use crate::{LayoutContext, LayoutError};

/// Per-key size and position override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyModifier {
    /// Width in key units.
    pub w: f64,
    /// Height in key units.
    pub h: f64,
    /// Extra cursor offset along the row, in key units.
    pub x: f64,
    /// Extra cursor offset down the grid, in key units.
    pub y: f64,
}

impl Default for KeyModifier {
    fn default() -> Self {
        Self {
            w: 1.0,
            h: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Caption(String),
    Modifier(KeyModifier),
}

// Cosmetic KLE properties are accepted and dropped. Anything else that is
// not a size or offset (rotation, secondary rects, typos) is rejected.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModifier {
    w: Option<f64>,
    h: Option<f64>,
    x: Option<f64>,
    y: Option<f64>,
    #[serde(rename = "a")]
    _a: Option<IgnoredAny>,
    #[serde(rename = "c")]
    _c: Option<IgnoredAny>,
    #[serde(rename = "t")]
    _t: Option<IgnoredAny>,
    #[serde(rename = "f")]
    _f: Option<IgnoredAny>,
    #[serde(rename = "f2")]
    _f2: Option<IgnoredAny>,
    #[serde(rename = "fa")]
    _fa: Option<IgnoredAny>,
    #[serde(rename = "p")]
    _p: Option<IgnoredAny>,
    #[serde(rename = "g")]
    _g: Option<IgnoredAny>,
    #[serde(rename = "d")]
    _d: Option<IgnoredAny>,
    #[serde(rename = "n")]
    _n: Option<IgnoredAny>,
    #[serde(rename = "l")]
    _l: Option<IgnoredAny>,
    #[serde(rename = "sm")]
    _sm: Option<IgnoredAny>,
    #[serde(rename = "sb")]
    _sb: Option<IgnoredAny>,
    #[serde(rename = "st")]
    _st: Option<IgnoredAny>,
}

impl From<RawModifier> for KeyModifier {
    fn from(raw: RawModifier) -> Self {
        let d = KeyModifier::default();
        Self {
            w: raw.w.unwrap_or(d.w),
            h: raw.h.unwrap_or(d.h),
            x: raw.x.unwrap_or(d.x),
            y: raw.y.unwrap_or(d.y),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(caption) => Ok(Cell::Caption(caption)),
            obj @ Value::Object(_) => RawModifier::deserialize(obj)
                .map(|raw| Cell::Modifier(raw.into()))
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a key caption or modifier object, found {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
struct RawMeta {
    name: Option<String>,
    author: Option<String>,
    #[serde(flatten)]
    rest: LayoutMeta,
}

/// Cursor and accumulators threaded through the row/cell walk.
#[derive(Debug, Default)]
struct ParserState {
    /// Top-left corner of the next key.
    cursor: Point,
    row: usize,
    col: usize,
    pending: Option<KeyModifier>,
    keys: Vec<Key>,
    divider: Vec<Point>,
}

impl ParserState {
    fn row(self, ctx: &LayoutContext, row: usize, cells: Vec<Cell>) -> Result<Self, LayoutError> {
        let start = Self {
            cursor: Point::xy(0.0, self.cursor.y),
            row,
            col: 0,
            ..self
        };
        let done = cells
            .into_iter()
            .try_fold(start, |state, cell| state.cell(ctx, cell))?;
        if done.pending.is_some() {
            return Err(LayoutError::DanglingModifier { row });
        }
        Ok(Self {
            cursor: Point::xy(0.0, done.cursor.y - ctx.config.unit),
            ..done
        })
    }

    fn cell(self, ctx: &LayoutContext, cell: Cell) -> Result<Self, LayoutError> {
        match cell {
            Cell::Modifier(m) => {
                if self.pending.is_some() {
                    return Err(LayoutError::ConsecutiveModifiers {
                        row: self.row,
                        col: self.col + 1,
                    });
                }
                Ok(Self {
                    pending: Some(m),
                    ..self
                })
            }
            Cell::Caption(text) => Ok(self.place(ctx, text)),
        }
    }

    fn place(mut self, ctx: &LayoutContext, text: String) -> Self {
        let u = ctx.config.unit;
        let m = self.pending.take().unwrap_or_default();
        let origin = self.cursor.translate(Vector::new(m.x * u, -m.y * u));
        let (w, h) = (m.w * u, m.h * u);
        let rect = Rect::new(origin, origin.translate(Vector::new(w, -h)));
        let col = self.col + 1;

        if ctx.config.split_keys.contains(&(self.row, col)) {
            self.divider.push(rect.tr());
            self.divider.push(rect.br());
        }

        trace!(row = self.row, col, uw = m.w, uh = m.h, caption = %text, "placed key");
        self.keys.push(Key {
            text,
            row: self.row,
            col,
            uw: m.w,
            uh: m.h,
            rect,
            hole: ctx.holes.place(m.w, rect.center()),
        });

        Self {
            cursor: origin.translate(Vector::dx(w)),
            col,
            ..self
        }
    }
}

/// Parse an already-decoded KLE document.
pub fn parse_value(ctx: &LayoutContext, kle: &Value) -> Result<Layout, LayoutError> {
    let Value::Array(top) = kle else {
        return Err(LayoutError::Root);
    };

    let mut meta = RawMeta {
        name: None,
        author: None,
        rest: LayoutMeta::default(),
    };
    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(top.len());
    for (index, element) in top.iter().enumerate() {
        match element {
            Value::Object(_) if index == 0 => {
                meta = RawMeta::deserialize(element).map_err(LayoutError::Metadata)?;
            }
            Value::Object(_) => return Err(LayoutError::MisplacedMetadata { index }),
            _ => {
                let row = rows.len() + 1;
                let cells = Vec::<Cell>::deserialize(element)
                    .map_err(|source| LayoutError::Row { row, source })?;
                rows.push(cells);
            }
        }
    }

    let row_count = rows.len();
    let state = rows
        .into_iter()
        .enumerate()
        .try_fold(ParserState::default(), |state, (i, cells)| {
            state.row(ctx, i + 1, cells)
        })?;

    let extent = state
        .keys
        .iter()
        .map(|k| k.rect)
        .reduce(Rect::union)
        .unwrap_or_default();
    let rect = extent.offset(ctx.config.panel_padding);

    if state.divider.is_empty() && !ctx.config.split_keys.is_empty() {
        warn!(
            split_keys = ?ctx.config.split_keys,
            "no configured split key exists in the layout; panel left unsplit"
        );
    }
    let (left, right) = panel_outlines(rect, &state.divider, ctx.config.split_gap);

    let layout = Layout {
        keys: state.keys,
        rect,
        left,
        right,
        name: meta.name,
        author: meta.author,
        meta: meta.rest,
    };
    let center = layout.rect.center();
    let layout = layout.translate(Vector::new(-center.x, -center.y));

    debug!(
        rows = row_count,
        keys = layout.keys.len(),
        split = layout.is_split(),
        width = layout.rect.w(),
        height = layout.rect.h(),
        "parsed KLE layout"
    );
    Ok(layout)
}

pub fn parse_str(ctx: &LayoutContext, json: &str) -> Result<Layout, LayoutError> {
    let kle: Value = serde_json::from_str(json)?;
    parse_value(ctx, &kle)
}

/// Read and parse a KLE JSON file. The file is closed before parsing starts.
pub fn from_file(ctx: &LayoutContext, path: impl AsRef<Path>) -> Result<Layout, LayoutError> {
    let path = path.as_ref();
    let kle: Value = {
        let file = File::open(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file))?
    };
    debug!(path = %path.display(), "read KLE file");
    parse_value(ctx, &kle)
}
