use indexmap::IndexMap;
use kbcase_core::Vector;
use kbcase_geometry::{Polygon, Rect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One KLE caption placed on the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub text: String,
    /// 1-indexed grid row (metadata excluded).
    pub row: usize,
    /// 1-indexed position of the caption within its row.
    pub col: usize,
    /// Width in key units.
    pub uw: f64,
    /// Height in key units.
    pub uh: f64,
    pub rect: Rect,
    pub hole: Polygon,
}

impl Key {
    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        Self {
            text: self.text.clone(),
            row: self.row,
            col: self.col,
            uw: self.uw,
            uh: self.uh,
            rect: self.rect.translate(v),
            hole: self.hole.translate(v),
        }
    }
}

/// KLE metadata other than `name` and `author`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMeta {
    pub notes: Option<String>,
    pub backcolor: Option<String>,
    pub background: Option<Value>,
    pub radii: Option<String>,
    pub switch_mount: Option<String>,
    pub switch_brand: Option<String>,
    pub switch_type: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Parsed keyboard: keys, padded panel rect and the panel outline halves.
///
/// For an unsplit panel `left` and `right` are both the full panel rect;
/// use [`Layout::outlines`] to get each distinct outline once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub keys: Vec<Key>,
    pub rect: Rect,
    pub left: Polygon,
    pub right: Polygon,
    pub name: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub meta: LayoutMeta,
}

impl Layout {
    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        Self {
            keys: self.keys.iter().map(|k| k.translate(v)).collect(),
            rect: self.rect.translate(v),
            left: self.left.translate(v),
            right: self.right.translate(v),
            name: self.name.clone(),
            author: self.author.clone(),
            meta: self.meta.clone(),
        }
    }

    #[must_use]
    pub fn is_split(&self) -> bool {
        self.left != self.right
    }

    /// Distinct panel outlines: one when unsplit, left then right when split.
    #[must_use]
    pub fn outlines(&self) -> Vec<&Polygon> {
        if self.is_split() {
            vec![&self.left, &self.right]
        } else {
            vec![&self.left]
        }
    }

    /// Keys of one 1-indexed grid row, in caption order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Key> {
        self.keys.iter().filter(move |k| k.row == row)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.keys.iter().map(|k| k.row).max().unwrap_or(0)
    }
}
