//! Recognizer output and cell labelling
//!
//! The text-recognition step is an external collaborator. It hands over an
//! ordered list of [`Detection`]s, each a piece of recognized text with its
//! bounding box in image coordinates. Only two label classes matter to a
//! Karnaugh map:
//!
//! - `"1"` marks a cell where the function must be true ([`Mark::Must`])
//! - `"X"`, `"x"` or `"*"` marks a don't-care cell ([`Mark::DontCare`])
//!
//! Everything else is ignored.

use crate::error::KmapError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// An axis-aligned rectangle in image pixel coordinates
///
/// `right` and `bottom` are exclusive, following the usual image convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal centre, rounded towards negative infinity
    pub fn center_x(&self) -> i32 {
        midpoint(self.left, self.right)
    }

    /// Vertical centre, rounded towards negative infinity
    pub fn center_y(&self) -> i32 {
        midpoint(self.top, self.bottom)
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

// The midpoint of two i32 values always fits in an i32
fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) >> 1) as i32
}

/// A piece of recognized text and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    pub bbox: Rect,
}

impl Detection {
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Detection {
            text: text.into(),
            bbox,
        }
    }

    /// Classify this detection, returning `None` for irrelevant text
    pub fn mark(&self) -> Option<Mark> {
        Mark::from_text(&self.text)
    }

    /// Read detections from a JSON array
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_vision::Detection;
    ///
    /// let json = r#"[{"text": "1", "bbox": {"left": 0, "top": 0, "right": 20, "bottom": 30}}]"#;
    /// let detections = Detection::from_json_reader(json.as_bytes()).unwrap();
    /// assert_eq!(detections.len(), 1);
    /// assert_eq!(detections[0].bbox.center_x(), 10);
    /// ```
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Detection>, KmapError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read detections from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Detection>, KmapError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

/// The label carried by a marked cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// The function must be 1 here
    Must,
    /// The function value is unconstrained here
    DontCare,
}

impl Mark {
    /// Map recognized text onto a cell label
    ///
    /// ```
    /// use kmap_vision::Mark;
    ///
    /// assert_eq!(Mark::from_text("1"), Some(Mark::Must));
    /// assert_eq!(Mark::from_text("x"), Some(Mark::DontCare));
    /// assert_eq!(Mark::from_text("*"), Some(Mark::DontCare));
    /// assert_eq!(Mark::from_text("0"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Mark> {
        if text == "1" {
            Some(Mark::Must)
        } else if text.eq_ignore_ascii_case("x") || text == "*" {
            Some(Mark::DontCare)
        } else {
            None
        }
    }
}

/// A rectangle tagged with its cell label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRect {
    pub rect: Rect,
    pub mark: Mark,
}

impl LabeledRect {
    pub fn new(rect: Rect, mark: Mark) -> Self {
        LabeledRect { rect, mark }
    }
}

/// Keep only the detections that label a cell
///
/// The result lists every [`Mark::Must`] rectangle before every
/// [`Mark::DontCare`] one, each class in recognizer order. Grid construction
/// depends on this ordering through the stable sorts that feed clustering.
pub fn label_detections(detections: &[Detection]) -> Vec<LabeledRect> {
    let mut must = Vec::new();
    let mut dont_care = Vec::new();

    for detection in detections {
        match detection.mark() {
            Some(Mark::Must) => must.push(LabeledRect::new(detection.bbox, Mark::Must)),
            Some(Mark::DontCare) => {
                dont_care.push(LabeledRect::new(detection.bbox, Mark::DontCare))
            }
            None => {}
        }
    }

    must.extend(dont_care);
    must
}
