//! The host-supplied data binding: role-tagged numeric measures.
//!
//! On every update the host hands the widget a [`DataView`] holding zero or
//! more bound columns. Each column carries a [`Role`] (which slot of the gauge
//! it feeds), a numeric value, and optionally the host's display-format string
//! for that column. The format string is only inspected for a currency or
//! percent glyph; everything else about it is opaque to the widget.

/// Which slot of the gauge a bound measure feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Value,
    Min,
    Max,
    Target,
}

/// One bound numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub role: Role,
    pub value: f64,
    /// Host display-format string, e.g. `"$#,0"` or `"0.0%"`.
    pub format: Option<String>,
}

impl Measure {
    pub fn new(role: Role, value: f64) -> Self {
        Self {
            role,
            value,
            format: None,
        }
    }

    pub fn with_format(role: Role, value: f64, format: impl Into<String>) -> Self {
        Self {
            role,
            value,
            format: Some(format.into()),
        }
    }
}

/// The tabular binding supplied by the host on each update.
///
/// An empty view is a valid "no binding" state; the builder falls back to
/// configured defaults for everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataView {
    pub measures: Vec<Measure>,
}

impl DataView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, measure: Measure) {
        self.measures.push(measure);
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// The measure bound to `role`, if any. When the host binds a role more
    /// than once the last binding wins.
    pub(crate) fn find(&self, role: Role) -> Option<&Measure> {
        self.measures.iter().rev().find(|m| m.role == role)
    }
}

/// Currency and percent glyphs recognized in display-format strings.
const FORMAT_GLYPHS: [char; 6] = ['$', '€', '£', '¥', '₩', '%'];

/// First recognized glyph in a display-format string, if any.
///
/// The scan is leftmost-in-string: `"$ 0.0%"` yields `$`, not `%`.
pub fn format_glyph(format: &str) -> Option<char> {
    format.chars().find(|c| FORMAT_GLYPHS.contains(c))
}
