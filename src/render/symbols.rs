//! Static symbol geometry and default-color table.
//!
//! Each symbol kind has a fixed intrinsic width, a right margin, glyph
//! geometry (used both for drawing and as the partial-fill clip mask), and
//! default colors. All kind-specific behavior in the draw engine is a lookup
//! into this table; the drawing routine itself is generic.
//!
//! The glyph coordinates are opaque: they were authored in a shared
//! 80.32-unit-tall coordinate space and are never computed from.

use crate::config::SymbolKind;

/// Shared intrinsic height of every glyph's coordinate space.
pub const SYMBOL_HEIGHT: f64 = 80.32;

/// Glyph geometry: a polygon point list or one or more path strings.
///
/// Multi-path glyphs (accessibility, calendar) draw each path with the same
/// attributes and register each path in the clip mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Polygon(&'static str),
    Paths(&'static [&'static str]),
}

/// Per-kind layout and styling data.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSpec {
    /// Intrinsic glyph width in viewbox units.
    pub width: f64,
    /// Gap to the next symbol in the row.
    pub margin_right: f64,
    pub glyph: Glyph,
    /// Id of the clip path registered for this kind.
    pub clip_id: &'static str,
    pub default_fill: &'static str,
    pub default_stroke: &'static str,
}

impl SymbolSpec {
    /// Fixed horizontal pitch of the symbol row.
    pub fn pitch(&self) -> f64 {
        self.width + self.margin_right
    }
}

const STAR_POINTS: &str = "42.23 2.31 54.4 27.64 82.26 31.39 61.93 50.8 66.97 78.45 42.23 65.12 17.49 78.45 22.53 50.8 2.19 31.39 30.05 27.64 42.23 2.31";

const DOLLAR_SIGN_PATH: &str = "M22.4,70v9.3h-5.3v-9c-6.4,0-11.5-1.2-15.5-3.7v-9.6c1.7,1.5,4.1,2.8,7.1,3.8c3,1,5.8,1.5,8.4,1.5V43.4 C10.3,40.2,6,37.4,4,34.7S1,29,1,25.4c0-4.3,1.5-7.9,4.5-11c3-3.1,6.9-5,11.5-5.6V1h5.3v7.6c6,0.2,10.2,1,12.4,2.4v9.2 c-3.1-2.3-7.3-3.5-12.4-3.7v19.8c6.3,2.9,10.6,5.8,12.9,8.5c2.3,2.7,3.5,5.9,3.5,9.3c0,4.2-1.4,7.7-4.3,10.6 C31.5,67.4,27.5,69.2,22.4,70z M17.1,33.8V16.7C15,17.1,13.3,18,12,19.4c-1.3,1.4-1.9,3.1-1.9,5.1c0,2.1,0.5,3.8,1.5,5.2 C12.7,31.1,14.5,32.4,17.1,33.8z M22.4,45.7v16.5c4.9-1,7.3-3.6,7.3-7.6C29.7,51.2,27.2,48.2,22.4,45.7z";

const HEART_PATH: &str = "M84.7,7.8c-9-9-23.7-9-32.7,0l-5.8,5.8l-5.8-5.8c-9-9-23.7-9-32.7,0s-9,23.7,0,32.7l5.8,5.8l32.7,32.7L79,46.2 l5.8-5.8C93.7,31.5,93.7,16.8,84.7,7.8z";

const THUMBS_UP_PATH: &str = "M28,33.6v44.3c0,1.2-1,1.5-2.5,1.5H2.9c-1.2,0-1.9-0.2-1.9-1.5V33.6c0-1.2,0.6-4.2,1.9-4.2h22.6 C26.8,29.4,28,32.4,28,33.6z M86.2,25.3H73.8H61.3l-0.1-0.1l-0.1-0.1c0,0,1.1-1.3,1.6-4.1s0.3-7-2.4-12.8c-2.7-5.8-6.3-7.4-9.4-7.2 s-5.6,2.2-6.2,3.7C44.1,6.2,44,9.2,44,11.9c0,2.7,0.1,5,0.1,5l-5,8.9l-5,8.9l-2.4,0.9l-2.4,0.9v16.4v16.4c0,0,2.4,1.4,5.4,2.8 c3,1.4,6.6,2.8,9,2.8h1.1h1.1h11.8h11.8h1.8h1.8c0.7,0,2.5,0,4.4-0.6c1.9-0.6,3.8-1.7,4.7-4c0.9-2.3,3.2-10.8,5.3-18.8 c2.1-7.9,3.9-15.3,3.9-15.3c0.3-1.5-0.2-4.3-1.2-6.7C89.2,27.4,87.8,25.3,86.2,25.3z";

const SMILEY_PATH: &str = "M40.2,0.2c-22.1,0-40,17.9-40,40s17.9,40,40,40s40-17.9,40-40S62.2,0.2,40.2,0.2z M51.8,23.4 c2.3,0,4.2,2.8,4.2,6.3S54.2,36,51.8,36s-4.2-2.8-4.2-6.3S49.5,23.4,51.8,23.4z M28.5,23.4c2.3,0,4.2,2.8,4.2,6.3S30.8,36,28.5,36 s-4.2-2.8-4.2-6.3S26.2,23.4,28.5,23.4z M61,55.5c-5.7,5.7-13.3,8.6-20.8,8.6s-15.1-2.9-20.8-8.6c-0.8-0.8-0.8-2.2,0-3 c0.8-0.8,2.2-0.8,3,0c9.9,9.9,25.9,9.8,35.7,0c0.8-0.8,2.2-0.8,3,0C61.8,53.4,61.8,54.7,61,55.5z";

const ACCESSIBILITY_WHEEL_PATH: &str = "M48.1,57.6c-2.8,8.2-10.5,13.8-19.2,13.8c-11.2,0-20.2-9.1-20.2-20.2c0-6.4,3-12.3,8-16.1l0-9.2C7,30.5,0.8,40.3,0.8,51.2 c0,15.5,12.6,28.2,28.2,28.2c9.1,0,17.6-4.4,22.9-11.7L48.1,57.6z";

const ACCESSIBILITY_FIGURE_PATH: &str = "M69.3,59.9L69.3,59.9c-0.6-2.1-2.9-3.2-5-2.6l-1.9,0.6L55,38H30.1v-4.8h11.4c2.2,0,4-1.8,4-4s-1.8-4-4-4H30.1v-9.8 c3.1-0.9,5.2-3.7,5.2-7.1C35.3,4.3,32,1,27.9,1c-4.1,0-7.4,3.3-7.4,7.4c0,1.7,0.6,3.3,1.6,4.6v33h27.3l8.2,21.7l9-2.8 C68.8,64.2,69.9,62,69.3,59.9z";

const CALENDAR_RING_RIGHT_PATH: &str = "M60.1,20.4c1.8,0,3.3-1.5,3.3-3.3V5.3c0-1.8-1.5-3.3-3.3-3.3c-1.8,0-3.3,1.5-3.3,3.3v11.8C56.8,18.9,58.3,20.4,60.1,20.4z";

const CALENDAR_RING_LEFT_PATH: &str = "M20.5,20.4c1.8,0,3.3-1.5,3.3-3.3V5.3c0-1.8-1.5-3.3-3.3-3.3c-1.8,0-3.3,1.5-3.3,3.3v11.8C17.2,18.9,18.7,20.4,20.5,20.4z";

const CALENDAR_BODY_PATH: &str = "M66.7,8.1v3.5c0,1.8,0,3,0,4.9c0,3.6-3,6.6-6.6,6.6c-3.6,0-6.6-3-6.6-6.6c0-2,0-3,0-4.9V8.1H27.2v3.5c0,2.1,0,3,0,4.9 c0,3.6-3,6.6-6.6,6.6c-3.6,0-6.6-3-6.6-6.6c0-2,0-2.9,0-4.9V8.1H1.5v70.2h77.1V8.1H66.7z M21.9,65.2h-7.9v-7.9h7.9V65.2z M21.9,54.6h-7.9v-7.9h7.9V54.6z M33,65.2h-7.9v-7.9H33V65.2z M33,54.6h-7.9v-7.9H33V54.6z M33,44h-7.9V36H33V44z M44.2,65.2h-7.9 v-7.9h7.9V65.2z M44.2,54.6h-7.9v-7.9h7.9V54.6z M44.2,44h-7.9V36h7.9V44z M55.3,65.2h-7.9v-7.9h7.9V65.2z M55.3,54.6h-7.9v-7.9 h7.9V54.6z M55.3,44h-7.9V36h7.9V44z M66.5,54.6h-7.9v-7.9h7.9V54.6z M66.5,44h-7.9V36h7.9V44z M66.5,30.4H13.9v-1.9h52.5V30.4z";

static STAR: SymbolSpec = SymbolSpec {
    width: 84.46,
    margin_right: 4.0,
    glyph: Glyph::Polygon(STAR_POINTS),
    clip_id: "clip-star",
    default_fill: "#FBB040",
    default_stroke: "#FBB040",
};

static DOLLAR_SIGN: SymbolSpec = SymbolSpec {
    width: 39.79,
    margin_right: 10.0,
    glyph: Glyph::Paths(&[DOLLAR_SIGN_PATH]),
    clip_id: "clip-dollarsign",
    default_fill: "#65bb70",
    default_stroke: "#65bb70",
};

static HEART: SymbolSpec = SymbolSpec {
    width: 92.46,
    margin_right: 18.0,
    glyph: Glyph::Paths(&[HEART_PATH]),
    clip_id: "clip-heart",
    default_fill: "#ed2024",
    default_stroke: "#ed2024",
};

static THUMBS_UP: SymbolSpec = SymbolSpec {
    width: 92.6,
    margin_right: 18.0,
    glyph: Glyph::Paths(&[THUMBS_UP_PATH]),
    clip_id: "clip-thumbsup",
    default_fill: "#FCD116",
    default_stroke: "#FCD116",
};

static SMILEY: SymbolSpec = SymbolSpec {
    width: 80.32,
    margin_right: 18.0,
    glyph: Glyph::Paths(&[SMILEY_PATH]),
    clip_id: "clip-smiley",
    default_fill: "#FCD116",
    default_stroke: "#FCD116",
};

static ACCESSIBILITY: SymbolSpec = SymbolSpec {
    width: 74.25,
    margin_right: 12.0,
    glyph: Glyph::Paths(&[ACCESSIBILITY_WHEEL_PATH, ACCESSIBILITY_FIGURE_PATH]),
    clip_id: "clip-accessibility",
    default_fill: "#3399ff",
    default_stroke: "#3399ff",
};

static CALENDAR: SymbolSpec = SymbolSpec {
    width: 80.0,
    margin_right: 18.0,
    glyph: Glyph::Paths(&[
        CALENDAR_RING_RIGHT_PATH,
        CALENDAR_RING_LEFT_PATH,
        CALENDAR_BODY_PATH,
    ]),
    clip_id: "clip-calendar",
    default_fill: "#FBB040",
    default_stroke: "#FBB040",
};

impl SymbolKind {
    /// Geometry and default colors for this kind.
    pub fn spec(self) -> &'static SymbolSpec {
        match self {
            SymbolKind::Star => &STAR,
            SymbolKind::DollarSign => &DOLLAR_SIGN,
            SymbolKind::Heart => &HEART,
            SymbolKind::ThumbsUp => &THUMBS_UP,
            SymbolKind::Smiley => &SMILEY,
            SymbolKind::Accessibility => &ACCESSIBILITY,
            SymbolKind::Calendar => &CALENDAR,
        }
    }
}
