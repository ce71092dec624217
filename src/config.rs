//! Widget configuration and the option groups mirrored back to the host.
//!
//! Every option arrives from the host property pane as an `Option`; `None`
//! means "not configured" and resolves to a documented default. Resolution
//! never fails: out-of-range symbol counts are clamped to
//! [`MIN_SYMBOLS`]`..=`[`MAX_SYMBOLS`] and unknown symbol-kind names fall
//! back to [`SymbolKind::Star`]. Color defaults depend on the resolved
//! symbol kind (see the symbol table in [`crate::render::symbols`]).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound for the configurable symbol count.
pub const MIN_SYMBOLS: u32 = 1;
/// Upper bound for the configurable symbol count.
pub const MAX_SYMBOLS: u32 = 100;

/// Documented defaults, mirrored by the resolved accessors on
/// [`GaugeConfig`]. Per-kind fill/stroke defaults live in the symbol table.
pub mod defaults {
    pub const NUM_SYMBOLS: i64 = 5;
    pub const SHOW_LABEL: bool = true;
    pub const SHOW_STROKE: bool = false;
    pub const SHOW_TARGET_LABEL: bool = true;
    pub const SHOW_MIN_MAX_LABELS: bool = true;
    pub const EMPTY_FILL: &str = "#E6E7E8";
    pub const TARGET_COLOR: &str = "#666666";
    pub const MIN_MAX_COLOR: &str = "#666666";
}

/// The repeated vector shape used as a rating unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SymbolKind {
    #[default]
    Star,
    DollarSign,
    Heart,
    ThumbsUp,
    Smiley,
    Accessibility,
    Calendar,
}

/// Unrecognized symbol-kind name from the host property pane.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol kind: {0:?}")]
pub struct UnknownSymbolKind(pub String);

impl SymbolKind {
    /// All kinds, in property-pane order.
    pub const ALL: [SymbolKind; 7] = [
        SymbolKind::Star,
        SymbolKind::DollarSign,
        SymbolKind::Heart,
        SymbolKind::ThumbsUp,
        SymbolKind::Smiley,
        SymbolKind::Accessibility,
        SymbolKind::Calendar,
    ];

    /// Name used on the wire by the host property pane.
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Star => "star",
            SymbolKind::DollarSign => "dollarsign",
            SymbolKind::Heart => "heart",
            SymbolKind::ThumbsUp => "thumbsup",
            SymbolKind::Smiley => "smiley",
            SymbolKind::Accessibility => "accessibility",
            SymbolKind::Calendar => "calendar",
        }
    }

    /// Parse a property-pane name, falling back to the default kind.
    ///
    /// This is the resolution entry point: the widget never rejects a
    /// configuration, it degrades to the primary shape.
    pub fn from_name(name: &str) -> SymbolKind {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for SymbolKind {
    type Err = UnknownSymbolKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSymbolKind(s.to_string()))
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw configuration as supplied by the host.
///
/// Use the accessor methods to obtain resolved values; they encode the
/// default-or-configured lookup and never fail.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GaugeConfig {
    pub symbol: Option<SymbolKind>,
    pub num_symbols: Option<i64>,
    pub show_label: Option<bool>,
    pub show_stroke: Option<bool>,
    pub show_target_label: Option<bool>,
    pub show_min_max_labels: Option<bool>,
    pub stroke_color: Option<String>,
    pub fill_color: Option<String>,
    pub empty_fill_color: Option<String>,
    pub target_color: Option<String>,
    pub min_max_color: Option<String>,
    /// Axis lower bound when the data binding supplies none.
    pub min: Option<f64>,
    /// Axis upper bound when the data binding supplies none.
    pub max: Option<f64>,
    /// Target marker value when the data binding supplies none.
    pub target: Option<f64>,
}

impl GaugeConfig {
    pub fn symbol(&self) -> SymbolKind {
        self.symbol.unwrap_or_default()
    }

    /// Symbol count, clamped to `[MIN_SYMBOLS, MAX_SYMBOLS]`.
    pub fn num_symbols(&self) -> u32 {
        let configured = self.num_symbols.unwrap_or(defaults::NUM_SYMBOLS);
        if !(MIN_SYMBOLS as i64..=MAX_SYMBOLS as i64).contains(&configured) {
            crate::log::warn!(configured, "symbol count out of range, clamping");
        }
        configured.clamp(MIN_SYMBOLS as i64, MAX_SYMBOLS as i64) as u32
    }

    pub fn show_label(&self) -> bool {
        self.show_label.unwrap_or(defaults::SHOW_LABEL)
    }

    pub fn show_stroke(&self) -> bool {
        self.show_stroke.unwrap_or(defaults::SHOW_STROKE)
    }

    pub fn show_target_label(&self) -> bool {
        self.show_target_label.unwrap_or(defaults::SHOW_TARGET_LABEL)
    }

    pub fn show_min_max_labels(&self) -> bool {
        self.show_min_max_labels.unwrap_or(defaults::SHOW_MIN_MAX_LABELS)
    }

    pub fn stroke_color(&self) -> String {
        self.stroke_color
            .clone()
            .unwrap_or_else(|| self.symbol().spec().default_stroke.to_string())
    }

    pub fn fill_color(&self) -> String {
        self.fill_color
            .clone()
            .unwrap_or_else(|| self.symbol().spec().default_fill.to_string())
    }

    pub fn empty_fill_color(&self) -> String {
        self.empty_fill_color
            .clone()
            .unwrap_or_else(|| defaults::EMPTY_FILL.to_string())
    }

    pub fn target_color(&self) -> String {
        self.target_color
            .clone()
            .unwrap_or_else(|| defaults::TARGET_COLOR.to_string())
    }

    pub fn min_max_color(&self) -> String {
        self.min_max_color
            .clone()
            .unwrap_or_else(|| defaults::MIN_MAX_COLOR.to_string())
    }

    /// Resolved symbol option group for the host property pane.
    pub fn symbol_options(&self) -> SymbolOptions {
        SymbolOptions {
            symbol: self.symbol(),
            num_symbols: self.num_symbols(),
            show_label: self.show_label(),
            show_stroke: self.show_stroke(),
            show_target_label: self.show_target_label(),
            show_min_max_labels: self.show_min_max_labels(),
        }
    }

    /// Resolved color option group for the host property pane.
    pub fn color_options(&self) -> ColorOptions {
        ColorOptions {
            stroke_color: self.stroke_color(),
            fill_color: self.fill_color(),
            empty_fill_color: self.empty_fill_color(),
            target_color: self.target_color(),
            min_max_color: self.min_max_color(),
        }
    }

    /// Axis option group. These stay `Option`: an unset bound is a real
    /// state (it defers to the data binding or the documented defaults),
    /// not a value.
    pub fn axis_options(&self) -> AxisOptions {
        AxisOptions {
            min: self.min,
            max: self.max,
            target: self.target,
        }
    }
}

/// Symbol options, resolved, as shown in the host property pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolOptions {
    pub symbol: SymbolKind,
    pub num_symbols: u32,
    pub show_label: bool,
    pub show_stroke: bool,
    pub show_target_label: bool,
    pub show_min_max_labels: bool,
}

/// Color options, resolved, as shown in the host property pane.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorOptions {
    pub stroke_color: String,
    pub fill_color: String,
    pub empty_fill_color: String,
    pub target_color: String,
    pub min_max_color: String,
}

/// Axis bounds and target as configured (unset bounds defer to the data
/// binding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub target: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in SymbolKind::ALL {
            assert_eq!(kind.as_str().parse::<SymbolKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_falls_back_to_star() {
        assert_eq!(SymbolKind::from_name("banana"), SymbolKind::Star);
        assert!("banana".parse::<SymbolKind>().is_err());
    }

    #[test]
    fn symbol_count_clamps_to_limits() {
        let mut config = GaugeConfig::default();
        assert_eq!(config.num_symbols(), 5);

        config.num_symbols = Some(500);
        assert_eq!(config.num_symbols(), 100);

        config.num_symbols = Some(0);
        assert_eq!(config.num_symbols(), 1);

        config.num_symbols = Some(-3);
        assert_eq!(config.num_symbols(), 1);
    }

    #[test]
    fn color_defaults_follow_symbol_kind() {
        let star = GaugeConfig::default();
        assert_eq!(star.fill_color(), "#FBB040");

        let heart = GaugeConfig {
            symbol: Some(SymbolKind::Heart),
            ..Default::default()
        };
        assert_eq!(heart.fill_color(), "#ed2024");
        assert_eq!(heart.stroke_color(), "#ed2024");
        // Empty fill and label colors are kind-independent.
        assert_eq!(heart.empty_fill_color(), "#E6E7E8");
        assert_eq!(heart.min_max_color(), "#666666");
    }

    #[test]
    fn configured_colors_override_defaults() {
        let config = GaugeConfig {
            fill_color: Some("#123456".to_string()),
            ..Default::default()
        };
        assert_eq!(config.fill_color(), "#123456");
        assert_eq!(config.color_options().fill_color, "#123456");
    }

    #[test]
    fn option_groups_reflect_resolved_values() {
        let config = GaugeConfig {
            num_symbols: Some(250),
            show_stroke: Some(true),
            target: Some(0.0),
            ..Default::default()
        };
        let symbols = config.symbol_options();
        assert_eq!(symbols.num_symbols, 100);
        assert!(symbols.show_stroke);
        assert!(symbols.show_label);
        // A configured zero target is present, not "unset".
        assert_eq!(config.axis_options().target, Some(0.0));
        assert_eq!(config.axis_options().min, None);
    }
}
