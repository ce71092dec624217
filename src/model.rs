//! View-model builder: host data plus configuration, normalized for drawing.
//!
//! [`ViewModel::build`] is pure and infallible: missing or malformed inputs
//! degrade to documented defaults, never to an error. The resulting structure
//! is everything the draw engine needs — value and target already scaled into
//! the `0..num_symbols` symbol-index domain, labels pre-formatted as strings,
//! and colors resolved.

use crate::config::{GaugeConfig, SymbolKind};
use crate::data::{DataView, Role, format_glyph};
use crate::render::svg::fmt_num;

/// How the value and axis labels are formatted, classified from the value
/// column's display-format glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Value is a fraction; labels multiply by 100 and append `%`.
    Percent,
    /// Labels carry a currency glyph prefix.
    Symbol(char),
    /// Plain numeric labels, rounded to one decimal place.
    Plain,
}

/// Normalized, render-ready state for one update cycle.
///
/// `value` and `target` live in the symbol-index domain: `0.0` is an empty
/// row, `num_symbols as f64` is a full one. Values outside the configured
/// `[min, max]` extrapolate linearly past those bounds on purpose, so an
/// off-scale reading is visible as such. A degenerate domain (`max == min`)
/// leaves them non-finite; the draw engine renders that as fully empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub symbol: SymbolKind,
    pub num_symbols: u32,
    /// Scaled value in the symbol-index domain.
    pub value: f64,
    /// Scaled target, when a target was bound or configured.
    pub target: Option<f64>,
    pub format: LabelFormat,
    pub value_label: String,
    pub min_label: String,
    pub max_label: String,
    pub target_label: Option<String>,
    /// Whether min or max was actually supplied (data binding or
    /// configuration); drives the min/max label row.
    pub has_min_max: bool,
    pub show_label: bool,
    pub show_stroke: bool,
    pub show_target_label: bool,
    pub show_min_max_labels: bool,
    pub stroke_color: String,
    pub fill_color: String,
    pub empty_fill_color: String,
    pub target_color: String,
    pub min_max_color: String,
}

impl ViewModel {
    /// Convert a data view and configuration into a view-model.
    pub fn build(view: &DataView, config: &GaugeConfig) -> ViewModel {
        let value_measure = view.find(Role::Value);
        let mut value = value_measure.map_or(0.0, |m| m.value);
        let glyph = value_measure
            .and_then(|m| m.format.as_deref())
            .and_then(format_glyph);

        // The data binding wins over the formatting pane for axis bounds and
        // target; presence is tracked explicitly so a bound zero counts.
        let min = view.find(Role::Min).map(|m| m.value).or(config.min);
        let max = view.find(Role::Max).map(|m| m.value).or(config.max);
        let mut target = view.find(Role::Target).map(|m| m.value).or(config.target);

        let num_symbols = config.num_symbols();
        let format = match glyph {
            Some('%') => LabelFormat::Percent,
            Some(glyph) => LabelFormat::Symbol(glyph),
            None => LabelFormat::Plain,
        };

        // Plain mode displays one decimal place, and the rounded value is
        // also what gets scaled, so the bar agrees with its label.
        if format == LabelFormat::Plain {
            value = round_tenth(value);
            target = target.map(round_tenth);
        }

        let eff_min = min.unwrap_or(0.0);
        let eff_max = max.unwrap_or(match format {
            LabelFormat::Percent => 1.0,
            _ => num_symbols as f64,
        });

        let (value_label, min_label, max_label, target_label) = match format {
            LabelFormat::Percent => (
                percent_label(value),
                percent_label(eff_min),
                percent_label(eff_max),
                target.map(percent_label),
            ),
            LabelFormat::Symbol(glyph) => (
                format!("{glyph}{}", fmt_num(value)),
                fmt_num(eff_min),
                fmt_num(eff_max),
                target.map(|t| format!("{glyph}{}", fmt_num(t))),
            ),
            LabelFormat::Plain => (
                fmt_num(value),
                fmt_num(eff_min),
                fmt_num(eff_max),
                target.map(fmt_num),
            ),
        };

        // Degenerate domain (max == min) divides by zero on purpose; the
        // draw engine treats the resulting non-finite values as empty.
        let scale = num_symbols as f64 / (eff_max - eff_min);
        let scaled_value = value * scale - eff_min * scale;
        let scaled_target = target.map(|t| t * scale - eff_min * scale);

        crate::log::debug!(
            raw = value,
            min = eff_min,
            max = eff_max,
            scaled = scaled_value,
            "scaled value into symbol domain"
        );

        ViewModel {
            symbol: config.symbol(),
            num_symbols,
            value: scaled_value,
            target: scaled_target,
            format,
            value_label,
            min_label,
            max_label,
            target_label,
            has_min_max: min.is_some() || max.is_some(),
            show_label: config.show_label(),
            show_stroke: config.show_stroke(),
            show_target_label: config.show_target_label(),
            show_min_max_labels: config.show_min_max_labels(),
            stroke_color: config.stroke_color(),
            fill_color: config.fill_color(),
            empty_fill_color: config.empty_fill_color(),
            target_color: config.target_color(),
            min_max_color: config.min_max_color(),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent_label(value: f64) -> String {
    format!("{}%", fmt_num(value * 100.0))
}
