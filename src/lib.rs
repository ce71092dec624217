//! stargauge renders a data-driven rating gauge as SVG: a row of repeated
//! vector symbols (stars, hearts, dollar signs and friends) filled in
//! proportion to a bound value, with optional value, min/max and target
//! labels.
//!
//! The pipeline is deliberately small and pure:
//!
//! 1. The host supplies a [`DataView`] (measures tagged with roles) and a
//!    [`GaugeConfig`] (property-pane options, all optional).
//! 2. [`ViewModel::build`] normalizes them: scales the value into the
//!    symbol-index domain, classifies the label format from the value
//!    column's display format, resolves colors and flags.
//! 3. [`render::draw`] lays out and emits a typed SVG DOM, which
//!    [`Svg::to_svg_string`] serializes.
//!
//! Text measurement is a seam: the draw engine asks a [`TextMeasurer`] for
//! label widths, so hosts with real font metrics can plug theirs in. The
//! built-in [`CharWidthMeasurer`] uses a proportional advance-width table
//! and needs no font infrastructure.
//!
//! ```
//! use stargauge::{DataView, Gauge, GaugeConfig, Measure, Role, Viewport};
//!
//! let gauge = Gauge::new(GaugeConfig::default());
//! let mut data = DataView::new();
//! data.push(Measure::new(Role::Value, 3.5));
//!
//! let svg = gauge.update(&data, Viewport::new(400.0, 100.0));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("viewBox"));
//! ```

mod log;

pub mod config;
pub mod data;
pub mod measure;
pub mod model;
pub mod render;

pub use config::{
    AxisOptions, ColorOptions, GaugeConfig, MAX_SYMBOLS, MIN_SYMBOLS, SymbolKind, SymbolOptions,
    UnknownSymbolKind,
};
pub use data::{DataView, Measure, Role};
pub use measure::{CharWidthMeasurer, TextMeasurer};
pub use model::{LabelFormat, ViewModel};
pub use render::{Svg, Viewport, draw, draw_svg};

/// A configured gauge instance, the widget-shaped entry point.
///
/// Hosts that keep a live widget hold one of these across updates; each
/// [`update`](Gauge::update) call is a full redraw from the supplied data.
/// One-shot rendering can use [`render_gauge`] instead.
pub struct Gauge {
    config: GaugeConfig,
    measurer: Box<dyn TextMeasurer>,
}

impl Gauge {
    /// Create a gauge using the built-in character-width measurer.
    pub fn new(config: GaugeConfig) -> Gauge {
        Gauge {
            config,
            measurer: Box::new(CharWidthMeasurer),
        }
    }

    /// Create a gauge with a host-supplied text measurer.
    pub fn with_measurer(config: GaugeConfig, measurer: Box<dyn TextMeasurer>) -> Gauge {
        Gauge { config, measurer }
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next update.
    pub fn set_config(&mut self, config: GaugeConfig) {
        self.config = config;
    }

    /// Render the given data into an SVG document string.
    pub fn update(&self, view: &DataView, viewport: Viewport) -> String {
        self.update_with(view, viewport).to_svg_string()
    }

    /// Render into the typed SVG DOM, for hosts that post-process it.
    pub fn update_with(&self, view: &DataView, viewport: Viewport) -> Svg {
        let vm = ViewModel::build(view, &self.config);
        render::draw(&vm, viewport, self.measurer.as_ref())
    }

    /// Resolved symbol options, for mirroring back to a property pane.
    pub fn symbol_options(&self) -> SymbolOptions {
        self.config.symbol_options()
    }

    /// Resolved color options, for mirroring back to a property pane.
    pub fn color_options(&self) -> ColorOptions {
        self.config.color_options()
    }

    /// Axis options as configured.
    pub fn axis_options(&self) -> AxisOptions {
        self.config.axis_options()
    }
}

impl std::fmt::Debug for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gauge")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One-shot render: build the view-model and serialize in a single call.
pub fn render_gauge(view: &DataView, config: &GaugeConfig, viewport: Viewport) -> String {
    let vm = ViewModel::build(view, config);
    render::draw_svg(&vm, viewport, &CharWidthMeasurer)
}
