//! Layout and draw engine: consumes a [`ViewModel`] and emits the SVG DOM.
//!
//! Submodules:
//! - `symbols`: static per-kind geometry and default-color table
//! - `svg`: typed SVG elements and XML serialization
//!
//! Each draw cycle is: measure the value label (pass 1), compute the
//! viewbox, then place labels, symbols (with partial-fill clipping) and the
//! target marker (pass 2). Nothing is retained between cycles; calling
//! [`draw`] twice with the same view-model produces identical output.

pub mod svg;
pub mod symbols;

pub use svg::Svg;
pub use symbols::{Glyph, SYMBOL_HEIGHT, SymbolSpec};

use glam::dvec2;

use crate::measure::TextMeasurer;
use crate::model::ViewModel;
use svg::{ClipPath, Defs, Group, Path, Polygon, Rect, SvgNode, Text, fmt_num, translate, translate_x};

/// Host viewport, in device pixels. The drawing scales into it through the
/// viewbox; aspect is preserved by the SVG default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved between the value label and the first symbol.
const LABEL_PADDING: f64 = 16.0;
/// Extra viewbox height for the min/max label row.
const MIN_MAX_ROW_HEIGHT: f64 = 24.0;
/// Extra viewbox height and symbol-row offset when the target label shows.
const TARGET_LABEL_HEIGHT: f64 = 32.0;
const TARGET_LABEL_OFFSET: f64 = 28.0;
/// Clearance when only the target line shows (it overshoots the glyphs by
/// 4 units top and bottom).
const TARGET_LINE_HEIGHT: f64 = 8.0;
const TARGET_LINE_OFFSET: f64 = 4.0;
/// Font size for min/max and target labels.
const AXIS_FONT_SIZE: f64 = 24.0;
const FONT_FAMILY: &str = "Segoe UI, Arial, sans-serif";
/// Stroke width applied to glyph outlines when stroke display is on.
const OUTLINE_WIDTH: f64 = 2.0;

/// Fill fraction for symbol `index` (0-based) given the scaled value.
///
/// Non-finite values — the degenerate `max == min` domain — render as fully
/// empty rather than propagating NaN into geometry.
pub fn fill_level(value: f64, index: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let next = (index + 1) as f64;
    if next <= value {
        1.0
    } else if next - value < 1.0 {
        value - value.floor()
    } else {
        0.0
    }
}

/// Horizontal layout for one draw cycle: a fixed-pitch row offset by the
/// measured value-label width.
struct Layout {
    spec: &'static SymbolSpec,
    label_width: f64,
}

impl Layout {
    /// Leading edge of symbol `index`.
    fn symbol_x(&self, index: u32) -> f64 {
        index as f64 * self.spec.pitch() + self.label_width
    }

    /// Row width through `count` symbols; also the viewbox width.
    fn row_width(&self, count: u32) -> f64 {
        self.symbol_x(count)
    }

    /// Target marker x. Whole targets center in the gap before the next
    /// symbol; fractional targets interpolate into the current symbol's
    /// width. The fractional remainder is snapped to two decimals first.
    fn target_x(&self, target: f64) -> f64 {
        let remainder = (target.fract() * 100.0).round() / 100.0;
        let whole = target - remainder;
        if remainder == 0.0 {
            whole * self.spec.pitch() - self.spec.margin_right / 2.0 + self.label_width
        } else {
            whole * self.spec.pitch() + remainder * self.spec.width + self.label_width
        }
    }
}

/// Draw the gauge into a typed SVG DOM sized to `viewport`.
pub fn draw(vm: &ViewModel, viewport: Viewport, measurer: &dyn TextMeasurer) -> Svg {
    let spec = vm.symbol.spec();

    // Pass 1: the value label's width offsets the whole symbol row.
    let label_font = SYMBOL_HEIGHT / 2.0;
    let label_width = if vm.show_label {
        measurer.measure(&vm.value_label, label_font) + LABEL_PADDING
    } else {
        0.0
    };
    let layout = Layout { spec, label_width };

    // A bound-but-degenerate target is dropped here, not rendered at NaN.
    let target = vm.target.filter(|t| t.is_finite());

    // The viewbox grows by fixed increments so labels and the marker line
    // stay inside it.
    let mut view_height = SYMBOL_HEIGHT;
    let mut row_offset_y = 0.0;
    let show_min_max = vm.has_min_max && vm.show_min_max_labels;
    if show_min_max {
        view_height += MIN_MAX_ROW_HEIGHT;
    }
    if target.is_some() {
        if vm.show_target_label {
            view_height += TARGET_LABEL_HEIGHT;
            row_offset_y += TARGET_LABEL_OFFSET;
        } else {
            view_height += TARGET_LINE_HEIGHT;
            row_offset_y += TARGET_LINE_OFFSET;
        }
    }

    let mut children = Vec::new();

    // One clip mask, for the resolved kind only; partial fills clip to it.
    children.push(SvgNode::Defs(Defs {
        children: vec![SvgNode::ClipPath(ClipPath {
            id: spec.clip_id.to_string(),
            children: glyph_nodes(spec, None, None, None, None),
        })],
    }));

    // The value label and the symbols share a group so the target rows can
    // push them down together.
    let mut row = Group {
        transform: Some(translate(dvec2(0.0, row_offset_y))),
        ..Default::default()
    };

    if vm.show_label {
        row.children.push(SvgNode::Text(Text {
            fill: Some(vm.fill_color.clone()),
            stroke: Some(vm.fill_color.clone()),
            font_family: Some(FONT_FAMILY.to_string()),
            font_size: Some(format!("{}px", fmt_num(label_font))),
            transform: Some(translate(dvec2(0.0, SYMBOL_HEIGHT * 2.0 / 3.0))),
            content: vm.value_label.clone(),
        }));
    }

    for index in 0..vm.num_symbols {
        let fill = fill_level(vm.value, index);
        if fill == 0.0 || fill == 1.0 {
            row.children
                .extend(filled_symbol(vm, spec, fill, layout.symbol_x(index)));
        } else {
            row.children
                .push(partial_symbol(vm, spec, fill, layout.symbol_x(index)));
            // Redraw the outline unclipped so the mask rectangle cannot
            // obscure it.
            if vm.show_stroke {
                row.children.extend(glyph_nodes(
                    spec,
                    Some("none"),
                    Some(&vm.stroke_color),
                    Some(OUTLINE_WIDTH),
                    Some(&translate_x(layout.symbol_x(index))),
                ));
            }
        }
    }

    children.push(SvgNode::Group(row));

    if show_min_max {
        push_min_max_labels(vm, &layout, view_height, measurer, &mut children);
    }

    if let Some(target) = target {
        children.push(target_group(vm, &layout, target, measurer));
    }

    crate::log::debug!(
        width = layout.row_width(vm.num_symbols),
        height = view_height,
        label_width,
        "viewbox computed"
    );

    Svg {
        width: Some(viewport.width),
        height: Some(viewport.height),
        view_box: Some(format!(
            "0 0 {} {}",
            fmt_num(layout.row_width(vm.num_symbols)),
            fmt_num(view_height)
        )),
        children,
    }
}

/// Draw and serialize in one step.
pub fn draw_svg(vm: &ViewModel, viewport: Viewport, measurer: &dyn TextMeasurer) -> String {
    draw(vm, viewport, measurer).to_svg_string()
}

/// The glyph as drawable nodes: one polygon, or one node per path for
/// multi-path kinds, all sharing the same attributes.
fn glyph_nodes(
    spec: &SymbolSpec,
    fill: Option<&str>,
    stroke: Option<&str>,
    stroke_width: Option<f64>,
    transform: Option<&str>,
) -> Vec<SvgNode> {
    match spec.glyph {
        Glyph::Polygon(points) => vec![SvgNode::Polygon(Polygon {
            points: points.to_string(),
            fill: fill.map(str::to_string),
            stroke: stroke.map(str::to_string),
            stroke_width,
            transform: transform.map(str::to_string),
        })],
        Glyph::Paths(paths) => paths
            .iter()
            .map(|d| {
                SvgNode::Path(Path {
                    d: d.to_string(),
                    fill: fill.map(str::to_string),
                    stroke: stroke.map(str::to_string),
                    stroke_width,
                    transform: transform.map(str::to_string),
                })
            })
            .collect(),
    }
}

/// A fully filled or fully empty symbol at `x`.
fn filled_symbol(vm: &ViewModel, spec: &SymbolSpec, fill: f64, x: f64) -> Vec<SvgNode> {
    let color = if fill == 0.0 {
        &vm.empty_fill_color
    } else {
        &vm.fill_color
    };
    glyph_nodes(
        spec,
        Some(color),
        Some(&vm.stroke_color),
        Some(outline_width(vm)),
        Some(&translate_x(x)),
    )
}

/// A partially filled symbol: the full glyph drawn inside a group clipped to
/// its own silhouette, then masked on the right by an empty-fill rectangle
/// of width `(1 - fill) * symbol_width`.
fn partial_symbol(vm: &ViewModel, spec: &SymbolSpec, fill: f64, x: f64) -> SvgNode {
    let mut group = Group {
        clip_path: Some(format!("url(#{})", spec.clip_id)),
        transform: Some(translate_x(x)),
        ..Default::default()
    };

    // Full glyph under the mask so nothing shows through from beneath the
    // rectangle.
    group.children.extend(glyph_nodes(
        spec,
        Some(&vm.fill_color),
        Some(&vm.stroke_color),
        Some(outline_width(vm)),
        None,
    ));

    let mask_width = (1.0 - fill) * spec.width;
    group.children.push(SvgNode::Rect(Rect {
        width: mask_width,
        height: SYMBOL_HEIGHT,
        fill: Some(vm.empty_fill_color.clone()),
        transform: Some(translate_x(spec.width - mask_width)),
    }));

    SvgNode::Group(group)
}

fn outline_width(vm: &ViewModel) -> f64 {
    if vm.show_stroke { OUTLINE_WIDTH } else { 0.0 }
}

fn axis_text(color: &str, transform: String, content: String) -> SvgNode {
    SvgNode::Text(Text {
        fill: Some(color.to_string()),
        stroke: Some(color.to_string()),
        font_family: Some(FONT_FAMILY.to_string()),
        font_size: Some(format!("{}px", fmt_num(AXIS_FONT_SIZE))),
        transform: Some(transform),
        content,
    })
}

/// Min label near the first symbol's leading edge; max label right-aligned
/// so its right edge meets the last symbol's right edge (measured first —
/// the same two-pass pattern as the value label).
fn push_min_max_labels(
    vm: &ViewModel,
    layout: &Layout,
    view_height: f64,
    measurer: &dyn TextMeasurer,
    children: &mut Vec<SvgNode>,
) {
    let min_x = layout.target_x(0.0) + 2.0;
    children.push(axis_text(
        &vm.min_max_color,
        translate(dvec2(min_x, view_height - 2.0)),
        vm.min_label.clone(),
    ));

    let max_width = measurer.measure(&vm.max_label, AXIS_FONT_SIZE);
    let max_x =
        layout.target_x((vm.num_symbols - 1) as f64) + layout.spec.width - max_width;
    children.push(axis_text(
        &vm.min_max_color,
        translate(dvec2(max_x, view_height - 2.0)),
        vm.max_label.clone(),
    ));
}

/// The target marker: a 2-unit-wide line overshooting the glyph height,
/// with an optional centered label above it.
fn target_group(
    vm: &ViewModel,
    layout: &Layout,
    target: f64,
    measurer: &dyn TextMeasurer,
) -> SvgNode {
    let mut group = Group {
        class: Some("target-line-group".to_string()),
        transform: Some(translate_x(layout.target_x(target))),
        ..Default::default()
    };

    let mut line_offset_y = 0.0;
    if vm.show_target_label {
        if let Some(label) = &vm.target_label {
            let width = measurer.measure(label, AXIS_FONT_SIZE);
            group.children.push(axis_text(
                &vm.target_color,
                translate(dvec2(-width / 2.0, 18.0)),
                label.clone(),
            ));
            line_offset_y = 24.0;
        }
    }

    group.children.push(SvgNode::Rect(Rect {
        width: 2.0,
        height: SYMBOL_HEIGHT + 8.0,
        fill: Some(vm.target_color.clone()),
        transform: Some(translate(dvec2(-1.0, line_offset_y))),
    }));

    SvgNode::Group(group)
}
