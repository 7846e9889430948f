//! Mind-map renderer: laid-out tree to a radial diagram via plotters.
//!
//! One generic drawing routine feeds both the bitmap (PNG) and the vector
//! (SVG) backend. Connectors are drawn first so every marker sits on top.

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::{debug, instrument};

use crate::arena::{NodeData, OutlineArena};
use crate::config::CanvasSettings;
use crate::errors::{OutlineError, OutlineResult};

/// Connector lines between parents and children
const CONNECTOR: RGBColor = RGBColor(0x94, 0xa3, 0xb8);
/// Root marker fill
const ROOT_FILL: RGBColor = RGBColor(0x0b, 0x39, 0x54);
/// First-level branch accent
const BRANCH: RGBColor = RGBColor(0x08, 0x7e, 0x8b);
/// Second-level accent
const SECTION: RGBColor = RGBColor(0x1f, 0x48, 0x7e);
/// Everything deeper
const DETAIL: RGBColor = RGBColor(0x47, 0x55, 0x69);

const CONNECTOR_WIDTH_PT: f64 = 1.15;
const ROOT_MARKER_PT: f64 = 21.0;
const ROOT_FONT_PT: f64 = 18.0;

/// Marker radius, font size (both in points) and label weight per depth.
fn depth_style(depth: usize) -> (RGBColor, f64, f64, FontStyle) {
    match depth {
        1 => (BRANCH, 8.4, 13.0, FontStyle::Bold),
        2 => (SECTION, 5.4, 11.0, FontStyle::Bold),
        _ => (DETAIL, 4.4, 10.0, FontStyle::Normal),
    }
}

/// Render the laid-out tree as a PNG raster image.
///
/// `dpi` is the resolution in dots per plan unit; the canvas side is
/// `canvas.size_units * dpi` pixels.
#[instrument(level = "debug", skip(arena, canvas))]
pub fn render_bitmap(
    arena: &OutlineArena,
    path: &Path,
    dpi: u32,
    canvas: &CanvasSettings,
) -> OutlineResult<()> {
    let side = pixel_side(canvas, dpi);
    let root = BitMapBackend::new(path, (side, side)).into_drawing_area();
    draw_map(&root, arena, dpi, canvas, path)
}

/// Render the laid-out tree as an SVG vector image.
#[instrument(level = "debug", skip(arena, canvas))]
pub fn render_vector(
    arena: &OutlineArena,
    path: &Path,
    dpi: u32,
    canvas: &CanvasSettings,
) -> OutlineResult<()> {
    let side = pixel_side(canvas, dpi);
    let root = SVGBackend::new(path, (side, side)).into_drawing_area();
    draw_map(&root, arena, dpi, canvas, path)
}

fn pixel_side(canvas: &CanvasSettings, dpi: u32) -> u32 {
    (canvas.size_units * dpi as f64).round() as u32
}

/// Square data window covering every node position plus the label margin.
fn plan_extent(arena: &OutlineArena, margin: f64) -> f64 {
    let mut extent = 0.0f64;
    for (_, node) in arena.iter() {
        let (x, y) = node.data.coords();
        extent = extent.max(x.abs()).max(y.abs());
    }
    extent + margin
}

fn draw_map<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    arena: &OutlineArena,
    dpi: u32,
    canvas: &CanvasSettings,
    path: &Path,
) -> OutlineResult<()> {
    let target = path.to_path_buf();
    let write_err = move |reason: String| OutlineError::OutputWrite {
        path: target.clone(),
        reason,
    };

    root.fill(&WHITE).map_err(|e| write_err(e.to_string()))?;

    let (width, height) = root.dim_in_pixel();
    let extent = plan_extent(arena, canvas.margin_units);
    debug!("canvas {}x{} px, data extent ±{:.2}", width, height, extent);

    // Flip the y range so positive y points up, as in the layout plane.
    let plot = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
        -extent..extent,
        extent..-extent,
        (0..width as i32, 0..height as i32),
    ));

    // points-to-pixels factor for marker radii, fonts and stroke widths
    let scale = dpi as f64 / 72.0;

    // Connectors first, beneath all node markers
    let stroke = (CONNECTOR_WIDTH_PT * scale).round().max(1.0) as u32;
    for (_, node) in arena.iter() {
        let Some(parent_idx) = node.parent else {
            continue;
        };
        if let Some(parent) = arena.get_node(parent_idx) {
            plot.draw(&PathElement::new(
                vec![parent.data.coords(), node.data.coords()],
                CONNECTOR.stroke_width(stroke),
            ))
            .map_err(|e| write_err(e.to_string()))?;
        }
    }

    for (_, node) in arena.iter() {
        draw_node(&plot, &node.data, scale).map_err(|e| write_err(e.to_string()))?;
    }

    root.present().map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

type PlotArea<DB> = DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_node<DB: DrawingBackend>(
    plot: &PlotArea<DB>,
    data: &NodeData,
    scale: f64,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x, y) = data.coords();

    if data.depth == 0 {
        plot.draw(&Circle::new(
            (x, y),
            (ROOT_MARKER_PT * scale).round() as i32,
            ROOT_FILL.filled(),
        ))?;
        let font = FontDesc::new(FontFamily::SansSerif, ROOT_FONT_PT * scale, FontStyle::Bold);
        let style = font
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Center));
        plot.draw(&Text::new(data.label(), (x, y), style))?;
        return Ok(());
    }

    let (color, marker_pt, font_pt, weight) = depth_style(data.depth);

    plot.draw(&Circle::new(
        (x, y),
        (marker_pt * scale).round() as i32,
        color.mix(0.95).filled(),
    ))?;

    // Labels sit outside the marker, pushed outward along the node's own
    // angle; the anchor flips with the circle half so text grows away from
    // the center.
    let offset = 0.3 + 0.08 * data.depth as f64;
    let text_x = x + offset * data.angle.cos();
    let text_y = y + offset * data.angle.sin();
    let anchor = if data.angle.cos() >= 0.0 {
        HPos::Left
    } else {
        HPos::Right
    };

    let font = FontDesc::new(FontFamily::SansSerif, font_pt * scale, weight);
    let style = font.color(&color).pos(Pos::new(anchor, VPos::Center));
    plot.draw(&Text::new(data.label(), (text_x, text_y), style))?;

    Ok(())
}
