//! Plotters-powered proportional-area diagram widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`,
//! so the terminal diagram and the SVG export share one drawing model
//! (canvas coordinates, bottom-left origin).

use plotters::prelude::*;
// ratatui's `Color` below shadows the prelude's trait; keep its methods in scope.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::{DiagramLayout, DiagramPatch};

/// Padding around the canvas, in canvas units.
const PADDING: f64 = 5.0;

/// A lightweight, render-only diagram description.
///
/// All geometry is computed outside the render call (`layout::patches`).
pub struct BayesPlottersChart<'a> {
    /// Patches in draw order (columns first, evidence fills on top).
    pub patches: &'a [DiagramPatch],
    /// Canvas the patches were laid out on.
    pub layout: &'a DiagramLayout,
}

impl<'a> Widget for BayesPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Diagram area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let w = self.layout.canvas_width as f64;
        let h = self.layout.canvas_height as f64;
        if !(w > 0.0 && h > 0.0) {
            return;
        }

        let patches = self.patches;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(-PADDING..w + PADDING, -PADDING..h + PADDING)?;

            for patch in patches {
                let (r, g, b) = patch.kind.color();
                let corners = [
                    (patch.x as f64, patch.y as f64),
                    ((patch.x + patch.width) as f64, (patch.y + patch.height) as f64),
                ];
                chart.draw_series(std::iter::once(Rectangle::new(corners, RGBColor(r, g, b).filled())))?;
            }

            // Outlines last so every boundary stays visible over the fills.
            for patch in patches {
                let corners = [
                    (patch.x as f64, patch.y as f64),
                    ((patch.x + patch.width) as f64, (patch.y + patch.height) as f64),
                ];
                chart.draw_series(std::iter::once(Rectangle::new(corners, WHITE.stroke_width(1))))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
