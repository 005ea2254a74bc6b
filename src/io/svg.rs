//! SVG export of the proportional-area diagram.
//!
//! Same geometry as the terminal widget (`layout::patches`), drawn with the
//! Plotters SVG backend at a resolution suitable for documents.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{BayesResult, DiagramLayout};
use crate::error::AppError;
use crate::layout::patches;
use crate::report::format_title;

/// Output image size (pixels, square).
pub const SVG_SIZE: u32 = 800;

/// Padding around the canvas, in canvas units.
const PADDING: f64 = 5.0;

/// Minimum blank border around the plot, in pixels.
const MARGIN: u32 = 20;

/// Write the diagram for `result` to an SVG file.
pub fn write_diagram_svg(path: &Path, result: &BayesResult, layout: &DiagramLayout) -> Result<(), AppError> {
    let root = SVGBackend::new(path, (SVG_SIZE, SVG_SIZE)).into_drawing_area();
    draw_diagram(&root, result, layout)
        .map_err(|e| AppError::new(4, format!("Failed to render SVG diagram: {e}")))?;
    root.present()
        .map_err(|e| AppError::new(4, format!("Failed to write SVG '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), posterior = result.posterior, "wrote diagram SVG");
    Ok(())
}

fn draw_diagram(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    result: &BayesResult,
    layout: &DiagramLayout,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    root.fill(&WHITE)?;

    let w = layout.canvas_width as f64;
    let h = layout.canvas_height as f64;

    // One canvas unit must be as wide as it is tall, or areas stop being proportional.
    let body = root.titled(&format_title(result), ("sans-serif", 28))?;
    let (top, bottom, left, right) =
        equal_aspect_margins(body.dim_in_pixel(), (w + 2.0 * PADDING, h + 2.0 * PADDING), MARGIN);
    let plot = body.margin(top, bottom, left, right);

    let mut chart = ChartBuilder::on(&plot).build_cartesian_2d(-PADDING..w + PADDING, -PADDING..h + PADDING)?;

    for patch in patches(layout) {
        let (r, g, b) = patch.kind.color();
        let color = RGBColor(r, g, b);
        let corners = [
            (patch.x as f64, patch.y as f64),
            ((patch.x + patch.width) as f64, (patch.y + patch.height) as f64),
        ];

        chart
            .draw_series(std::iter::once(Rectangle::new(corners, color.filled())))?
            .label(patch.kind.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
        chart.draw_series(std::iter::once(Rectangle::new(corners, BLACK.stroke_width(3))))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.7))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .draw()?;

    Ok(())
}

/// Margins `(top, bottom, left, right)` that shrink `area` to the largest
/// centered box with the aspect ratio of `span`, leaving at least `min_margin`.
fn equal_aspect_margins(area: (u32, u32), span: (f64, f64), min_margin: u32) -> (i32, i32, i32, i32) {
    let avail_w = area.0.saturating_sub(2 * min_margin) as f64;
    let avail_h = area.1.saturating_sub(2 * min_margin) as f64;
    let scale = (avail_w / span.0).min(avail_h / span.1);

    let plot_w = ((span.0 * scale).round() as u32).min(area.0);
    let plot_h = ((span.1 * scale).round() as u32).min(area.1);

    let spare_w = area.0 - plot_w;
    let spare_h = area.1 - plot_h;
    let left = spare_w / 2;
    let top = spare_h / 2;
    (top as i32, (spare_h - top) as i32, left as i32, (spare_w - left) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute;
    use crate::layout::layout;

    #[test]
    fn writes_svg_with_rectangles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.svg");
        let r = compute(0.1, 0.9, 0.2).unwrap();
        let l = layout(&r, 600, 600);

        write_diagram_svg(&path, &r, &l).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<rect"));
    }

    fn plot_size(area: (u32, u32), m: (i32, i32, i32, i32)) -> (f64, f64) {
        let (top, bottom, left, right) = m;
        ((area.0 as i32 - left - right) as f64, (area.1 as i32 - top - bottom) as f64)
    }

    #[test]
    fn square_canvas_gets_square_plot() {
        let area = (800, 740);
        let m = equal_aspect_margins(area, (610.0, 610.0), 20);
        assert_eq!(m, (20, 20, 50, 50));
        assert_eq!(plot_size(area, m), (700.0, 700.0));
    }

    #[test]
    fn wide_and_tall_canvases_keep_their_ratio() {
        let area = (800, 740);
        for span in [(1210.0, 610.0), (310.0, 910.0), (605.0, 105.0)] {
            let m = equal_aspect_margins(area, span, 20);
            let (pw, ph) = plot_size(area, m);
            assert!((pw / ph - span.0 / span.1).abs() < 0.02, "{span:?}: {pw}x{ph}");
            assert!(m.0 >= 20 && m.1 >= 20 && m.2 >= 20 && m.3 >= 20, "{span:?}: {m:?}");
        }
    }

    #[test]
    fn writes_svg_for_non_square_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.svg");
        let r = compute(0.5, 0.5, 0.5).unwrap();
        let l = layout(&r, 1200, 300);

        write_diagram_svg(&path, &r, &l).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<rect"));
    }
}
