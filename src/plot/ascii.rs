//! ASCII/Unicode diagram for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal or a pipe
//! - deterministic output (helpful for golden tests)
//!
//! Each character cell is one unit of the layout canvas:
//! - `#`: P(e ∩ H)
//! - `h`: H without evidence
//! - `+`: P(e ∩ ¬H)
//! - `.`: ¬H without evidence

use crate::domain::BayesResult;
use crate::layout::layout;
use crate::report::format_title;

/// Render the proportional-area diagram as a `width × height` character grid.
pub fn render_ascii_diagram(result: &BayesResult, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let geometry = layout(result, width as u32, height as u32);

    let split = geometry.column_h_split as usize;
    let fill_h = geometry.fill_height_h as usize;
    let fill_not_h = geometry.fill_height_not_h as usize;

    let mut out = String::new();
    out.push_str(&format!(
        "Diagram: {} | H column={split}/{width} | fill H={fill_h}/{height} | fill ¬H={fill_not_h}/{height}\n",
        format_title(result),
    ));

    // Row 0 is the top of the canvas; fills grow from the bottom.
    for row in 0..height {
        let from_bottom = height - 1 - row;
        let line: String = (0..width)
            .map(|x| {
                if x < split {
                    if from_bottom < fill_h { '#' } else { 'h' }
                } else if from_bottom < fill_not_h {
                    '+'
                } else {
                    '.'
                }
            })
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("Legend: # P(e ∩ H)  h P(H) without e  + P(e ∩ ¬H)  . P(¬H) without e\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute;

    #[test]
    fn diagram_golden_snapshot_small() {
        let r = compute(0.1, 0.9, 0.2).unwrap();
        let txt = render_ascii_diagram(&r, 20, 10);

        let mut expected = String::from(
            "Diagram: P(H|e) = 0.333 | H column=2/20 | fill H=9/10 | fill ¬H=2/10\n",
        );
        expected.push_str(&format!("hh{}\n", ".".repeat(18)));
        for _ in 0..7 {
            expected.push_str(&format!("##{}\n", ".".repeat(18)));
        }
        for _ in 0..2 {
            expected.push_str(&format!("##{}\n", "+".repeat(18)));
        }
        expected.push_str("Legend: # P(e ∩ H)  h P(H) without e  + P(e ∩ ¬H)  . P(¬H) without e\n");

        assert_eq!(txt, expected);
    }

    #[test]
    fn diagram_enforces_minimum_size() {
        let r = compute(0.5, 1.0, 0.0).unwrap();
        let txt = render_ascii_diagram(&r, 2, 1);
        let lines: Vec<&str> = txt.lines().collect();
        // header + 5 rows + legend
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "#####.....");
        assert_eq!(lines[5], "#####.....");
    }
}
