use crate::domain::{BayesResult, DiagramLayout, DiagramPatch, PatchKind};

/// Compute the diagram geometry for a canvas of `canvas_width × canvas_height`.
///
/// The H column is `round(P(H) · width)` wide, the ¬H column takes the rest.
/// Fill heights are `round(P(e | ·) · height)`, clamped to the canvas.
/// Rounding is half-to-even.
pub fn layout(result: &BayesResult, canvas_width: u32, canvas_height: u32) -> DiagramLayout {
    let input = &result.input;
    DiagramLayout {
        canvas_width,
        canvas_height,
        column_h_split: scale(input.prior(), canvas_width),
        fill_height_h: scale(input.likelihood_given_h(), canvas_height),
        fill_height_not_h: scale(input.likelihood_given_not_h(), canvas_height),
    }
}

fn scale(p: f64, extent: u32) -> u32 {
    let v = (p * extent as f64).round_ties_even();
    if v <= 0.0 {
        0
    } else {
        (v as u32).min(extent)
    }
}

/// The four rectangles of the diagram in draw order: the two base columns,
/// then the two evidence fills on top of them.
pub fn patches(layout: &DiagramLayout) -> [DiagramPatch; 4] {
    let split = layout.column_h_split;
    let rest = layout.column_not_h_width();
    [
        DiagramPatch {
            kind: PatchKind::Hypothesis,
            x: 0,
            y: 0,
            width: split,
            height: layout.canvas_height,
        },
        DiagramPatch {
            kind: PatchKind::NotHypothesis,
            x: split,
            y: 0,
            width: rest,
            height: layout.canvas_height,
        },
        DiagramPatch {
            kind: PatchKind::EvidenceGivenH,
            x: 0,
            y: 0,
            width: split,
            height: layout.fill_height_h,
        },
        DiagramPatch {
            kind: PatchKind::EvidenceGivenNotH,
            x: split,
            y: 0,
            width: rest,
            height: layout.fill_height_not_h,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute;

    #[test]
    fn default_inputs_on_600_canvas() {
        let r = compute(0.1, 0.9, 0.2).unwrap();
        let l = layout(&r, 600, 600);
        assert_eq!(l.column_h_split, 60);
        assert_eq!(l.column_not_h_width(), 540);
        assert_eq!(l.fill_height_h, 540);
        assert_eq!(l.fill_height_not_h, 120);
    }

    #[test]
    fn rounding_is_half_to_even() {
        let r = compute(0.5, 0.5, 0.5).unwrap();
        assert_eq!(layout(&r, 5, 5).column_h_split, 2);
        assert_eq!(layout(&r, 7, 7).column_h_split, 4);
    }

    #[test]
    fn extremes_fill_or_empty_columns() {
        let r = compute(1.0, 1.0, 0.0).unwrap();
        let l = layout(&r, 600, 400);
        assert_eq!(l.column_h_split, 600);
        assert_eq!(l.column_not_h_width(), 0);
        assert_eq!(l.fill_height_h, 400);
        assert_eq!(l.fill_height_not_h, 0);

        let r = compute(0.0, 0.0, 1.0).unwrap();
        let l = layout(&r, 600, 400);
        assert_eq!(l.column_h_split, 0);
        assert_eq!(l.column_not_h_width(), 600);
        assert_eq!(l.fill_height_not_h, 400);
    }

    #[test]
    fn columns_always_cover_the_canvas() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let r = compute(p, 0.5, 0.5).unwrap();
            for width in [1, 3, 10, 599, 600, 1024] {
                let l = layout(&r, width, 100);
                assert!(l.column_h_split <= width);
                assert_eq!(l.column_h_split + l.column_not_h_width(), width);
            }
        }
    }

    #[test]
    fn patches_follow_layout() {
        let r = compute(0.1, 0.9, 0.2).unwrap();
        let l = layout(&r, 600, 600);
        let p = patches(&l);

        assert_eq!(p[0].kind, PatchKind::Hypothesis);
        assert_eq!((p[0].x, p[0].width, p[0].height), (0, 60, 600));
        assert_eq!(p[1].kind, PatchKind::NotHypothesis);
        assert_eq!((p[1].x, p[1].width, p[1].height), (60, 540, 600));
        assert_eq!(p[2].kind, PatchKind::EvidenceGivenH);
        assert_eq!((p[2].x, p[2].width, p[2].height), (0, 60, 540));
        assert_eq!(p[3].kind, PatchKind::EvidenceGivenNotH);
        assert_eq!((p[3].x, p[3].width, p[3].height), (60, 540, 120));
        assert!(p.iter().all(|patch| patch.y == 0));
    }
}
