//! Static braille rendering of a [`Report`]: the ellipse diagram above the distance curve.

mod braille;

pub use braille::BrailleCanvas;

use crate::config::PreviewConfig;
use crate::geometry::Point2D;
use crate::report::Report;

/// World-space rectangle mapped onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Grow the smaller extent around its center so one world unit covers the same
    /// number of dots on both axes. Braille dots are close to square.
    pub fn fit_equal(self, grid_w: usize, grid_h: usize) -> Self {
        let w = self.x_max - self.x_min;
        let h = self.y_max - self.y_min;
        let scale = (w / grid_w as f64).max(h / grid_h as f64);
        let (cx, cy) = (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        );
        let (hw, hh) = (scale * grid_w as f64 / 2.0, scale * grid_h as f64 / 2.0);
        Self::new(cx - hw, cx + hw, cy - hh, cy + hh)
    }

    /// Dot coordinates of a world point; y grows downward on the canvas.
    fn to_grid(&self, p: Point2D, canvas: &BrailleCanvas) -> (isize, isize) {
        let fx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let fy = (self.y_max - p.y) / (self.y_max - self.y_min);
        (
            (fx * (canvas.grid_w - 1) as f64).round() as isize,
            (fy * (canvas.grid_h - 1) as f64).round() as isize,
        )
    }

    /// Liang-Barsky clip of a segment to the viewport.
    pub fn clip(&self, p0: Point2D, p1: Point2D) -> Option<(Point2D, Point2D)> {
        if !(p0.x.is_finite() && p0.y.is_finite() && p1.x.is_finite() && p1.y.is_finite()) {
            return None;
        }
        let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-dx, p0.x - self.x_min),
            (dx, self.x_max - p0.x),
            (-dy, p0.y - self.y_min),
            (dy, self.y_max - p0.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((
            Point2D::new(p0.x + t0 * dx, p0.y + t0 * dy),
            Point2D::new(p0.x + t1 * dx, p0.y + t1 * dy),
        ))
    }
}

/// A braille canvas paired with the world rectangle it shows.
pub struct Panel {
    canvas: BrailleCanvas,
    view: Viewport,
}

impl Panel {
    pub fn new(char_w: usize, char_h: usize, view: Viewport) -> Self {
        Self {
            canvas: BrailleCanvas::new(char_w, char_h),
            view,
        }
    }

    pub fn segment(&mut self, p0: Point2D, p1: Point2D) {
        if let Some((a, b)) = self.view.clip(p0, p1) {
            let (x0, y0) = self.view.to_grid(a, &self.canvas);
            let (x1, y1) = self.view.to_grid(b, &self.canvas);
            self.canvas.line(x0, y0, x1, y1);
        }
    }

    /// Connect consecutive points; `None` breaks the line.
    pub fn polyline<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Option<Point2D>>,
    {
        let mut last: Option<Point2D> = None;
        for p in points {
            if let (Some(a), Some(b)) = (last, p) {
                self.segment(a, b);
            }
            last = p;
        }
    }

    /// Polyline that also joins the last point back to the first.
    pub fn closed(&mut self, points: &[Point2D]) {
        self.polyline(points.iter().copied().map(Some));
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            self.segment(last, first);
        }
    }

    /// Small plus-shaped marker centered on `p`.
    pub fn marker(&mut self, p: Point2D) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return;
        }
        let (gx, gy) = self.view.to_grid(p, &self.canvas);
        for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
            self.canvas.set(gx + dx, gy + dy);
        }
    }

    pub fn rows(&self) -> Vec<String> {
        self.canvas.rows()
    }
}

/// Outer, inner and (optionally) unrotated inner outline with the highlighted ray.
pub fn ellipse_panel(report: &Report, size: &PreviewConfig) -> Panel {
    let (a, b) = (report.config.outer.a, report.config.outer.b);
    let view = Viewport::new(-(a + 1.0), a + 1.0, -(b + 1.0), b + 1.0)
        .fit_equal(size.width * 2, size.height * 4);
    let mut panel = Panel::new(size.width, size.height, view);

    panel.closed(&report.outer_boundary);
    panel.closed(&report.inner_boundary);
    if !report.unrotated_inner.is_empty() {
        panel.polyline(report.unrotated_inner.iter().copied().map(Some));
    }
    panel.polyline(report.line.iter().copied().map(Some));
    if let Ok(c) = &report.crossings {
        panel.marker(c.outer);
        panel.marker(c.inner);
    }
    panel
}

/// Signed distance against sweep angle, with the zero axis.
pub fn distance_panel(report: &Report, size: &PreviewConfig) -> Panel {
    let (lo, hi) = match (report.sweep.min(), report.sweep.max()) {
        (Some((_, lo)), Some((_, hi))) => (lo.min(0.0), hi.max(0.0)),
        _ => (-1.0, 1.0),
    };
    let pad = ((hi - lo) * 0.05).max(1e-9);
    let view = Viewport::new(0.0, 360.0, lo - pad, hi + pad);
    let mut panel = Panel::new(size.width, size.height, view);

    panel.segment(Point2D::new(0.0, 0.0), Point2D::new(360.0, 0.0));
    panel.polyline(
        report
            .sweep
            .samples
            .iter()
            .map(|s| s.value().map(|d| Point2D::new(s.angle, d))),
    );
    panel
}

/// Both panels as text, each under a title line.
pub fn render(report: &Report) -> String {
    let size = &report.config.preview;
    let mut out = String::new();

    out.push_str("Concentric Ellipses\n");
    for row in ellipse_panel(report, size).rows() {
        out.push_str(&row);
        out.push('\n');
    }

    out.push_str("Distance between Ellipses (0°..360°)\n");
    let distance = distance_panel(report, size);
    for row in distance.rows() {
        out.push_str(&row);
        out.push('\n');
    }
    if let (Some((_, lo)), Some((_, hi))) = (report.sweep.min(), report.sweep.max()) {
        out.push_str(&format!("range: {:.4} .. {:.4}\n", lo, hi));
    }
    out
}
