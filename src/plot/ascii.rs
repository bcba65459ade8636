//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - fitted curve: `-` line
//! - observed knots: `o`
//! - scenario band edges (p05/p95): `.`

use crate::domain::CurveFile;
use crate::report::TenorSummary;

/// Render the fitted curve with knots and an optional scenario band.
///
/// `curve` is a sampled (tenor, yield) polyline; `knots` are the observed
/// points; `band` adds the p05/p95 edges at the scenario tenors.
pub fn render_ascii_plot(
    curve: &[(f64, f64)],
    knots: &[(f64, f64)],
    band: Option<&[TenorSummary]>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (t_min, t_max) = x_range(curve, knots).unwrap_or((0.0, 30.0));
    let (y_min, y_max) = y_range(curve, knots, band).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first so knots and band marks can overlay.
    for &(t, y) in curve {
        let x = map_x(t, t_min, t_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][x] = '-';
    }

    if let Some(band) = band {
        for s in band {
            for y in [s.p05, s.p95] {
                let x = map_x(s.tenor, t_min, t_max, width);
                let row = map_y(y, y_min, y_max, height);
                if grid[row][x] == ' ' {
                    grid[row][x] = '.';
                }
            }
        }
    }

    for &(t, y) in knots {
        let x = map_x(t, t_min, t_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: tenor=[{t_min:.2}, {t_max:.2}] years | yield=[{y_min:.4}, {y_max:.4}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render a plot from a saved curve JSON file (curve + knots, no band).
pub fn render_ascii_plot_from_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let line: Vec<(f64, f64)> = curve
        .grid
        .tenor_years
        .iter()
        .zip(curve.grid.y.iter())
        .map(|(&t, &y)| (t, y))
        .collect();
    let knots: Vec<(f64, f64)> = curve
        .knots
        .tenor_years
        .iter()
        .zip(curve.knots.y.iter())
        .map(|(&t, &y)| (t, y))
        .collect();

    render_ascii_plot(&line, &knots, None, width, height)
}

fn x_range(curve: &[(f64, f64)], knots: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;
    for &(t, _) in curve.iter().chain(knots.iter()) {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }
    if min_t.is_finite() && max_t.is_finite() && max_t > min_t {
        Some((min_t, max_t))
    } else {
        None
    }
}

fn y_range(
    curve: &[(f64, f64)],
    knots: &[(f64, f64)],
    band: Option<&[TenorSummary]>,
) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in curve.iter().chain(knots.iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if let Some(band) = band {
        for s in band {
            min_y = min_y.min(s.p05);
            max_y = max_y.max(s.p95);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).max(1e-12);
    (min - span * frac, max + span * frac)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    ((u * (width as f64 - 1.0)).round() as usize).min(width - 1)
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the plot.
    let from_bottom = (u * (height as f64 - 1.0)).round() as usize;
    height - 1 - from_bottom.min(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_is_deterministic_and_sized() {
        let curve: Vec<(f64, f64)> = (0..50).map(|i| (i as f64 * 0.2, 0.01 + i as f64 * 1e-4)).collect();
        let knots = vec![(1.0, 0.0105), (5.0, 0.0125)];

        let a = render_ascii_plot(&curve, &knots, None, 60, 15);
        let b = render_ascii_plot(&curve, &knots, None, 60, 15);
        assert_eq!(a, b);

        // Header + `height` rows.
        assert_eq!(a.lines().count(), 16);
        assert!(a.lines().skip(1).all(|l| l.chars().count() == 60));
    }

    #[test]
    fn knots_overlay_the_curve() {
        let curve = vec![(0.0, 0.01), (10.0, 0.03)];
        let knots = vec![(0.0, 0.01), (10.0, 0.03)];
        let plot = render_ascii_plot(&curve, &knots, None, 40, 10);
        assert!(plot.contains('o'));
    }

    #[test]
    fn band_edges_are_drawn_when_present() {
        let curve: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, 0.02)).collect();
        let band = vec![TenorSummary {
            tenor: 10.0,
            base: 0.02,
            mean: 0.02,
            std_dev: 0.005,
            p05: 0.012,
            p95: 0.028,
        }];
        let plot = render_ascii_plot(&curve, &[], Some(&band), 40, 12);
        assert!(plot.contains('.'));
    }
}
