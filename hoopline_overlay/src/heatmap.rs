// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hoopline_court::{CourtGeometry, Error, Orientation, Origin};
use hoopline_render::{Canvas, Element, Primitive, Shape, Style};
use kurbo::Point;

use crate::grid::{CourtGrid, Histogram};
use crate::ramp::ColorRamp;

/// Kernel radius in standard deviations.
pub const TRUNCATE_SIGMAS: f64 = 4.0;

/// Settings for [`build_heatmap`].
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapOptions {
    /// Bins along the framing's x axis.
    pub nx: usize,
    /// Bins along the framing's y axis.
    pub ny: usize,
    /// Whether to smooth the counts.
    pub smooth: bool,
    /// Smoothing bandwidth, in bins.
    pub sigma: f64,
    /// Colors from empty (low end) to busiest (high end).
    pub ramp: ColorRamp,
    /// Opacity multiplier for every cell.
    pub alpha: f32,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            nx: 50,
            ny: 50,
            smooth: true,
            sigma: 1.0,
            ramp: ColorRamp::default(),
            alpha: 1.0,
        }
    }
}

impl HeatmapOptions {
    /// Sets the bin counts.
    #[must_use]
    pub fn with_bins(mut self, nx: usize, ny: usize) -> Self {
        self.nx = nx;
        self.ny = ny;
        self
    }

    /// Turns smoothing on or off.
    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the smoothing bandwidth in bins.
    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the color ramp.
    #[must_use]
    pub fn with_ramp(mut self, ramp: ColorRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Sets the cell opacity.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidStyleValue {
                name: "alpha",
                value: f64::from(self.alpha),
            });
        }
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(Error::InvalidStyleValue {
                name: "sigma",
                value: self.sigma,
            });
        }
        Ok(())
    }
}

/// Binned and optionally smoothed point density over a court.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    /// Cell values.
    pub histogram: Histogram,
    /// One filled rectangle per cell, colored relative to the busiest cell.
    pub primitives: Vec<Primitive>,
}

impl Heatmap {
    /// Draws the cells on `canvas`.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_all(&self.primitives);
    }
}

/// Bins display-frame `points` over the court as shown in a framing and
/// colors each cell.
///
/// Points must already be in the display frame of `orientation` and
/// `origin`; points outside the shown extent are ignored.
pub fn build_heatmap(
    points: &[Point],
    geometry: &CourtGeometry,
    orientation: Orientation,
    origin: Origin,
    options: &HeatmapOptions,
) -> Result<Heatmap, Error> {
    options.validate()?;
    let grid = CourtGrid::for_court(geometry, orientation, origin, options.nx, options.ny)?;
    let mut histogram = grid.histogram(points, None, false)?;
    if options.smooth && options.sigma > 0.0 {
        histogram = smooth(&histogram, options.sigma);
    }

    let max = histogram.max();
    let (nx, ny) = grid.bins();
    let mut primitives = Vec::with_capacity(grid.len());
    for ix in 0..nx {
        for iy in 0..ny {
            let t = if max > 0.0 {
                histogram.get(ix, iy) / max
            } else {
                0.0
            };
            let color = options.ramp.at(t).multiply_alpha(options.alpha);
            primitives.push(Primitive::new(
                Shape::Rect(grid.cell_rect(ix, iy)),
                Style::filled(color),
                Element::Overlay,
            ));
        }
    }
    log::debug!(
        "heatmap: {} points into {nx}x{ny} bins ({orientation}), peak {max}",
        points.len()
    );
    Ok(Heatmap {
        histogram,
        primitives,
    })
}

/// Gaussian-smooths histogram values with a kernel truncated at
/// [`TRUNCATE_SIGMAS`] and mirrored borders.
///
/// `sigma` is in bins. The total over the grid is preserved. A `sigma`
/// that is zero, negative or not finite leaves the values unchanged, and the
/// kernel never reaches further than the longest grid axis.
#[must_use]
pub fn smooth(histogram: &Histogram, sigma: f64) -> Histogram {
    if !(sigma.is_finite() && sigma > 0.0) {
        return histogram.clone();
    }
    let (nx, ny) = histogram.grid.bins();
    let kernel = gaussian_kernel(sigma, nx.max(ny));
    let grid = histogram.grid;

    // Along x for every row of constant iy, then along y.
    let mut pass = vec![0.0; histogram.values.len()];
    let mut line = vec![0.0; nx.max(ny)];
    for iy in 0..ny {
        for (ix, slot) in line[..nx].iter_mut().enumerate() {
            *slot = histogram.values[grid.index(ix, iy)];
        }
        for ix in 0..nx {
            pass[grid.index(ix, iy)] = convolve_at(&line[..nx], ix, &kernel);
        }
    }
    let mut values = vec![0.0; histogram.values.len()];
    for ix in 0..nx {
        line[..ny].copy_from_slice(&pass[grid.index(ix, 0)..grid.index(ix, 0) + ny]);
        for iy in 0..ny {
            values[grid.index(ix, iy)] = convolve_at(&line[..ny], iy, &kernel);
        }
    }
    Histogram { grid, values }
}

/// Normalized weights for offsets `-r..=r`, with `r` at most `max_radius`.
fn gaussian_kernel(sigma: f64, max_radius: usize) -> Vec<f64> {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to a non-negative bin count first"
    )]
    let radius = (TRUNCATE_SIGMAS * sigma + 0.5).clamp(0.0, max_radius as f64) as usize;
    let r = radius as f64;
    let mut weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - r;
            (-0.5 * (x / sigma).powi(2)).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn convolve_at(line: &[f64], i: usize, kernel: &[f64]) -> f64 {
    let n = line.len();
    let radius = kernel.len() / 2;
    kernel
        .iter()
        .enumerate()
        .map(|(k, w)| {
            let j = i as isize + k as isize - radius as isize;
            w * line[reflect(j, n)]
        })
        .sum()
}

/// Maps an out-of-range index back into `0..n` by mirroring about the
/// edges, repeating the edge sample (`d c b a | a b c d | d c b a`).
fn reflect(j: isize, n: usize) -> usize {
    let n = n as isize;
    let m = j.rem_euclid(2 * n);
    let k = if m < n { m } else { 2 * n - 1 - m };
    k.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use hoopline_court::{CourtGeometry, Error, Orientation, Origin};
    use hoopline_render::{Element, RecordingCanvas, Shape};
    use kurbo::{Point, Rect};

    use super::{HeatmapOptions, build_heatmap, gaussian_kernel, reflect, smooth};
    use crate::grid::CourtGrid;

    #[test]
    fn reflect_repeats_edges() {
        let mapped: Vec<usize> = (-3..7).map(|j| reflect(j, 4)).collect();
        assert_eq!(mapped, vec![2, 1, 0, 0, 1, 2, 3, 3, 2, 1]);
        assert_eq!(reflect(5, 1), 0);
    }

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel(1.0, 50);
        assert_eq!(k.len(), 9);
        assert!((k.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((k[0] - k[8]).abs() < 1e-15);
        assert!(k[4] > k[3]);
    }

    #[test]
    fn kernel_stops_at_the_grid() {
        assert_eq!(gaussian_kernel(1.0, 2).len(), 5);
        let wide = gaussian_kernel(1e20, 4);
        assert_eq!(wide.len(), 9);
        assert!(wide.iter().all(|w| (w - 1.0 / 9.0).abs() < 1e-12));
    }

    #[test]
    fn zero_sigma_leaves_counts_alone() {
        let grid = CourtGrid::new(Rect::new(0.0, 0.0, 4.0, 4.0), 4, 4).unwrap();
        let h = grid.histogram(&[Point::new(1.5, 1.5)], None, false).unwrap();
        assert_eq!(smooth(&h, 0.0), h);
        assert_eq!(smooth(&h, -2.0), h);
        assert_eq!(smooth(&h, f64::NAN), h);
        assert_eq!(smooth(&h, f64::INFINITY), h);
    }

    #[test]
    fn huge_sigma_spreads_evenly() {
        let g = CourtGeometry::default();
        let options = HeatmapOptions::default().with_bins(4, 4).with_sigma(1e20);
        let heatmap =
            build_heatmap(&[Point::ZERO], &g, Orientation::H, Origin::Center, &options).unwrap();
        let values = &heatmap.histogram.values;
        assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!((heatmap.histogram.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn spike_spreads_into_neighbors() {
        let grid = CourtGrid::new(Rect::new(0.0, 0.0, 21.0, 21.0), 21, 21).unwrap();
        let h = grid.histogram(&[Point::new(10.5, 10.5)], None, false).unwrap();
        let s = smooth(&h, 1.5);
        assert!(s.get(10, 10) < 1.0);
        assert!(s.get(11, 10) > 0.0);
        assert!((s.get(11, 10) - s.get(9, 10)).abs() < 1e-12);
        assert!((s.get(10, 12) - s.get(12, 10)).abs() < 1e-12);
    }

    #[test]
    fn one_cell_per_bin() {
        let g = CourtGeometry::default();
        let options = HeatmapOptions::default().with_bins(10, 5);
        let points = [Point::new(-40.0, 0.0), Point::new(-40.0, 1.0)];
        let heatmap = build_heatmap(&points, &g, Orientation::H, Origin::Center, &options).unwrap();
        assert_eq!(heatmap.primitives.len(), 50);
        assert!(heatmap.primitives.iter().all(|p| p.element == Element::Overlay));
        assert!(
            heatmap
                .primitives
                .iter()
                .all(|p| matches!(p.shape, Shape::Rect(_)) && p.style.stroke.is_none())
        );

        let mut canvas = RecordingCanvas::default();
        heatmap.draw(&mut canvas);
        assert_eq!(canvas.primitives().count(), 50);
    }

    #[test]
    fn unsmoothed_peak_gets_top_color() {
        let g = CourtGeometry::default();
        let options = HeatmapOptions::default()
            .with_bins(2, 1)
            .with_smooth(false);
        let points = [Point::new(10.0, 0.0)];
        let heatmap = build_heatmap(&points, &g, Orientation::H, Origin::Center, &options).unwrap();
        assert_eq!(heatmap.histogram.values, vec![0.0, 1.0]);
        let fill = |i: usize| heatmap.primitives[i].style.fill.unwrap();
        assert_eq!(fill(0), options.ramp.at(0.0));
        assert_eq!(fill(1), options.ramp.at(1.0));
    }

    #[test]
    fn bad_options_are_rejected() {
        let g = CourtGeometry::default();
        let run = |o: HeatmapOptions| build_heatmap(&[], &g, Orientation::H, Origin::Center, &o);
        assert!(matches!(
            run(HeatmapOptions::default().with_bins(0, 3)),
            Err(Error::InvalidBinCount { nx: 0, ny: 3 })
        ));
        assert!(matches!(
            run(HeatmapOptions::default().with_alpha(2.0)),
            Err(Error::InvalidStyleValue { name: "alpha", .. })
        ));
        assert!(matches!(
            run(HeatmapOptions::default().with_sigma(-1.0)),
            Err(Error::InvalidStyleValue { name: "sigma", .. })
        ));
    }
}
