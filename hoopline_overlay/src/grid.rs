// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hoopline_court::{CourtGeometry, Error, Orientation, Origin, extent};
use kurbo::{Point, Rect};

/// Uniform bins laid over a court extent.
///
/// Bin `(ix, iy)` covers `[x_edges[ix], x_edges[ix + 1])` by
/// `[y_edges[iy], y_edges[iy + 1])`. The last bin on each axis also includes
/// its upper edge, so every point of the extent lands in exactly one bin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourtGrid {
    extent: Rect,
    nx: usize,
    ny: usize,
}

impl CourtGrid {
    /// A grid of `nx` by `ny` bins over `extent`.
    pub fn new(extent: Rect, nx: usize, ny: usize) -> Result<Self, Error> {
        if nx == 0 || ny == 0 {
            return Err(Error::InvalidBinCount { nx, ny });
        }
        Ok(Self {
            extent: extent.abs(),
            nx,
            ny,
        })
    }

    /// A grid over the court as shown in a framing.
    ///
    /// Half-court framings cover only the shown half.
    pub fn for_court(
        geometry: &CourtGeometry,
        orientation: Orientation,
        origin: Origin,
        nx: usize,
        ny: usize,
    ) -> Result<Self, Error> {
        Self::new(extent(geometry, orientation, origin), nx, ny)
    }

    /// The covered region.
    #[must_use]
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Bin counts `(nx, ny)`.
    #[must_use]
    pub fn bins(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Always `false`; grids have at least one bin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `nx + 1` bin edges along x.
    #[must_use]
    pub fn x_edges(&self) -> Vec<f64> {
        edges(self.extent.x0, self.extent.x1, self.nx)
    }

    /// `ny + 1` bin edges along y.
    #[must_use]
    pub fn y_edges(&self) -> Vec<f64> {
        edges(self.extent.y0, self.extent.y1, self.ny)
    }

    /// Size of one bin.
    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.extent.width() / self.nx as f64,
            self.extent.height() / self.ny as f64,
        )
    }

    /// The rectangle covered by bin `(ix, iy)`.
    #[must_use]
    pub fn cell_rect(&self, ix: usize, iy: usize) -> Rect {
        let (dx, dy) = self.cell_size();
        let x0 = self.extent.x0 + dx * ix as f64;
        let y0 = self.extent.y0 + dy * iy as f64;
        Rect::new(x0, y0, x0 + dx, y0 + dy)
    }

    /// Flat index of bin `(ix, iy)`, x-major.
    #[must_use]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        ix * self.ny + iy
    }

    /// The bin containing `p`, or `None` outside the extent.
    #[must_use]
    pub fn bin_of(&self, p: Point) -> Option<(usize, usize)> {
        let ix = bin_1d(p.x, self.extent.x0, self.extent.x1, self.nx)?;
        let iy = bin_1d(p.y, self.extent.y0, self.extent.y1, self.ny)?;
        Some((ix, iy))
    }

    /// Counts points per bin.
    ///
    /// With `weights`, each point adds its weight instead of one. With
    /// `density`, values are divided by the total and by the bin area so
    /// they integrate to one over the extent. Points outside the extent are
    /// skipped.
    pub fn histogram(
        &self,
        points: &[Point],
        weights: Option<&[f64]>,
        density: bool,
    ) -> Result<Histogram, Error> {
        if let Some(w) = weights {
            Error::check_same_len("points", points.len(), "weights", w.len())?;
        }
        let mut values = vec![0.0; self.len()];
        let mut dropped = 0_usize;
        for (i, &p) in points.iter().enumerate() {
            let Some((ix, iy)) = self.bin_of(p) else {
                dropped += 1;
                continue;
            };
            values[self.index(ix, iy)] += weights.map_or(1.0, |w| w[i]);
        }
        if dropped > 0 {
            log::trace!("histogram: {dropped} of {} points outside the grid", points.len());
        }
        if density {
            let total: f64 = values.iter().sum();
            let (dx, dy) = self.cell_size();
            let norm = total * dx * dy;
            if norm != 0.0 {
                for v in &mut values {
                    *v /= norm;
                }
            }
        }
        Ok(Histogram { grid: *self, values })
    }
}

fn edges(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..=n)
        .map(|i| {
            if i == n {
                hi
            } else {
                lo + (hi - lo) * (i as f64 / n as f64)
            }
        })
        .collect()
}

fn bin_1d(v: f64, lo: f64, hi: f64, n: usize) -> Option<usize> {
    if !(lo..=hi).contains(&v) {
        return None;
    }
    let t = (v - lo) / (hi - lo) * n as f64;
    if !t.is_finite() {
        // Zero-width axis.
        return Some(0);
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "t is within [0, n]"
    )]
    let i = t.floor() as usize;
    Some(i.min(n - 1))
}

/// Per-bin values over a [`CourtGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// The bins.
    pub grid: CourtGrid,
    /// One value per bin, indexed by [`CourtGrid::index`].
    pub values: Vec<f64>,
}

impl Histogram {
    /// Value of bin `(ix, iy)`.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize) -> f64 {
        self.values[self.grid.index(ix, iy)]
    }

    /// Sum over all bins.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest bin value, or zero for an all-zero histogram.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
