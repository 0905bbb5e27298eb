// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hoopline_court::Error;
use peniko::Color;

/// A linear color ramp through evenly spaced stops.
///
/// ```
/// use hoopline_overlay::ColorRamp;
///
/// let ramp = ColorRamp::named("hotcold").unwrap();
/// assert_eq!(ramp.at(0.0).to_rgba8().b, 0x7b);
/// assert_eq!(ramp.at(1.0).to_rgba8().r, 0xff);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Color>,
}

const fn hex(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

// Stops run from low to high values.
const RAPTORS_RETRO: [u32; 6] = [0x000000, 0x743cc0, 0x9a2271, 0xba0c2f, 0xfe0032, 0xffffff];
const RAPTORS_BRAND: [u32; 6] = [0x000000, 0x743cc0, 0x932780, 0xba0c2f, 0x888b8d, 0xffffff];
const DOPPLER: [u32; 6] = [0x0656a0, 0x0085ff, 0x67cb5e, 0xfff500, 0xfd8230, 0xff0000];
const COMPLIMENTARY: [u32; 6] = [0x2e0343, 0x8816bd, 0xda7920, 0xe4cf12, 0xfff500, 0xfffee2];
const HOTCOLD: [u32; 5] = [0x00407b, 0x0085ff, 0x94386b, 0xff0000, 0xff8c8c];
const REDS: [u32; 9] = [
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];

impl ColorRamp {
    /// Names accepted by [`ColorRamp::named`].
    pub const NAMES: [&'static str; 6] = [
        "raptors_retro",
        "raptors_brand",
        "doppler",
        "complimentary",
        "hotcold",
        "reds",
    ];

    /// A ramp through `stops`. An empty ramp samples as transparent.
    #[must_use]
    pub fn new(stops: Vec<Color>) -> Self {
        Self { stops }
    }

    /// A ramp through `0xRRGGBB` stops.
    #[must_use]
    pub fn from_hex(stops: &[u32]) -> Self {
        Self::new(stops.iter().map(|&rgb| hex(rgb)).collect())
    }

    /// Looks up a built-in ramp. Names are case-insensitive and may use `-`
    /// in place of `_`.
    pub fn named(name: &str) -> Result<Self, Error> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        let stops: &[u32] = match key.as_str() {
            "raptors_retro" => &RAPTORS_RETRO,
            "raptors_brand" => &RAPTORS_BRAND,
            "doppler" => &DOPPLER,
            "complimentary" => &COMPLIMENTARY,
            "hotcold" => &HOTCOLD,
            "reds" => &REDS,
            _ => return Err(Error::UnknownColorRamp(name.into())),
        };
        Ok(Self::from_hex(stops))
    }

    /// The stops, low to high.
    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The same ramp running high to low.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.stops.reverse();
        self
    }

    /// Samples the ramp at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> Color {
        let Some(last) = self.stops.len().checked_sub(1) else {
            return Color::TRANSPARENT;
        };
        if last == 0 {
            return self.stops[0];
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * last as f64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "pos is within [0, last]"
        )]
        let i = (pos.floor() as usize).min(last - 1);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "interpolation weight in [0, 1]"
        )]
        let frac = (pos - i as f64) as f32;
        let a = self.stops[i].components;
        let b = self.stops[i + 1].components;
        Color::new(core::array::from_fn(|k| a[k] + (b[k] - a[k]) * frac))
    }

    /// `n` colors spread evenly from the low to the high end.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => (0..n)
                .map(|i| self.at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

impl Default for ColorRamp {
    /// White to dark red.
    fn default() -> Self {
        Self::from_hex(&REDS)
    }
}
