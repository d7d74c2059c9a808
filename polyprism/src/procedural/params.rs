//! Parameter normalization
//!
//! Turns raw, possibly short or out-of-range inputs into a consistent
//! `PolygonSpec`. Nothing here fails: missing entries are padded and
//! out-of-range values are clamped.

use std::f32::consts::PI;

use tracing::debug;

use super::layout::VertexLayout;

/// Minimum raw corner count
pub const MIN_CORNERS: u32 = 3;

/// Minimum samples per edge
pub const MIN_SAMPLING: u32 = 1;

/// Normalized generation parameters for a poly-prism
///
/// Fields are only reachable through the normalizing mutators, so every
/// per-corner array always holds exactly `effective_corner_count()` entries
/// and `cut_off` always lies between zero and the smallest corner height.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonSpec {
    corner_count: u32,
    sampling: u32,
    floret_factor: f32,
    base_sizes: Vec<f32>,
    top_sizes: Vec<f32>,
    summit_angles: Vec<f32>,
    poly_heights: Vec<f32>,
    slope: f32,
    curving: bool,
    cut_off: f32,
    band_thresholds: Vec<f32>,
    band_blend_factor: f32,
}

impl Default for PolygonSpec {
    /// Unit triangle prism with a flat cap and no material bands
    fn default() -> Self {
        let mut spec = Self::empty();
        spec.configure(
            MIN_CORNERS,
            MIN_SAMPLING,
            0.0,
            &[1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0],
            &[2.0 * PI / 3.0, 4.0 * PI / 3.0, 2.0 * PI],
        );
        spec.set_heights(&[1.0, 1.0, 1.0], 0.0, false, 0.0);
        spec.set_bands(&[], 0.0);
        spec
    }
}

impl PolygonSpec {
    /// Build a spec from every raw parameter in one go
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        corner_count: u32,
        sampling: u32,
        floret_factor: f32,
        base_sizes: &[f32],
        top_sizes: &[f32],
        summit_angles: &[f32],
        poly_heights: &[f32],
        slope: f32,
        curving: bool,
        cut_off: f32,
        band_thresholds: &[f32],
        band_blend_factor: f32,
    ) -> Self {
        let mut spec = Self::empty();
        spec.configure(
            corner_count,
            sampling,
            floret_factor,
            base_sizes,
            top_sizes,
            summit_angles,
        );
        spec.set_heights(poly_heights, slope, curving, cut_off);
        spec.set_bands(band_thresholds, band_blend_factor);
        spec
    }

    fn empty() -> Self {
        Self {
            corner_count: MIN_CORNERS,
            sampling: MIN_SAMPLING,
            floret_factor: 0.0,
            base_sizes: Vec::new(),
            top_sizes: Vec::new(),
            summit_angles: Vec::new(),
            poly_heights: Vec::new(),
            slope: 0.0,
            curving: false,
            cut_off: 0.0,
            band_thresholds: Vec::new(),
            band_blend_factor: 0.0,
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Set the polygon profile
    ///
    /// Angles are in radians. Changing the corner count or floret mode
    /// re-pads the stored heights to the new corner count as well.
    pub fn configure(
        &mut self,
        corner_count: u32,
        sampling: u32,
        floret_factor: f32,
        base_sizes: &[f32],
        top_sizes: &[f32],
        summit_angles: &[f32],
    ) {
        self.corner_count = clamp_corner_count(corner_count);
        self.sampling = clamp_sampling(sampling);
        self.floret_factor = clamp_or(floret_factor, 0.0, 1.0, 0.0);
        self.repad();

        let len = self.effective_corner_count();
        self.base_sizes = resize_sizes(base_sizes, len);
        self.top_sizes = resize_sizes(top_sizes, len);
        self.summit_angles = resize_clamped(summit_angles, len, 0.0, f32::MIN, f32::MAX);
    }

    /// Set the corner heights and the cap/wall shaping parameters
    pub fn set_heights(&mut self, poly_heights: &[f32], slope: f32, curving: bool, cut_off: f32) {
        self.poly_heights = resize_sizes(poly_heights, self.effective_corner_count());
        self.slope = clamp_or(slope, -1.0, 1.0, 0.0);
        self.curving = curving;
        self.cut_off = clamp_cut_off(cut_off, &self.poly_heights);
    }

    /// Set the material band thresholds (ascending heights) and blend factor
    pub fn set_bands(&mut self, band_thresholds: &[f32], band_blend_factor: f32) {
        self.band_thresholds = band_thresholds.to_vec();
        self.band_blend_factor = clamp_or(band_blend_factor, 0.0, 1.0, 0.0);
    }

    /// Reshape into a regular polygon with evenly spaced corners
    pub fn set_to_regular_polygon(
        &mut self,
        corner_count: u32,
        sampling: u32,
        floret_factor: f32,
        base_size: f32,
        top_size: f32,
        angle_offset: f32,
    ) {
        let len = effective_corner_count(corner_count, floret_factor);
        let step = 2.0 * PI / len as f32;
        let angles: Vec<f32> = (0..len).map(|i| angle_offset + i as f32 * step).collect();

        self.configure(
            corner_count,
            sampling,
            floret_factor,
            &[base_size],
            &[top_size],
            &angles,
        );
    }

    /// Give every corner the same height
    pub fn use_single_height(&mut self, height: f32) {
        self.poly_heights = resize_sizes(&[height], self.effective_corner_count());
        self.cut_off = clamp_cut_off(self.cut_off, &self.poly_heights);
    }

    /// Re-pad every per-corner array to the current effective corner count
    fn repad(&mut self) {
        let len = self.effective_corner_count();
        self.base_sizes = resize_sizes(&self.base_sizes, len);
        self.top_sizes = resize_sizes(&self.top_sizes, len);
        self.summit_angles = resize_clamped(&self.summit_angles, len, 0.0, f32::MIN, f32::MAX);
        self.poly_heights = resize_sizes(&self.poly_heights, len);
        self.cut_off = clamp_cut_off(self.cut_off, &self.poly_heights);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw corner count (before floret multiplication)
    pub fn corner_count(&self) -> u32 {
        self.corner_count
    }

    /// Working corner count: tripled in floret mode
    pub fn effective_corner_count(&self) -> usize {
        effective_corner_count(self.corner_count, self.floret_factor)
    }

    pub fn sampling(&self) -> u32 {
        self.sampling
    }

    pub fn floret_factor(&self) -> f32 {
        self.floret_factor
    }

    pub fn is_floret(&self) -> bool {
        self.floret_factor != 0.0
    }

    pub fn base_sizes(&self) -> &[f32] {
        &self.base_sizes
    }

    pub fn top_sizes(&self) -> &[f32] {
        &self.top_sizes
    }

    /// Corner angles in radians
    pub fn summit_angles(&self) -> &[f32] {
        &self.summit_angles
    }

    pub fn poly_heights(&self) -> &[f32] {
        &self.poly_heights
    }

    pub fn slope(&self) -> f32 {
        self.slope
    }

    pub fn curving(&self) -> bool {
        self.curving
    }

    pub fn cut_off(&self) -> f32 {
        self.cut_off
    }

    pub fn band_thresholds(&self) -> &[f32] {
        &self.band_thresholds
    }

    pub fn band_blend_factor(&self) -> f32 {
        self.band_blend_factor
    }

    /// Number of triangle bands a generated mesh carries
    pub fn band_count(&self) -> usize {
        2 + self.band_thresholds.len()
    }

    /// Flat buffer layout for the current corner count and sampling
    pub fn layout(&self) -> VertexLayout {
        VertexLayout::new(self.effective_corner_count(), self.sampling as usize)
    }

    /// Apex height: min/mean/max of the corner heights blended by `slope`
    pub fn center_height(&self) -> f32 {
        let heights = &self.poly_heights;
        let min = heights.iter().copied().fold(f32::INFINITY, f32::min);
        let max = heights.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = heights.iter().sum::<f32>() / heights.len() as f32;

        lerp3(min, mean, max, self.slope)
    }
}

// ============================================================================
// Normalization helpers
// ============================================================================

/// Corner count after floret multiplication, with the minimum applied
pub fn effective_corner_count(corner_count: u32, floret_factor: f32) -> usize {
    let floret = clamp_or(floret_factor, 0.0, 1.0, 0.0) != 0.0;
    clamp_corner_count(corner_count) as usize * if floret { 3 } else { 1 }
}

/// Resize `values` to `len` entries, then clamp each into `[min, max]`
///
/// Missing and NaN entries resolve to `default` before clamping.
pub fn resize_clamped(values: &[f32], len: usize, default: f32, min: f32, max: f32) -> Vec<f32> {
    (0..len)
        .map(|index| match values.get(index) {
            Some(value) if !value.is_nan() => *value,
            _ => default,
        })
        .map(|value| value.clamp(min, max))
        .collect()
}

/// Clamp `cut_off` between zero and the smallest height, whichever side zero is on
pub fn clamp_cut_off(cut_off: f32, heights: &[f32]) -> f32 {
    let min_height = heights.iter().copied().fold(f32::INFINITY, f32::min);
    let min_height = if min_height.is_finite() { min_height } else { 0.0 };

    let low = 0.0f32.min(min_height);
    let high = 0.0f32.max(min_height);

    clamp_or(cut_off, low, high, low)
}

/// Linear interpolation (`t` unclamped)
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Three-point piecewise-linear blend over `t ∈ [-1, 1]`
///
/// `-1` yields `a`, `0` yields `b`, `1` yields `c`.
pub fn lerp3(a: f32, b: f32, c: f32, t: f32) -> f32 {
    let t = clamp_or(t, -1.0, 1.0, 0.0);

    if t < 0.0 {
        lerp(a, b, t + 1.0)
    } else {
        lerp(b, c, t)
    }
}

fn resize_sizes(values: &[f32], len: usize) -> Vec<f32> {
    resize_clamped(values, len, first_or_one(values), 0.0, f32::MAX)
}

fn first_or_one(values: &[f32]) -> f32 {
    values
        .first()
        .copied()
        .filter(|value| !value.is_nan())
        .unwrap_or(1.0)
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

fn clamp_corner_count(corner_count: u32) -> u32 {
    if corner_count < MIN_CORNERS {
        debug!(
            corner_count,
            "PolygonSpec: corner count below {}, raising", MIN_CORNERS
        );
        MIN_CORNERS
    } else {
        corner_count
    }
}

fn clamp_sampling(sampling: u32) -> u32 {
    if sampling < MIN_SAMPLING {
        debug!(sampling, "PolygonSpec: sampling below {}, raising", MIN_SAMPLING);
        MIN_SAMPLING
    } else {
        sampling
    }
}
