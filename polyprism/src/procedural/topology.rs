//! Triangle emission and material band classification
//!
//! Band layout:
//! - `0`: base fan and wall-base quads
//! - `1`: upper wall quads (and every cap triangle when no thresholds are set)
//! - `2 + i`: cap triangles whose blended height falls in threshold bucket `i`

use glam::Vec3;

use super::layout::VertexLayout;
use super::params::{PolygonSpec, lerp3};

/// Band holding the base fan and wall-base quads
pub const BASE_BAND: usize = 0;

/// Band holding the upper wall quads
pub const TOP_BAND: usize = 1;

/// Routes cap triangles to material bands by height
#[derive(Clone, Copy, Debug)]
pub struct BandClassifier<'a> {
    thresholds: &'a [f32],
    blend: f32,
}

impl<'a> BandClassifier<'a> {
    pub fn new(spec: &'a PolygonSpec) -> Self {
        Self {
            thresholds: spec.band_thresholds(),
            // [0, 1] → [-1, 1] selects min / mean / max
            blend: 2.0 * (spec.band_blend_factor() - 0.5),
        }
    }

    /// Representative height of a triangle: min/mean/max blended by the band blend factor
    pub fn blended_height(&self, heights: [f32; 3]) -> f32 {
        let [a, b, c] = heights;
        let min = a.min(b).min(c);
        let mean = (a + b + c) / 3.0;
        let max = a.max(b).max(c);

        lerp3(min, mean, max, self.blend)
    }

    /// Band index for a triangle with the given vertex heights
    ///
    /// The first threshold (in supplied order) the blended height does not
    /// exceed picks the band; heights above every threshold go to the last band.
    pub fn classify(&self, heights: [f32; 3]) -> usize {
        if self.thresholds.is_empty() {
            return TOP_BAND;
        }

        let height = self.blended_height(heights);
        self.thresholds
            .iter()
            .position(|&threshold| height <= threshold)
            .map(|index| index + 2)
            .unwrap_or(self.thresholds.len() + 1)
    }
}

/// Per-band index buffers, pre-sized from the closed-form triangle counts
struct Bands {
    bands: Vec<Vec<u32>>,
}

impl Bands {
    fn new(layout: &VertexLayout, threshold_count: usize) -> Self {
        let mut bands = Vec::with_capacity(2 + threshold_count);
        bands.push(Vec::with_capacity(3 * layout.base_triangle_count()));

        let cap_indices = 3 * layout.cap_triangle_count();
        if threshold_count == 0 {
            bands.push(Vec::with_capacity(3 * layout.wall_triangle_count() + cap_indices));
        } else {
            bands.push(Vec::with_capacity(3 * layout.wall_triangle_count()));
            for _ in 0..threshold_count {
                bands.push(Vec::with_capacity(cap_indices / threshold_count));
            }
        }

        Self { bands }
    }

    fn add_triangle(&mut self, band: usize, i0: usize, i1: usize, i2: usize) {
        let indices = &mut self.bands[band];
        indices.push(i0 as u32);
        indices.push(i1 as u32);
        indices.push(i2 as u32);
    }
}

/// Emit every triangle of the mesh into its band
pub(super) fn build_bands(
    spec: &PolygonSpec,
    layout: &VertexLayout,
    vertices: &[Vec3],
) -> Vec<Vec<u32>> {
    let mut bands = Bands::new(layout, spec.band_thresholds().len());

    add_base(layout, &mut bands);
    add_wall(layout, &mut bands);
    add_cap(layout, &BandClassifier::new(spec), vertices, &mut bands);

    bands.bands
}

/// Base fan from the origin plus the quads up to the cut rim
fn add_base(layout: &VertexLayout, bands: &mut Bands) {
    let corners = layout.corners();

    for corner in 0..corners {
        let next = (corner + 1) % corners;

        let base = layout.base_index(0, corner);
        let base_next = layout.base_index(0, next);
        let top = layout.base_index(1, corner);
        let top_next = layout.base_index(1, next);

        bands.add_triangle(BASE_BAND, 0, base, base_next);
        bands.add_triangle(BASE_BAND, top, base_next, base);
        bands.add_triangle(BASE_BAND, base_next, top, top_next);
    }
}

/// Quads between the cut rim and the upper rim, wrapping to the next edge
fn add_wall(layout: &VertexLayout, bands: &mut Bands) {
    let corners = layout.corners();
    let sampling = layout.sampling();

    for corner in 0..corners {
        let next = (corner + 1) % corners;

        for sample in 0..sampling {
            let next_corner = if sample + 1 < sampling { corner } else { next };
            let next_sample = (sample + 1) % sampling;

            let lower = layout.wall_index(0, corner, sample);
            let upper = layout.wall_index(1, corner, sample);
            let lower_next = layout.wall_index(0, next_corner, next_sample);
            let upper_next = layout.wall_index(1, next_corner, next_sample);

            bands.add_triangle(TOP_BAND, lower, upper, upper_next);
            bands.add_triangle(TOP_BAND, upper_next, lower_next, lower);
        }
    }
}

/// Stitch each cap ring `k` to ring `k - 1`
///
/// Ring `k` has one more sample per edge than ring `k - 1`, so each edge gets
/// `k` outward triangles and `k - 1` inward ones.
fn add_cap(
    layout: &VertexLayout,
    classifier: &BandClassifier<'_>,
    vertices: &[Vec3],
    bands: &mut Bands,
) {
    let corners = layout.corners();
    let add = |bands: &mut Bands, i0: usize, i1: usize, i2: usize| {
        let band = classifier.classify([vertices[i0].y, vertices[i1].y, vertices[i2].y]);
        bands.add_triangle(band, i0, i1, i2);
    };

    for ring in (1..=layout.sampling()).rev() {
        let inner = ring - 1;

        for corner in 0..corners {
            let next = (corner + 1) % corners;

            for sample in 0..ring {
                let next_sample = (sample + 1) % ring;

                let (inner_corner, inner_sample) = if sample < inner {
                    (corner, sample)
                } else {
                    (next, next_sample)
                };
                let outer_corner = if sample + 1 < ring { corner } else { next };

                add(
                    bands,
                    layout.cap_index(ring, corner, sample),
                    layout.cap_index(inner, inner_corner, inner_sample),
                    layout.cap_index(ring, outer_corner, next_sample),
                );

                if sample < inner {
                    let next_inner_sample = (sample + 1) % inner;
                    let next_inner_corner = if sample + 1 < inner { corner } else { next };

                    add(
                        bands,
                        layout.cap_index(inner, corner, sample),
                        layout.cap_index(inner, next_inner_corner, next_inner_sample),
                        layout.cap_index(ring, corner, next_sample),
                    );
                }
            }
        }
    }
}
