//! Flat vertex buffer addressing
//!
//! Every generated vertex lives in one buffer split into three regions:
//!
//! - Base: the origin (index 0) followed by the base rim and top rim corners
//! - Wall: lower (cut) and upper rim samples for every corner/sample pair
//! - Cap: concentric rings from `sampling` corners-per-edge down to the apex,
//!   which occupies the final slot
//!
//! Each stage writes only the addresses these functions hand out, so the
//! stages never overlap and need no nested containers.

/// Closed-form index math for one (corner count, sampling) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    corners: usize,
    sampling: usize,
}

impl VertexLayout {
    /// Create a layout for `corners` effective corners and `sampling` samples per edge
    pub fn new(corners: usize, sampling: usize) -> Self {
        debug_assert!(corners >= 3, "layout needs at least 3 corners");
        debug_assert!(sampling >= 1, "layout needs at least 1 sample");
        Self { corners, sampling }
    }

    pub fn corners(&self) -> usize {
        self.corners
    }

    pub fn sampling(&self) -> usize {
        self.sampling
    }

    /// Origin + base rim + top rim
    pub fn base_len(&self) -> usize {
        1 + 2 * self.corners
    }

    /// Lower and upper wall samples
    pub fn middle_len(&self) -> usize {
        2 * self.corners * self.sampling
    }

    /// Cap rings plus the apex
    pub fn top_len(&self) -> usize {
        // s(s+1) is always even, so the halving is exact
        1 + self.corners * self.sampling * (self.sampling + 1) / 2
    }

    pub fn vertices_len(&self) -> usize {
        self.base_len() + self.middle_len() + self.top_len()
    }

    /// First index of the cap region
    pub fn cap_start(&self) -> usize {
        self.base_len() + self.middle_len()
    }

    /// Base corner address: layer 0 is the base rim, layer 1 the top rim
    pub fn base_index(&self, layer: usize, corner: usize) -> usize {
        1 + layer * self.corners + corner
    }

    /// Wall sample address: layer 0 is the cut rim, layer 1 the upper rim
    pub fn wall_index(&self, layer: usize, corner: usize, sample: usize) -> usize {
        self.base_len() + self.sampling * (layer * self.corners + corner) + sample
    }

    /// Number of cap vertices stored before ring `ring`
    ///
    /// Ring `k` holds `corners * k` vertices; rings are stored from the outer
    /// ring (`sampling`) inwards.
    pub fn ring_offset(&self, ring: usize) -> usize {
        let s = self.sampling;
        self.corners * (s * (s + 1) - ring * (ring + 1)) / 2
    }

    /// Cap vertex address for ring `ring`, edge `corner`, intra-ring sample `sample`
    pub fn cap_index(&self, ring: usize, corner: usize, sample: usize) -> usize {
        self.cap_start() + self.ring_offset(ring) + corner * ring + sample
    }

    /// The single apex vertex (ring 0)
    pub fn apex_index(&self) -> usize {
        self.vertices_len() - 1
    }

    // ========================================================================
    // Triangle counts (used to pre-size index buffers)
    // ========================================================================

    /// Base fan plus the wall-base quads
    pub fn base_triangle_count(&self) -> usize {
        3 * self.corners
    }

    /// Upper wall quads
    pub fn wall_triangle_count(&self) -> usize {
        2 * self.corners * self.sampling
    }

    /// Ring `k` stitches `corners * (2k - 1)` triangles, summing to `corners * s²`
    pub fn cap_triangle_count(&self) -> usize {
        self.corners * self.sampling * self.sampling
    }

    pub fn triangle_count(&self) -> usize {
        self.base_triangle_count() + self.wall_triangle_count() + self.cap_triangle_count()
    }
}
