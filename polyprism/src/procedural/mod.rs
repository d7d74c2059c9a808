//! Procedural poly-prism generation
//!
//! Generation runs four stages over one flat vertex buffer:
//! - `params`: raw inputs normalized into a `PolygonSpec`
//! - `rings`: base/top rim corners and the sampled, cuttable side wall
//! - `cap`: concentric rings shrinking from the top rim to the apex
//! - `topology` / `uv`: triangles routed into material bands, plus UVs
//!
//! Every stage addresses the buffer through `VertexLayout`, so each one
//! writes a disjoint set of indices.

mod cap;
mod layout;
mod params;
mod rings;
mod topology;
mod types;
mod uv;


use glam::Vec3;
use tracing::{debug, trace};

pub use cap::LINE_CURVE_POWER;
pub use layout::VertexLayout;
pub use params::{
    MIN_CORNERS, MIN_SAMPLING, PolygonSpec, clamp_cut_off, effective_corner_count, lerp, lerp3,
    resize_clamped,
};
pub use rings::FLORET_FLANK_OFFSET_DEG;
pub use topology::{BASE_BAND, BandClassifier, TOP_BAND};
pub use types::GeneratedMesh;

/// Generate the mesh described by `spec`
///
/// Pure and deterministic: the same spec always yields bit-identical
/// buffers, and every call allocates its own.
pub fn generate(spec: &PolygonSpec) -> GeneratedMesh {
    let layout = spec.layout();

    debug!(
        corners = layout.corners(),
        sampling = layout.sampling(),
        vertices = layout.vertices_len(),
        triangles = layout.triangle_count(),
        bands = spec.band_count(),
        "generating poly prism"
    );

    let mut vertices = vec![Vec3::ZERO; layout.vertices_len()];

    let rims = rings::build_rims(spec);
    rings::write_wall(spec, &layout, &rims, &mut vertices);
    trace!("wall written");

    cap::write_cap(spec, &layout, &rims.top, &mut vertices);
    trace!("cap written");

    let bands = topology::build_bands(spec, &layout, &vertices);
    let uvs = uv::build_uvs(spec, &layout, &vertices);

    GeneratedMesh {
        vertices,
        uvs,
        bands,
    }
}

impl PolygonSpec {
    /// Generate the mesh for this spec (see [`generate`])
    pub fn generate(&self) -> GeneratedMesh {
        generate(self)
    }
}
