//! Procedural poly-prism meshes
//!
//! Generates a closed mesh from a handful of numbers: a polygon profile
//! (optionally a lobed "floret" outline), a side wall that can be cut by a
//! plane below its rim, and a subdivided cap that ranges from creased to
//! domed. Cap triangles can be split into material bands by height.
//!
//! # Example
//! ```
//! use polyprism::procedural::*;
//!
//! let mut spec = PolygonSpec::default();
//! spec.set_to_regular_polygon(6, 4, 0.0, 1.0, 0.8, 0.0);
//! spec.set_heights(&[1.0, 1.5], 0.5, true, 0.2);
//! spec.set_bands(&[0.8, 1.2], 0.5);
//!
//! let mesh = generate(&spec);
//! assert_eq!(mesh.vertices.len(), mesh.uvs.len());
//! assert_eq!(mesh.bands.len(), 4);
//!
//! let normals = mesh.recalculate_normals();
//! assert_eq!(normals.len(), mesh.vertices.len());
//! ```
//!
//! # Node descriptors
//! ```no_run
//! use polyprism::config::PolyNodeConfig;
//! use std::path::Path;
//!
//! let node = PolyNodeConfig::load(Path::new("tower.toml"))?;
//! let mesh = node.generate();
//! println!("{} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
//! # Ok::<(), polyprism::config::ConfigError>(())
//! ```

pub mod config;
pub mod procedural;

pub use config::{ConfigError, PolyNodeConfig};
pub use procedural::{GeneratedMesh, PolygonSpec, generate};
