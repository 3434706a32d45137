//! # orthoview
//!
//! Core data pipeline for an orthogonal-slice volumetric scan viewer.
//!
//! A decoded 3D intensity grid is sliced along the three medical axes:
//!  - Axial
//!  - Coronal
//!  - Sagittal
//!
//! Each view carries independent brightness, contrast and zoom; a shared
//! slice index selects the plane in all three at once. Point annotations can
//! be placed on the slices, and a marching-cubes pass reconstructs a triangle
//! mesh of the isosurface at a chosen threshold.
//!
//! Window layout, file decoding and rasterization are external
//! collaborators: the decoder hands in a [`Volume`], the 2D renderer receives
//! composited planes with crop bounds and overlay points, and the 3D
//! renderer receives the reconstructed [`Mesh`].
//!
//! # Examples
//!
//! ```
//! use ndarray::Array3;
//! use orthoview::{Viewer, Volume, MouseButton};
//!
//! let mut viewer = Viewer::new();
//! viewer.load_volume(Volume::with_unit_spacing(Array3::from_elem(
//!     (8, 8, 8),
//!     128.0,
//! )));
//!
//! viewer.handle_click(2, 3, MouseButton::Left).unwrap();
//! let views = viewer.render().unwrap();
//! assert_eq!(views.axial.image.dim(), (8, 8));
//!
//! // a uniform volume has no surface crossing the isovalue
//! let mesh = viewer.reconstruct(orthoview::surface::DEFAULT_ISOVALUE).unwrap();
//! assert!(mesh.is_empty());
//! ```

pub mod annotations;
pub mod compositor;
pub mod enums;
pub mod error;
pub mod surface;
pub mod viewer;
pub mod viewport;
pub mod volume;
pub mod windowing;

pub use annotations::{AnnotationStore, Point};
pub use compositor::{RenderedView, SettingsByAxis, ViewSettings, ViewTriplet, ViewerState};
pub use enums::{ColorMap, MouseButton, SettingKind, ViewAxis};
pub use error::ViewerError;
pub use surface::Mesh;
pub use viewer::{Viewer, VolumeDecoder};
pub use viewport::ViewBounds;
pub use volume::{Volume, VolumeStore};
