use crate::enums::ViewAxis;
use crate::error::ViewerError;

use ndarray::{Array3, ArrayView2, s};

/// A decoded volumetric scan: a 3D scalar intensity grid plus its voxel
/// spacing.
///
/// The data is immutable once constructed; loading a new scan replaces the
/// whole value inside [`VolumeStore`]. Intensities are nominally in
/// `[0, 255]` but any scalar range is accepted — the windowing step clips.
pub struct Volume {
    data: Array3<f32>,
    spacing: (f32, f32, f32),
}

impl Volume {
    pub fn new(data: Array3<f32>, spacing: (f32, f32, f32)) -> Self {
        Self { data, spacing }
    }

    /// Construct with the default unit spacing of (1, 1, 1).
    pub fn with_unit_spacing(data: Array3<f32>) -> Self {
        Self::new(data, (1.0, 1.0, 1.0))
    }

    /// Get the dimensions of the volume (d0, d1, d2)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Voxel spacing per dimension, matching the order of [`Volume::dim`].
    pub fn spacing(&self) -> (f32, f32, f32) {
        self.spacing
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Size of the dimension fixed when slicing along `axis`.
    pub fn extent(&self, axis: ViewAxis) -> usize {
        let (d0, d1, d2) = self.data.dim();
        [d0, d1, d2][axis.fixed_dim()]
    }

    /// Extract the 2D plane at `index` along `axis` as a borrowed view.
    ///
    /// The returned plane's shape is the two non-fixed dimensions in order:
    /// `(d1, d2)` for axial, `(d0, d2)` for coronal, `(d0, d1)` for sagittal.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::IndexOutOfRange`] if `index` is not within
    /// `[0, extent(axis))`.
    pub fn slice_along(
        &self,
        axis: ViewAxis,
        index: usize,
    ) -> Result<ArrayView2<'_, f32>, ViewerError> {
        let extent = self.extent(axis);
        if index >= extent {
            return Err(ViewerError::IndexOutOfRange { index, extent });
        }
        let plane = match axis {
            ViewAxis::Axial => self.data.slice(s![index, .., ..]),
            ViewAxis::Coronal => self.data.slice(s![.., index, ..]),
            ViewAxis::Sagittal => self.data.slice(s![.., .., index]),
        };
        Ok(plane)
    }
}

/// Exclusive owner of the currently loaded [`Volume`].
///
/// Replacing the volume invalidates slice indices and annotations held by
/// callers; [`crate::viewer::Viewer`] re-derives both on load.
#[derive(Default)]
pub struct VolumeStore {
    volume: Option<Volume>,
}

impl VolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored volume wholesale.
    pub fn load(&mut self, volume: Volume) {
        let (d0, d1, d2) = volume.dim();
        log::info!("loaded volume {d0}x{d1}x{d2}, spacing {:?}", volume.spacing());
        self.volume = Some(volume);
    }

    /// Current volume, or [`ViewerError::NoVolumeLoaded`] before the first
    /// successful load.
    pub fn get(&self) -> Result<&Volume, ViewerError> {
        self.volume.as_ref().ok_or(ViewerError::NoVolumeLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.volume.is_some()
    }
}
