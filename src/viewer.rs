//! Facade tying the pipeline together for a host UI.
//!
//! The interaction layer reports discrete events (slider moved, slice
//! changed, click, load, reconstruct); each maps onto exactly one method
//! here. Everything runs synchronously on the calling thread.

use crate::annotations::{AnnotationStore, Point};
use crate::compositor::{self, ViewTriplet, ViewerState};
use crate::enums::{ColorMap, MouseButton, SettingKind, ViewAxis};
use crate::error::ViewerError;
use crate::surface::{self, Mesh};
use crate::volume::{Volume, VolumeStore};

use std::path::Path;

/// Decoder collaborator: turns a file path into a [`Volume`].
///
/// Implementations live outside the core (DICOM, NIfTI, ...). Whatever they
/// fail with is surfaced unchanged inside [`ViewerError::LoadFailed`].
pub trait VolumeDecoder {
    type Error: std::fmt::Display;

    fn decode(&self, path: &Path) -> Result<Volume, Self::Error>;
}

/// Owns the volume, the per-view settings and the annotations, and exposes
/// one method per interaction event.
#[derive(Default)]
pub struct Viewer {
    store: VolumeStore,
    state: Option<ViewerState>,
    annotations: AnnotationStore,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded volume.
    ///
    /// The shared slice index resets to the middle of the first dimension,
    /// view settings return to their defaults and annotations are cleared —
    /// points were placed in the old volume's index space.
    pub fn load_volume(&mut self, volume: Volume) {
        self.state = Some(ViewerState::for_volume(&volume));
        self.store.load(volume);
        self.annotations.clear();
    }

    /// Decode a volume from `path` and load it.
    ///
    /// # Errors
    ///
    /// Decoder failures come back as [`ViewerError::LoadFailed`] with the
    /// decoder's message; prior volume, settings and annotations stay
    /// untouched in that case.
    pub fn load_from_path<D: VolumeDecoder>(
        &mut self,
        decoder: &D,
        path: &Path,
    ) -> Result<(), ViewerError> {
        let volume = decoder
            .decode(path)
            .map_err(|e| ViewerError::LoadFailed(e.to_string()))?;
        self.load_volume(volume);
        Ok(())
    }

    pub fn volume(&self) -> Result<&Volume, ViewerError> {
        self.store.get()
    }

    fn state(&self) -> Result<&ViewerState, ViewerError> {
        self.state.as_ref().ok_or(ViewerError::NoVolumeLoaded)
    }

    fn state_mut(&mut self) -> Result<&mut ViewerState, ViewerError> {
        self.state.as_mut().ok_or(ViewerError::NoVolumeLoaded)
    }

    /// Shared slice index across all three views.
    pub fn slice_index(&self) -> Result<usize, ViewerError> {
        Ok(self.state()?.slice_index)
    }

    /// Valid slice index range for the slice slider: `0..extent`.
    pub fn slice_extent(&self) -> Result<usize, ViewerError> {
        Ok(self.store.get()?.extent(ViewAxis::Axial))
    }

    /// Move the shared slice index, bound-checked against dimension 0.
    pub fn set_slice_index(&mut self, index: usize) -> Result<(), ViewerError> {
        let extent = self.slice_extent()?;
        if index >= extent {
            return Err(ViewerError::IndexOutOfRange { index, extent });
        }
        self.state_mut()?.slice_index = index;
        Ok(())
    }

    /// Move one brightness/contrast/zoom slider of one view.
    pub fn set_view_setting(
        &mut self,
        axis: ViewAxis,
        kind: SettingKind,
        value: u8,
    ) -> Result<(), ViewerError> {
        self.state_mut()?.settings.get_mut(axis).set(kind, value);
        Ok(())
    }

    pub fn set_color_map(&mut self, color_map: ColorMap) -> Result<(), ViewerError> {
        self.state_mut()?.color_map = color_map;
        Ok(())
    }

    /// Handle a click on a slice: left adds a point (when it lands inside
    /// the plane bounds), right removes the most recent one.
    pub fn handle_click(
        &mut self,
        row: usize,
        col: usize,
        button: MouseButton,
    ) -> Result<(), ViewerError> {
        let (d0, d1, _) = self.store.get()?.dim();
        match button {
            MouseButton::Left => {
                if row < d0 && col < d1 {
                    self.annotations.add(Point::new(row, col));
                }
            }
            MouseButton::Right => self.annotations.remove_last(),
        }
        Ok(())
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// Compose all three views; the per-redraw entry point.
    pub fn render(&self) -> Result<ViewTriplet, ViewerError> {
        compositor::render_views(&self.store, self.state()?, &self.annotations)
    }

    /// Run isosurface extraction over the loaded volume. One-shot; the
    /// caller owns the mesh and re-invokes explicitly after a new load.
    pub fn reconstruct(&self, isovalue: f32) -> Result<Mesh, ViewerError> {
        surface::reconstruct(&self.store, isovalue)
    }
}
