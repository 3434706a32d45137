//! Per-redraw composition of the three orthogonal views.
//!
//! [`render_views`] is the single recomputation path: every interaction that
//! changes the slice index, a slider, the color map or the annotation set
//! triggers a full recompute of all three planes. Redraw is a pure function
//! of `(volume, state, annotations)`; no caching or dirty-region tracking.

use crate::annotations::{AnnotationStore, Point};
use crate::enums::{ColorMap, SettingKind, ViewAxis};
use crate::error::ViewerError;
use crate::viewport::{self, ViewBounds};
use crate::volume::{Volume, VolumeStore};
use crate::windowing;

use image::{ImageBuffer, Luma};
use ndarray::Array2;
use rayon::prelude::*;

/// Brightness, contrast and zoom for one view, each 0..=100 with 50 neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    pub brightness: u8,
    pub contrast: u8,
    pub zoom: u8,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            brightness: 50,
            contrast: 50,
            zoom: 50,
        }
    }
}

impl ViewSettings {
    pub fn set(&mut self, kind: SettingKind, value: u8) {
        match kind {
            SettingKind::Brightness => self.brightness = value,
            SettingKind::Contrast => self.contrast = value,
            SettingKind::Zoom => self.zoom = value,
        }
    }
}

/// Independent [`ViewSettings`] per viewing axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsByAxis {
    axial: ViewSettings,
    coronal: ViewSettings,
    sagittal: ViewSettings,
}

impl SettingsByAxis {
    pub fn get(&self, axis: ViewAxis) -> &ViewSettings {
        match axis {
            ViewAxis::Axial => &self.axial,
            ViewAxis::Coronal => &self.coronal,
            ViewAxis::Sagittal => &self.sagittal,
        }
    }

    pub fn get_mut(&mut self, axis: ViewAxis) -> &mut ViewSettings {
        match axis {
            ViewAxis::Axial => &mut self.axial,
            ViewAxis::Coronal => &mut self.coronal,
            ViewAxis::Sagittal => &mut self.sagittal,
        }
    }
}

/// Everything the compositor needs besides the volume and the annotations.
///
/// A plain value, handed in explicitly on every render call so that redraw
/// stays a pure function of its inputs.
#[derive(Clone, Copy, Debug)]
pub struct ViewerState {
    /// Single slice index shared by all three views.
    pub slice_index: usize,
    pub settings: SettingsByAxis,
    pub color_map: ColorMap,
}

impl ViewerState {
    /// Initial state for a freshly loaded volume: the shared slice index
    /// starts at the middle of the first dimension.
    pub fn for_volume(volume: &Volume) -> Self {
        Self {
            slice_index: volume.dim().0 / 2,
            settings: SettingsByAxis::default(),
            color_map: ColorMap::default(),
        }
    }
}

/// One composited view: the remapped plane, its display window, the overlay
/// points and the color map the renderer should resolve.
#[derive(Debug)]
pub struct RenderedView {
    pub axis: ViewAxis,
    pub image: Array2<f32>,
    pub bounds: ViewBounds,
    pub overlay: Vec<Point>,
    pub color_map: ColorMap,
}

impl RenderedView {
    /// Convert the remapped plane to an 8-bit grayscale image for renderers
    /// that want pixels rather than scalars. Values are already in
    /// `[0, 255]` after windowing.
    pub fn to_luma8(&self) -> Option<ImageBuffer<Luma<u8>, Vec<u8>>> {
        let (height, width) = self.image.dim();
        let pixels: Vec<u8> = self
            .image
            .as_standard_layout()
            .as_slice()?
            .par_iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect();
        ImageBuffer::from_raw(width as u32, height as u32, pixels)
    }
}

/// The three composited views of one redraw.
#[derive(Debug)]
pub struct ViewTriplet {
    pub axial: RenderedView,
    pub coronal: RenderedView,
    pub sagittal: RenderedView,
}

impl ViewTriplet {
    pub fn get(&self, axis: ViewAxis) -> &RenderedView {
        match axis {
            ViewAxis::Axial => &self.axial,
            ViewAxis::Coronal => &self.coronal,
            ViewAxis::Sagittal => &self.sagittal,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedView> {
        [&self.axial, &self.coronal, &self.sagittal].into_iter()
    }
}

/// Compose all three orthogonal views at the shared slice index.
///
/// For each axis: extract the plane, remap intensities with that axis's
/// brightness/contrast, compute the crop window from that axis's zoom, and
/// attach the full annotation list (overlay points are drawn on every view,
/// not clipped per view).
///
/// # Errors
///
/// [`ViewerError::NoVolumeLoaded`] if the store is empty, or
/// [`ViewerError::IndexOutOfRange`] if the shared index exceeds an axis
/// extent.
pub fn render_views(
    store: &VolumeStore,
    state: &ViewerState,
    annotations: &AnnotationStore,
) -> Result<ViewTriplet, ViewerError> {
    let volume = store.get()?;
    Ok(ViewTriplet {
        axial: render_view(volume, ViewAxis::Axial, state, annotations)?,
        coronal: render_view(volume, ViewAxis::Coronal, state, annotations)?,
        sagittal: render_view(volume, ViewAxis::Sagittal, state, annotations)?,
    })
}

fn render_view(
    volume: &Volume,
    axis: ViewAxis,
    state: &ViewerState,
    annotations: &AnnotationStore,
) -> Result<RenderedView, ViewerError> {
    let plane = volume.slice_along(axis, state.slice_index)?;
    let settings = state.settings.get(axis);
    let image = windowing::apply(&plane, settings.brightness, settings.contrast);
    let (rows, cols) = image.dim();
    let bounds = viewport::compute_bounds(rows, cols, settings.zoom);
    Ok(RenderedView {
        axis,
        image,
        bounds,
        overlay: annotations.all().to_vec(),
        color_map: state.color_map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn loaded_store(d0: usize, d1: usize, d2: usize, fill: f32) -> VolumeStore {
        let mut store = VolumeStore::new();
        store.load(crate::volume::Volume::with_unit_spacing(Array3::from_elem(
            (d0, d1, d2),
            fill,
        )));
        store
    }

    #[test]
    fn default_settings_render_a_uniform_volume_unchanged() {
        let store = loaded_store(4, 4, 4, 128.0);
        let state = ViewerState::for_volume(store.get().unwrap());
        let views = render_views(&store, &state, &AnnotationStore::new()).unwrap();

        for view in views.iter() {
            assert_eq!(view.image.dim(), (4, 4));
            for &v in view.image.iter() {
                assert!((v - 128.0).abs() < 1e-3, "{:?}: {v}", view.axis);
            }
            assert_eq!(view.color_map, ColorMap::Gray);
        }
    }

    #[test]
    fn plane_shapes_differ_per_axis_on_anisotropic_volumes() {
        let store = loaded_store(3, 4, 5, 0.0);
        let state = ViewerState {
            slice_index: 1,
            settings: SettingsByAxis::default(),
            color_map: ColorMap::Gray,
        };
        let views = render_views(&store, &state, &AnnotationStore::new()).unwrap();
        assert_eq!(views.axial.image.dim(), (4, 5));
        assert_eq!(views.coronal.image.dim(), (3, 5));
        assert_eq!(views.sagittal.image.dim(), (3, 4));
    }

    #[test]
    fn per_axis_settings_are_independent() {
        let store = loaded_store(4, 4, 4, 128.0);
        let mut state = ViewerState::for_volume(store.get().unwrap());
        state.settings.get_mut(ViewAxis::Coronal).brightness = 100;
        let views = render_views(&store, &state, &AnnotationStore::new()).unwrap();

        assert!((views.axial.image[[0, 0]] - 128.0).abs() < 1e-3);
        assert_eq!(views.coronal.image[[0, 0]], 255.0);
        assert!((views.sagittal.image[[0, 0]] - 128.0).abs() < 1e-3);
    }

    #[test]
    fn overlay_points_appear_on_every_view() {
        let store = loaded_store(4, 4, 4, 0.0);
        let state = ViewerState::for_volume(store.get().unwrap());
        let mut annotations = AnnotationStore::new();
        annotations.add(Point::new(1, 2));
        annotations.add(Point::new(3, 0));

        let views = render_views(&store, &state, &annotations).unwrap();
        for view in views.iter() {
            assert_eq!(view.overlay, vec![Point::new(1, 2), Point::new(3, 0)]);
        }
    }

    #[test]
    fn empty_store_fails_fast() {
        let store = VolumeStore::new();
        let state = ViewerState {
            slice_index: 0,
            settings: SettingsByAxis::default(),
            color_map: ColorMap::Gray,
        };
        let err = render_views(&store, &state, &AnnotationStore::new()).unwrap_err();
        assert!(matches!(err, ViewerError::NoVolumeLoaded));
    }

    #[test]
    fn shared_index_is_bounded_by_each_axis_extent() {
        // index 3 is valid along dim 0 but not along dim 1
        let store = loaded_store(5, 3, 5, 0.0);
        let state = ViewerState {
            slice_index: 3,
            settings: SettingsByAxis::default(),
            color_map: ColorMap::Gray,
        };
        let err = render_views(&store, &state, &AnnotationStore::new()).unwrap_err();
        assert!(matches!(err, ViewerError::IndexOutOfRange { .. }));
    }

    #[test]
    fn luma8_conversion_rounds_into_range() {
        let store = loaded_store(2, 2, 2, 254.6);
        let state = ViewerState::for_volume(store.get().unwrap());
        let views = render_views(&store, &state, &AnnotationStore::new()).unwrap();
        let img = views.axial.to_luma8().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
    }
}
