//! Brightness/contrast remapping, the radiological window/level adjustment.
//!
//! Both sliders run 0..=100 with 50 as the neutral midpoint. Brightness is an
//! additive shift of up to ±255; contrast is a gamma-style remap with
//! exponent `1 + (contrast - 50) / 50`, i.e. exponents in `[0, 2]`.

use ndarray::{Array2, ArrayView2};

/// Remap a plane's intensities for display.
///
/// Pure and shape-preserving: input is clipped to `[0, 255]`, shifted by the
/// brightness term, passed through the contrast power curve and clipped
/// again. Each view owns its own slider pair, so the same voxel can render
/// differently per view.
///
/// The power base is clamped to zero before exponentiation so a brightness
/// shift below black cannot produce a negative base with a fractional
/// exponent; `0^p = 0` for positive `p` and `0^0 = 1`, matching IEEE float
/// semantics.
pub fn apply(plane: &ArrayView2<'_, f32>, brightness: u8, contrast: u8) -> Array2<f32> {
    let shift = (f32::from(brightness.min(100)) - 50.0) / 50.0 * 255.0;
    let exponent = 1.0 + (f32::from(contrast.min(100)) - 50.0) / 50.0;

    let mut out = plane.to_owned();
    out.par_mapv_inplace(|v| {
        let shifted = v.clamp(0.0, 255.0) + shift;
        let base = (shifted / 255.0).max(0.0);
        (255.0 * base.powf(exponent)).clamp(0.0, 255.0)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn neutral_sliders_are_identity_up_to_clipping() {
        let plane = array![[0.0, 64.0, 128.0], [200.0, 255.0, 300.0]];
        let out = apply(&plane.view(), 50, 50);
        let expected = [[0.0, 64.0, 128.0], [200.0, 255.0, 255.0]];
        for ((i, j), &v) in out.indexed_iter() {
            assert!(
                (v - expected[i][j]).abs() < 1e-3,
                "({i},{j}): {v} != {}",
                expected[i][j]
            );
        }
    }

    #[test]
    fn full_brightness_saturates_to_white() {
        let plane = array![[0.0, 128.0]];
        let out = apply(&plane.view(), 100, 50);
        assert_eq!(out[[0, 0]], 255.0);
        assert_eq!(out[[0, 1]], 255.0);
    }

    #[test]
    fn zero_brightness_floors_midtones_to_black() {
        let plane = array![[128.0, 255.0]];
        let out = apply(&plane.view(), 0, 50);
        // 128 - 255 goes below zero; clamped base yields 0
        assert_eq!(out[[0, 0]], 0.0);
        assert_eq!(out[[0, 1]], 0.0);
    }

    #[test]
    fn contrast_extremes_are_defined_everywhere() {
        let plane = array![[0.0, 1.0, 128.0, 255.0]];
        // exponent 0: every value maps to 255 (0^0 == 1)
        let flat = apply(&plane.view(), 50, 0);
        for &v in flat.iter() {
            assert_eq!(v, 255.0);
        }
        // exponent 2: darkens midtones, keeps endpoints
        let steep = apply(&plane.view(), 50, 100);
        assert_eq!(steep[[0, 0]], 0.0);
        assert!((steep[[0, 2]] - 255.0 * (128.0_f32 / 255.0).powi(2)).abs() < 0.5);
        assert!((steep[[0, 3]] - 255.0).abs() < 1e-3);
    }

    #[test]
    fn output_shape_matches_input() {
        let plane = Array2::<f32>::zeros((7, 3));
        assert_eq!(apply(&plane.view(), 20, 80).dim(), (7, 3));
    }

    #[test]
    fn oversized_slider_values_saturate() {
        let plane = array![[128.0]];
        assert_eq!(
            apply(&plane.view(), 200, 50)[[0, 0]],
            apply(&plane.view(), 100, 50)[[0, 0]]
        );
    }
}
