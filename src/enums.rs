/// The three canonical anatomical viewing axes.
///
/// Each axis fixes one dimension of the volume's `(d0, d1, d2)` index space
/// and displays the remaining two in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewAxis {
    /// Fixes dimension 0, displays `(1, 2)`.
    Axial,
    /// Fixes dimension 1, displays `(0, 2)`.
    Coronal,
    /// Fixes dimension 2, displays `(0, 1)`.
    Sagittal,
}

impl ViewAxis {
    pub const ALL: [ViewAxis; 3] = [ViewAxis::Axial, ViewAxis::Coronal, ViewAxis::Sagittal];

    /// Dimension of the volume that slicing along this axis fixes.
    pub fn fixed_dim(self) -> usize {
        match self {
            ViewAxis::Axial => 0,
            ViewAxis::Coronal => 1,
            ViewAxis::Sagittal => 2,
        }
    }
}

/// Color lookup table selection.
///
/// The core only carries the name; resolving it to an actual lookup table is
/// the 2D renderer's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMap {
    #[default]
    Gray,
    Jet,
    Hot,
    Cool,
}

impl ColorMap {
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Gray => "gray",
            ColorMap::Jet => "jet",
            ColorMap::Hot => "hot",
            ColorMap::Cool => "cool",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorMap> {
        match name {
            "gray" => Some(ColorMap::Gray),
            "jet" => Some(ColorMap::Jet),
            "hot" => Some(ColorMap::Hot),
            "cool" => Some(ColorMap::Cool),
            _ => None,
        }
    }
}

/// Mouse button reported by the interaction layer for a click on a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Which per-view slider changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKind {
    Brightness,
    Contrast,
    Zoom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_map_names_round_trip() {
        for map in [ColorMap::Gray, ColorMap::Jet, ColorMap::Hot, ColorMap::Cool] {
            assert_eq!(ColorMap::from_name(map.name()), Some(map));
        }
        assert_eq!(ColorMap::from_name("viridis"), None);
    }

    #[test]
    fn fixed_dims_cover_all_three() {
        let dims: Vec<_> = ViewAxis::ALL.iter().map(|a| a.fixed_dim()).collect();
        assert_eq!(dims, vec![0, 1, 2]);
    }
}
