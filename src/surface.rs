//! Isosurface reconstruction over the full volume via marching cubes.
//!
//! The volume is treated as a regular scalar grid; the triangle lookup table
//! is the compact 256-entry encoding from the public-domain MarchingCubeCpp
//! tables. Output is a triangle soup with flat per-face normals — no vertex
//! sharing, smoothing or decimation.

use crate::error::ViewerError;
use crate::volume::{Volume, VolumeStore};

use glam::Vec3;

/// Isovalue used when the caller has no better threshold for the data.
pub const DEFAULT_ISOVALUE: f32 = 100.0;

/// Triangle mesh produced by isosurface extraction.
///
/// Transient: rebuilt in full on every reconstruction request and owned by
/// the caller, who hands it to the 3D renderer.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions in volume index space scaled by the voxel spacing.
    pub positions: Vec<Vec3>,
    /// One normal per vertex; flat within each face.
    pub normals: Vec<Vec3>,
    /// Every 3 consecutive indices form a triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Reconstruct the isosurface of the currently loaded volume.
///
/// # Errors
///
/// [`ViewerError::EmptyVolume`] if no volume has been loaded. A well-formed
/// volume never fails: an isovalue outside the data range simply yields an
/// empty mesh.
pub fn reconstruct(store: &VolumeStore, isovalue: f32) -> Result<Mesh, ViewerError> {
    let volume = store.get().map_err(|_| ViewerError::EmptyVolume)?;
    Ok(reconstruct_volume(volume, isovalue))
}

/// Reconstruct the isosurface of `volume` at `isovalue`.
///
/// The scalar buffer is handed to the extraction loop as one contiguous
/// slice; no per-voxel copying. Volumes thinner than 2 samples in any
/// dimension contain no cube cell and yield an empty mesh.
pub fn reconstruct_volume(volume: &Volume, isovalue: f32) -> Mesh {
    let (d0, d1, d2) = volume.dim();
    if d0 < 2 || d1 < 2 || d2 < 2 {
        return Mesh::default();
    }

    let data = volume.data().as_standard_layout();
    let field = match data.as_slice() {
        Some(slice) => slice,
        None => return Mesh::default(),
    };

    let mut mesh = march(field, isovalue, [d0, d1, d2]);

    let (s0, s1, s2) = volume.spacing();
    if (s0, s1, s2) != (1.0, 1.0, 1.0) {
        let scale = Vec3::new(s0, s1, s2);
        for p in &mut mesh.positions {
            *p *= scale;
        }
    }

    log::debug!(
        "reconstructed isosurface at {isovalue}: {} triangles",
        mesh.num_triangles()
    );
    mesh
}

/// Grid corners of a cell, numbered so bit 0 of the corner id selects the
/// +1 offset along dimension 0, bit 1 along dimension 1, bit 2 along
/// dimension 2.
#[inline]
fn corner_offset(corner: usize) -> (usize, usize, usize) {
    (corner & 1, (corner >> 1) & 1, (corner >> 2) & 1)
}

/// The two cell corners joined by each of the 12 cell edges. Edges 0..4 run
/// along dimension 0, 4..8 along dimension 1, 8..12 along dimension 2;
/// `edge / 4` is the edge's direction.
const EDGE_CORNERS: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

fn march(field: &[f32], isovalue: f32, dims: [usize; 3]) -> Mesh {
    let [d0, d1, d2] = dims;
    debug_assert_eq!(field.len(), d0 * d1 * d2);

    let value_at = |i: usize, j: usize, k: usize| field[(i * d1 + j) * d2 + k];

    let mut mesh = Mesh::default();
    let mut corner_values = [0.0_f32; 8];

    for i in 0..d0 - 1 {
        for j in 0..d1 - 1 {
            for k in 0..d2 - 1 {
                // Signed distances of the 8 cell corners to the isovalue;
                // a corner is "inside" when its value is below the isovalue.
                let mut config = 0_usize;
                for (corner, value) in corner_values.iter_mut().enumerate() {
                    let (oi, oj, ok) = corner_offset(corner);
                    *value = value_at(i + oi, j + oj, k + ok) - isovalue;
                    if *value < 0.0 {
                        config |= 1 << corner;
                    }
                }

                // Fully inside or fully outside cells contribute nothing.
                if config == 0 || config == 255 {
                    continue;
                }

                emit_cell(&mut mesh, &corner_values, config, (i, j, k));
            }
        }
    }

    mesh
}

/// Emit the triangles for one cell configuration as unshared vertices with
/// the face normal replicated to each.
fn emit_cell(mesh: &mut Mesh, corner_values: &[f32; 8], config: usize, cell: (usize, usize, usize)) {
    let entry = CELL_TRIANGLES[config];
    let n_triangles = (entry & 0xF) as usize;

    let mut offset = 4;
    for _ in 0..n_triangles {
        let base = mesh.positions.len() as u32;
        for _ in 0..3 {
            let edge = ((entry >> offset) & 0xF) as usize;
            offset += 4;
            mesh.positions.push(edge_crossing(corner_values, edge, cell));
        }
        let a = mesh.positions[base as usize];
        let b = mesh.positions[base as usize + 1];
        let c = mesh.positions[base as usize + 2];
        let normal = (c - b).cross(a - b).normalize_or_zero();
        mesh.normals.extend([normal; 3]);
        mesh.indices.extend([base, base + 1, base + 2]);
    }
}

/// Interpolated position where the surface crosses `edge` of the cell at
/// `cell`, in grid index space.
#[inline]
fn edge_crossing(corner_values: &[f32; 8], edge: usize, cell: (usize, usize, usize)) -> Vec3 {
    let (ca, cb) = EDGE_CORNERS[edge];
    let va = corner_values[ca];
    let vb = corner_values[cb];
    let t = va / (va - vb);

    let (oi, oj, ok) = corner_offset(ca);
    let mut p = Vec3::new(
        (cell.0 + oi) as f32,
        (cell.1 + oj) as f32,
        (cell.2 + ok) as f32,
    );
    p[edge / 4] += t;
    p
}

/// Triangle configurations for the 256 cube cases, from the public-domain
/// MarchingCubeCpp tables.
///
/// Each entry packs a `u64`: bits `[3:0]` hold the triangle count (0-5) and
/// each following 4-bit group names the cell edge (0-11) supplying the next
/// triangle vertex.
#[rustfmt::skip]
static CELL_TRIANGLES: [u64; 256] = [
    0, 33793, 36945, 159668546,
    18961, 144771090, 5851666, 595283255635,
    20913, 67640146, 193993474, 655980856339,
    88782242, 736732689667, 797430812739, 194554754,
    26657, 104867330, 136709522, 298069416227,
    109224258, 8877909667, 318136408323, 1567994331701604,
    189884450, 350847647843, 559958167731, 3256298596865604,
    447393122899, 651646838401572, 2538311371089956, 737032694307,
    29329, 43484162, 91358498, 374810899075,
    158485010, 178117478419, 88675058979, 433581536604804,
    158486962, 649105605635, 4866906995, 3220959471609924,
    649165714851, 3184943915608436, 570691368417972, 595804498035,
    124295042, 431498018963, 508238522371, 91518530,
    318240155763, 291789778348404, 1830001131721892, 375363605923,
    777781811075, 1136111028516116, 3097834205243396, 508001629971,
    2663607373704004, 680242583802939237, 333380770766129845, 179746658,
    42545, 138437538, 93365810, 713842853011,
    73602098, 69575510115, 23964357683, 868078761575828,
    28681778, 713778574611, 250912709379, 2323825233181284,
    302080811955, 3184439127991172, 1694042660682596, 796909779811,
    176306722, 150327278147, 619854856867, 1005252473234484,
    211025400963, 36712706, 360743481544788, 150627258963,
    117482600995, 1024968212107700, 2535169275963444, 4734473194086550421,
    628107696687956, 9399128243, 5198438490361643573, 194220594,
    104474994, 566996932387, 427920028243, 2014821863433780,
    492093858627, 147361150235284, 2005882975110676, 9671606099636618005,
    777701008947, 3185463219618820, 482784926917540, 2900953068249785909,
    1754182023747364, 4274848857537943333, 13198752741767688709, 2015093490989156,
    591272318771, 2659758091419812, 1531044293118596, 298306479155,
    408509245114388, 210504348563, 9248164405801223541, 91321106,
    2660352816454484, 680170263324308757, 8333659837799955077, 482966828984116,
    4274926723105633605, 3184439197724820, 192104450, 15217,
    45937, 129205250, 129208402, 529245952323,
    169097138, 770695537027, 382310500883, 2838550742137652,
    122763026, 277045793139, 81608128403, 1991870397907988,
    362778151475, 2059003085103236, 2132572377842852, 655681091891,
    58419234, 239280858627, 529092143139, 1568257451898804,
    447235128115, 679678845236084, 2167161349491220, 1554184567314086709,
    165479003923, 1428768988226596, 977710670185060, 10550024711307499077,
    1305410032576132, 11779770265620358997, 333446212255967269, 978168444447012,
    162736434, 35596216627, 138295313843, 891861543990356,
    692616541075, 3151866750863876, 100103641866564, 6572336607016932133,
    215036012883, 726936420696196, 52433666, 82160664963,
    2588613720361524, 5802089162353039525, 214799000387, 144876322,
    668013605731, 110616894681956, 1601657732871812, 430945547955,
    3156382366321172, 7644494644932993285, 3928124806469601813, 3155990846772900,
    339991010498708, 10743689387941597493, 5103845475, 105070898,
    3928064910068824213, 156265010, 1305138421793636, 27185,
    195459938, 567044449971, 382447549283, 2175279159592324,
    443529919251, 195059004769796, 2165424908404116, 1554158691063110021,
    504228368803, 1436350466655236, 27584723588724, 1900945754488837749,
    122971970, 443829749251, 302601798803, 108558722,
    724700725875, 43570095105972, 2295263717447940, 2860446751369014181,
    2165106202149444, 69275726195, 2860543885641537797, 2165106320445780,
    2280890014640004, 11820349930268368933, 8721082628082003989, 127050770,
    503707084675, 122834978, 2538193642857604, 10129,
    801441490467, 2923200302876740, 1443359556281892, 2901063790822564949,
    2728339631923524, 7103874718248233397, 12775311047932294245, 95520290,
    2623783208098404, 1900908618382410757, 137742672547, 2323440239468964,
    362478212387, 727199575803140, 73425410, 34337,
    163101314, 668566030659, 801204361987, 73030562,
    591509145619, 162574594, 100608342969108, 5553,
    724147968595, 1436604830452292, 176259090, 42001,
    143955266, 2385, 18433, 0,
];
