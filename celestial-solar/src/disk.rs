//! Where a map sits relative to the solar disk.
//!
//! Radii are angular distances from disk centre in units of the map's
//! apparent solar radius, so `1.0` is the limb. The predicates treat a pixel
//! exactly on the limb as neither on nor off the disk.

use celestial_coords::SolarCoordinate;
use celestial_core::Angle;
use celestial_images::SolarMap;
use celestial_wcs::PixelCoord;

/// Every pixel centre of the map in row-major order.
pub fn pixel_indices(map: &SolarMap) -> Vec<PixelCoord> {
    map.dimensions().pixels()
}

/// World coordinate of every pixel, row-major.
pub fn world_coordinates(map: &SolarMap) -> Vec<SolarCoordinate> {
    map.pixel_to_world(&pixel_indices(map))
}

/// Distance of every pixel from disk centre, in solar radii.
///
/// `scale` is the angular size of one solar radius; the map's `rsun_obs`
/// is used when it is `None`.
pub fn pixel_radii(map: &SolarMap, scale: Option<Angle>) -> Vec<f64> {
    radii_of(map, &pixel_indices(map), scale)
}

fn radii_of(map: &SolarMap, pixels: &[PixelCoord], scale: Option<Angle>) -> Vec<f64> {
    let rsun = scale.unwrap_or_else(|| map.rsun_obs()).radians();
    map.pixel_to_world(pixels)
        .iter()
        .map(|c| match c.as_helioprojective() {
            Some(hpc) => hpc.radial_angle().radians() / rsun,
            None => f64::NAN,
        })
        .collect()
}

/// The pixels along the four sides of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEdges {
    /// Last row, `y = ny - 1`, left to right.
    pub top: Vec<PixelCoord>,
    /// First row, `y = 0`, left to right.
    pub bottom: Vec<PixelCoord>,
    /// First column, `x = 0`, bottom to top.
    pub left: Vec<PixelCoord>,
    /// Last column, `x = nx - 1`, bottom to top.
    pub right: Vec<PixelCoord>,
}

impl MapEdges {
    /// All edge pixels, sides concatenated; corners appear twice.
    pub fn all(&self) -> Vec<PixelCoord> {
        self.left
            .iter()
            .chain(&self.right)
            .chain(&self.top)
            .chain(&self.bottom)
            .copied()
            .collect()
    }
}

pub fn map_edges(map: &SolarMap) -> MapEdges {
    let dims = map.dimensions();
    let (nx, ny) = (dims.width(), dims.height());
    let top_y = ny.saturating_sub(1) as f64;
    let right_x = nx.saturating_sub(1) as f64;

    MapEdges {
        top: (0..nx).map(|x| PixelCoord::new(x as f64, top_y)).collect(),
        bottom: (0..nx).map(|x| PixelCoord::new(x as f64, 0.0)).collect(),
        left: (0..ny).map(|y| PixelCoord::new(0.0, y as f64)).collect(),
        right: (0..ny).map(|y| PixelCoord::new(right_x, y as f64)).collect(),
    }
}

/// True when every edge pixel lies beyond the limb, so the whole disk is in
/// the field of view.
pub fn contains_full_disk(map: &SolarMap) -> bool {
    let edges = map_edges(map).all();
    !edges.is_empty() && radii_of(map, &edges, None).iter().all(|&r| r > 1.0)
}

pub fn is_all_off_disk(map: &SolarMap) -> bool {
    pixel_radii(map, None).iter().all(|&r| r > 1.0)
}

pub fn is_all_on_disk(map: &SolarMap) -> bool {
    pixel_radii(map, None).iter().all(|&r| r < 1.0)
}

/// True when at least one pixel is on the disk and at least one is off it.
pub fn contains_limb(map: &SolarMap) -> bool {
    let radii = pixel_radii(map, None);
    radii.iter().any(|&r| r < 1.0) && radii.iter().any(|&r| r > 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskCoverage {
    OffDisk,
    OnDisk,
    Limb,
}

/// Single-pass classification. Maps with pixels exactly on the limb and none
/// on either side count as `Limb`.
pub fn disk_coverage(map: &SolarMap) -> DiskCoverage {
    let radii = pixel_radii(map, None);
    if radii.iter().all(|&r| r > 1.0) {
        DiskCoverage::OffDisk
    } else if radii.iter().all(|&r| r < 1.0) {
        DiskCoverage::OnDisk
    } else {
        DiskCoverage::Limb
    }
}
