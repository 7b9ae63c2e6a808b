//! Solar differential rotation.
//!
//! The Sun's surface rotates faster at the equator than near the poles. This
//! crate applies that motion to single coordinates and to whole image maps.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`diffrot`] | rotation-rate models and the longitude shift over a duration |
//! | [`rotate`] | rotating coordinates to a new observer and time |
//! | [`disk`] | pixel radii, map edges and on/off-disk tests |
//! | [`warp`] | resampling a map to a new observer and time |
//!
//! Points that have no place on the visible Sun are `None`, never NaN-filled
//! coordinates. Only the raw data buffer of a warped map holds NaN, and only
//! in cells whose mask is set.
//!
//! Logging goes through [`tracing`]; install a subscriber to see it.

pub mod diffrot;
pub mod disk;
pub mod errors;
pub mod rotate;
pub mod warp;

pub use diffrot::{diff_rot, diff_rot_many, FrameTime, RotationModel, RotationOptions};
pub use disk::{
    contains_full_disk, contains_limb, disk_coverage, is_all_off_disk, is_all_on_disk,
    map_edges, pixel_indices, pixel_radii, world_coordinates, DiskCoverage, MapEdges,
};
pub use errors::{SolarError, SolarResult};
pub use rotate::{solar_rotate_coordinate, solar_rotate_coordinates};
pub use warp::diffrot_map;
