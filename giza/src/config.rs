//! Generation constants of the plateau, grouped as a validated configuration.

use glam::{IVec2, IVec3};
use thiserror::Error;


/// Largest magnitude accepted for any configured coordinate or length. Generators add
/// small offsets and take differences of coordinates, this keeps all of it far from the
/// 32-bit limits.
pub const MAX_COORDINATE: i32 = 1 << 20;


/// A pyramid to place, the center is given as `(x, z)` and the ground level is found
/// from the height field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidSite {
    pub center: IVec2,
    pub base_size: i32,
}

impl PyramidSite {

    #[inline]
    pub const fn new(x: i32, z: i32, base_size: i32) -> Self {
        Self { center: IVec2::new(x, z), base_size }
    }

}

/// The covered causeway, running along X at a fixed Z. The endpoints may be given in
/// any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CausewaySpan {
    pub from_x: i32,
    pub to_x: i32,
    pub z: i32,
}

/// Complete configuration of a world generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    /// Seed of the PRNG stream.
    pub seed: i32,
    /// Extent along X (east is +X), centered on 0.
    pub world_width: u32,
    /// Extent along Z, centered on 0.
    pub world_depth: u32,
    /// X coordinate of the western river bank.
    pub nile_edge: i32,
    pub river_width: i32,
    /// Pyramids, placed in order after the terrain.
    pub pyramids: Vec<PyramidSite>,
    pub sphinx_anchor: IVec3,
    pub causeway: CausewaySpan,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            world_width: 140,
            world_depth: 100,
            nile_edge: 30,
            river_width: 40,
            pyramids: vec![
                // Khufu, Khafre, Menkaure
                PyramidSite::new(-20, -10, 44),
                PyramidSite::new(-50, 25, 40),
                PyramidSite::new(-70, 50, 26),
            ],
            sphinx_anchor: IVec3::new(15, 0, -5),
            causeway: CausewaySpan { from_x: 15, to_x: -20, z: -5 },
        }
    }
}

impl WorldConfig {

    /// Check that this configuration describes a non-degenerate world.
    pub fn validate(&self) -> Result<(), ConfigError> {

        let (width, depth) = (self.world_width, self.world_depth);
        if width == 0 || depth == 0 {
            return Err(ConfigError::EmptyExtent { width, depth });
        }
        if width % 2 != 0 || depth % 2 != 0 {
            return Err(ConfigError::OddExtent { width, depth });
        }

        check_coordinate("world width", width as i64 / 2)?;
        check_coordinate("world depth", depth as i64 / 2)?;

        if self.river_width < 0 {
            return Err(ConfigError::NegativeRiverWidth(self.river_width));
        }

        check_coordinate("nile edge", self.nile_edge as i64)?;
        check_coordinate("river width", self.river_width as i64)?;

        for (index, site) in self.pyramids.iter().enumerate() {
            if site.base_size < 2 {
                return Err(ConfigError::PyramidTooSmall { index, base_size: site.base_size });
            }
            check_coordinate("pyramid center x", site.center.x as i64)?;
            check_coordinate("pyramid center z", site.center.y as i64)?;
            check_coordinate("pyramid base size", site.base_size as i64)?;
        }

        check_coordinate("sphinx anchor x", self.sphinx_anchor.x as i64)?;
        check_coordinate("sphinx anchor y", self.sphinx_anchor.y as i64)?;
        check_coordinate("sphinx anchor z", self.sphinx_anchor.z as i64)?;

        check_coordinate("causeway start x", self.causeway.from_x as i64)?;
        check_coordinate("causeway end x", self.causeway.to_x as i64)?;
        check_coordinate("causeway z", self.causeway.z as i64)?;

        Ok(())

    }

    /// Half-open X range of the terrain columns.
    #[inline]
    pub fn x_range(&self) -> std::ops::Range<i32> {
        let half = (self.world_width / 2) as i32;
        -half..half
    }

    /// Half-open Z range of the terrain columns.
    #[inline]
    pub fn z_range(&self) -> std::ops::Range<i32> {
        let half = (self.world_depth / 2) as i32;
        -half..half
    }

}


#[inline]
fn check_coordinate(name: &'static str, value: i64) -> Result<(), ConfigError> {
    if value.abs() > MAX_COORDINATE as i64 {
        Err(ConfigError::CoordinateOutOfRange { name, value })
    } else {
        Ok(())
    }
}


/// Error returned when a configuration would produce degenerate geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The world extent {width}x{depth} is empty.")]
    EmptyExtent { width: u32, depth: u32 },
    #[error("The world extent {width}x{depth} must be even to be centered on integer coordinates.")]
    OddExtent { width: u32, depth: u32 },
    #[error("The river width ({0}) is negative.")]
    NegativeRiverWidth(i32),
    #[error("The pyramid #{index} has a base size of {base_size}, at least 2 is required.")]
    PyramidTooSmall { index: usize, base_size: i32 },
    #[error("The {name} ({value}) is out of the supported range of +/-{MAX_COORDINATE}.")]
    CoordinateOutOfRange { name: &'static str, value: i64 },
}
