//! Terrain and river painting.
//!
//! PARITY: The columns are visited X-major then Z, and a random value is drawn only
//! when the branch that needs it is entered. Changing either the visit order or the
//! position of a draw shifts the whole stream and every following decision.

use std::ops::Range;

use glam::IVec3;
use tracing::trace;

use crate::config::WorldConfig;
use crate::height::HeightField;
use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::{FeatureGenerator, HouseGenerator, PalmTreeGenerator};


/// Width of the fertile belt on the western bank.
const FERTILE_WIDTH: i32 = 15;
/// Palms grow on the western bank only this close to the river.
const PALM_BELT_WIDTH: i32 = 8;
/// Houses are only built this far from the river, or further.
const VILLAGE_MIN_DISTANCE: i32 = 10;

const DEEP_WATER_CHANCE: f64 = 0.5;
const EAST_PALM_CHANCE: f64 = 0.8;
const WEST_PALM_CHANCE: f64 = 0.6;
const HOUSE_CHANCE: f64 = 0.97;


/// The band a terrain column belongs to, from its X coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Open desert on the west, rising away from the river.
    Desert,
    /// Flat fertile land along the western bank.
    WestBank,
    River,
    /// Flat farmland on the east.
    EastBank,
}

/// The terrain painter, covering every column of the world extent exactly once and
/// spawning palms and houses on the banks.
pub struct TerrainGenerator {
    x_range: Range<i32>,
    z_range: Range<i32>,
    river_width: i32,
    /// Also carries the X of the western river bank.
    field: HeightField,
    palm: PalmTreeGenerator,
    house: HouseGenerator,
}

impl TerrainGenerator {

    pub fn new(config: &WorldConfig) -> Self {
        Self {
            x_range: config.x_range(),
            z_range: config.z_range(),
            river_width: config.river_width,
            field: HeightField::new(config.nile_edge),
            palm: PalmTreeGenerator::new_date_palm(),
            house: HouseGenerator::new(),
        }
    }

    /// Classify a column.
    pub fn band(&self, x: i32) -> Band {
        let nile_edge = self.field.nile_edge();
        if x > nile_edge && x < nile_edge + self.river_width {
            Band::River
        } else if x >= nile_edge + self.river_width {
            Band::EastBank
        } else if x > nile_edge - FERTILE_WIDTH {
            Band::WestBank
        } else {
            Band::Desert
        }
    }

    /// Paint the whole extent into the world.
    pub fn generate(&mut self, world: &mut World, rand: &mut Mulberry32) {
        for x in self.x_range.clone() {
            for z in self.z_range.clone() {
                self.generate_column(world, x, z, rand);
            }
        }
    }

    fn generate_column(&mut self, world: &mut World, x: i32, z: i32, rand: &mut Mulberry32) {

        match self.band(x) {
            Band::River => {
                world.push(IVec3::new(x, 0, z), Material::Water);
                if rand.next_f64() > DEEP_WATER_CHANCE {
                    world.push(IVec3::new(x, -1, z), Material::Water);
                }
            }
            Band::EastBank => {
                world.push(IVec3::new(x, 0, z), Material::Vegetation);
                if rand.next_f64() > EAST_PALM_CHANCE {
                    self.spawn_palm(world, IVec3::new(x, 1, z), rand);
                }
            }
            Band::WestBank => {
                let nile_edge = self.field.nile_edge();
                world.push(IVec3::new(x, 0, z), Material::Vegetation);
                if x > nile_edge - PALM_BELT_WIDTH && rand.next_f64() > WEST_PALM_CHANCE {
                    self.spawn_palm(world, IVec3::new(x, 1, z), rand);
                }
                if x < nile_edge - VILLAGE_MIN_DISTANCE && rand.next_f64() > HOUSE_CHANCE {
                    trace!("house at {x}/{z}");
                    self.house.generate(world, IVec3::new(x, 1, z), rand);
                }
            }
            Band::Desert => {
                world.push(IVec3::new(x, self.field.desert_rise(x, z), z), Material::Sand);
            }
        }

    }

    fn spawn_palm(&mut self, world: &mut World, pos: IVec3, rand: &mut Mulberry32) {
        trace!("palm at {}/{}", pos.x, pos.z);
        self.palm.generate(world, pos, rand);
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    fn config(width: u32, depth: u32, nile_edge: i32, river_width: i32) -> WorldConfig {
        WorldConfig {
            world_width: width,
            world_depth: depth,
            nile_edge,
            river_width,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn bands() {
        let terrain = TerrainGenerator::new(&WorldConfig::default());
        assert_eq!(terrain.band(-70), Band::Desert);
        assert_eq!(terrain.band(15), Band::Desert);
        assert_eq!(terrain.band(16), Band::WestBank);
        assert_eq!(terrain.band(30), Band::WestBank);
        assert_eq!(terrain.band(31), Band::River);
        assert_eq!(terrain.band(69), Band::River);
        assert_eq!(terrain.band(70), Band::EastBank);
    }

    #[test]
    fn river_draws_once_per_column() {

        // The whole extent is in the river.
        let config = config(8, 6, -100, 300);
        let mut world = World::new();
        let mut rand = Mulberry32::new(12345);
        TerrainGenerator::new(&config).generate(&mut world, &mut rand);

        let mut expected = Mulberry32::new(12345);
        let mut deep = 0;
        for _ in 0..48 {
            if expected.next_f64() > 0.5 {
                deep += 1;
            }
        }

        assert_eq!(rand, expected);
        assert_eq!(world.count(Material::Water), 48 + deep);
        assert!(world.iter().all(|v| v.pos.y == 0 || v.pos.y == -1));

    }

    #[test]
    fn no_draw_outside_gated_belts() {

        // Columns -1 and 0 are on the western bank, too far for palms and too close
        // for houses.
        let config = config(2, 10, 9, 40);
        let mut world = World::new();
        let mut rand = Mulberry32::new(12345);
        TerrainGenerator::new(&config).generate(&mut world, &mut rand);

        assert_eq!(rand, Mulberry32::new(12345));
        assert_eq!(world.len(), 20);
        assert_eq!(world.count(Material::Vegetation), 20);

    }

    #[test]
    fn desert_follows_height_field() {

        let config = config(20, 20, 200, 40);
        let mut world = World::new();
        let mut rand = Mulberry32::new(12345);
        TerrainGenerator::new(&config).generate(&mut world, &mut rand);

        assert_eq!(rand, Mulberry32::new(12345));
        assert_eq!(world.count(Material::Sand), 400);

        let field = HeightField::new(200);
        let mut iter = world.iter();
        for x in -10..10 {
            for z in -10..10 {
                let voxel = iter.next().unwrap();
                assert_eq!(voxel.pos, IVec3::new(x, field.desert_rise(x, z), z));
            }
        }

    }

}
