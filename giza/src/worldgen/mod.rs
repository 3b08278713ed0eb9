//! World generation module.
//!
//! PARITY: For a given configuration the generated world is reproducible bit for bit,
//! this requires the PRNG stream to be consumed in exactly the same order, so the
//! generation is strictly sequential and must never be parallelized.

use glam::IVec3;
use tracing::{debug, instrument};

use crate::config::{ConfigError, WorldConfig};
use crate::height::HeightField;
use crate::util::Mulberry32;
use crate::world::World;


// Feature generators.
mod tree;
mod house;
mod pyramid;
mod sphinx;
mod causeway;

pub use tree::PalmTreeGenerator;
pub use house::HouseGenerator;
pub use pyramid::PyramidGenerator;
pub use sphinx::SphinxGenerator;
pub use causeway::CausewayGenerator;

// Terrain painter.
mod terrain;
pub use terrain::{TerrainGenerator, Band};


/// A trait common to all feature generators, appending the placements of a structure
/// anchored at the given position. Generators that need randomness draw from the given
/// stream, the others must leave it untouched.
pub trait FeatureGenerator {

    /// Generate the feature at the given position in the world with given RNG.
    fn generate(&mut self, world: &mut World, pos: IVec3, rand: &mut Mulberry32);

}


/// The world composer, owning the configuration and the PRNG stream of a generation.
/// The stream is never reset implicitly: composing twice without [`Self::reseed`]
/// continues the stream and gives a different world.
#[derive(Debug, Clone)]
pub struct WorldComposer {
    config: WorldConfig,
    rand: Mulberry32,
}

impl WorldComposer {

    /// Create a composer after validating the given configuration.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rand: Mulberry32::new(config.seed),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Get the current state of the PRNG stream.
    #[inline]
    pub fn rand(&self) -> &Mulberry32 {
        &self.rand
    }

    /// Restart the PRNG stream from the configured seed.
    pub fn reseed(&mut self) {
        self.rand = Mulberry32::new(self.config.seed);
    }

    /// Generate the whole world: the terrain with its palms and houses, then the
    /// pyramids, the Sphinx and the causeway, in this order.
    #[instrument(skip_all, fields(seed = self.config.seed))]
    pub fn compose(&mut self) -> World {

        let config = &self.config;
        let field = HeightField::new(config.nile_edge);
        let columns = config.world_width as usize * config.world_depth as usize;
        let mut world = World::with_capacity(columns * 2);

        TerrainGenerator::new(config).generate(&mut world, &mut self.rand);
        debug!("terrain: {} placements", world.len());

        for site in &config.pyramids {
            let before = world.len();
            let pos = IVec3::new(site.center.x, 0, site.center.y);
            PyramidGenerator::new(site.base_size, field).generate(&mut world, pos, &mut self.rand);
            debug!("pyramid at {}/{}: {} placements", site.center.x, site.center.y, world.len() - before);
        }

        let before = world.len();
        SphinxGenerator::new().generate(&mut world, config.sphinx_anchor, &mut self.rand);
        debug!("sphinx: {} placements", world.len() - before);

        let before = world.len();
        let causeway = config.causeway;
        CausewayGenerator::new(causeway.to_x, field)
            .generate(&mut world, IVec3::new(causeway.from_x, 0, causeway.z), &mut self.rand);
        debug!("causeway: {} placements", world.len() - before);

        world

    }

}


/// Validate the configuration and generate its world from a fresh PRNG stream.
pub fn generate_world(config: &WorldConfig) -> Result<World, ConfigError> {
    Ok(WorldComposer::new(config.clone())?.compose())
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::voxel::Material;

    #[test]
    fn deterministic() {
        let config = WorldConfig::default();
        let a = generate_world(&config).unwrap();
        let b = generate_world(&config).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a, b);
    }

    #[test]
    fn golden_counts() {

        let world = generate_world(&WorldConfig::default()).unwrap();

        assert_eq!(world.len(), 28672);
        assert_eq!(world.count(Material::Sand), 8863);
        assert_eq!(world.count(Material::Water), 5900);
        assert_eq!(world.count(Material::Vegetation), 7348);
        assert_eq!(world.count(Material::Limestone), 4360);
        assert_eq!(world.count(Material::Gold), 76);
        assert_eq!(world.count(Material::Stone), 1855);
        assert_eq!(world.count(Material::Mudbrick), 255);
        assert_eq!(world.count(Material::Torch), 15);

        assert_eq!(world.as_slice()[0].pos, IVec3::new(-70, 9, -50));
        assert_eq!(world.as_slice()[0].material, Material::Sand);

    }

    #[test]
    fn golden_torches() {

        let world = generate_world(&WorldConfig::default()).unwrap();
        let torches: Vec<IVec3> = world.batches().get(Material::Torch).to_vec();

        let expected = [
            (19, -49), (19, -41), (19, 18), (19, 19), (19, 45),
            (20, -49), (20, -33), (20, 15), (20, 36), (21, -33),
            (21, 44), (21, 45), (22, -45), (22, 29), (22, 49),
        ].map(|(x, z)| IVec3::new(x, 2, z));

        assert_eq!(torches, expected);

    }

    #[test]
    fn every_category_present() {
        let world = generate_world(&WorldConfig::default()).unwrap();
        assert!(!world.is_empty());
        let batches = world.batches();
        for material in [Material::Gold, Material::Water, Material::Torch] {
            assert!(!batches.get(material).is_empty(), "no {} generated", material.name());
        }
    }

    #[test]
    fn river_exclusive() {

        let config = WorldConfig::default();
        let world = generate_world(&config).unwrap();
        let river = config.nile_edge + 1..config.nile_edge + config.river_width;

        for voxel in world.iter() {
            if river.contains(&voxel.pos.x) {
                assert!(!matches!(voxel.material, Material::Sand | Material::Vegetation),
                    "{} in the river at {}", voxel.material.name(), voxel.pos);
            }
        }

    }

    #[test]
    fn stream_continues_until_reseed() {

        let mut composer = WorldComposer::new(WorldConfig::default()).unwrap();
        let first = composer.compose();
        assert_ne!(*composer.rand(), Mulberry32::new(12345));

        let second = composer.compose();
        assert_ne!(first, second);

        composer.reseed();
        let third = composer.compose();
        assert_eq!(first, third);

    }

    #[test]
    fn landmarks_after_terrain() {

        let config = WorldConfig::default();
        let mut composer = WorldComposer::new(config.clone()).unwrap();
        let world = composer.compose();

        // Terrain ends with the last east bank column, landmarks follow.
        let terrain_len = {
            let mut rand = Mulberry32::new(config.seed);
            let mut terrain = World::new();
            TerrainGenerator::new(&config).generate(&mut terrain, &mut rand);
            assert_eq!(rand, *composer.rand());
            terrain.len()
        };

        let landmarks = &world.as_slice()[terrain_len..];
        assert_eq!(landmarks.len(), 2025 + 1681 + 729 + 264 + 168);
        assert_eq!(landmarks.last().unwrap().material, Material::Stone);

    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut config = WorldConfig::default();
        config.pyramids.push(crate::config::PyramidSite::new(0, 0, 1));
        assert_eq!(generate_world(&config), Err(ConfigError::PyramidTooSmall { index: 3, base_size: 1 }));
    }

    #[test]
    fn far_coordinates_fail_fast() {

        let config = WorldConfig { nile_edge: i32::MAX - 10, ..WorldConfig::default() };
        assert!(matches!(generate_world(&config), Err(ConfigError::CoordinateOutOfRange { name: "nile edge", .. })));

        let mut config = WorldConfig::default();
        config.pyramids[0].center.x = i32::MIN + 5;
        assert!(matches!(WorldComposer::new(config), Err(ConfigError::CoordinateOutOfRange { name: "pyramid center x", .. })));

    }

}
