//! Palm tree generation.

use glam::IVec3;

use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::FeatureGenerator;


/// Horizontal directions of the fronds, each one gets a leaf at distance 1 on the top
/// layer and at distance 2 one layer below.
const FROND_DIRECTIONS: [IVec3; 8] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
    IVec3::new(1, 0, 1),
    IVec3::new(-1, 0, -1),
    IVec3::new(1, 0, -1),
    IVec3::new(-1, 0, 1),
];


/// A feature generator for date palms, a stone trunk of random height crowned with
/// drooping fronds.
pub struct PalmTreeGenerator {
    /// Minimum trunk height.
    min_height: i32,
    /// Number of possible heights above the minimum.
    height_range: i32,
}

impl PalmTreeGenerator {

    #[inline]
    pub fn new(min_height: i32, height_range: i32) -> Self {
        Self {
            min_height,
            height_range,
        }
    }

    /// The palm of the Nile banks, 4 to 6 voxels tall.
    #[inline]
    pub fn new_date_palm() -> Self {
        Self::new(4, 3)
    }

}

impl FeatureGenerator for PalmTreeGenerator {

    fn generate(&mut self, world: &mut World, pos: IVec3, rand: &mut Mulberry32) {

        let height = self.min_height + rand.next_int_bounded(self.height_range);

        for y in pos.y..pos.y + height {
            world.push(IVec3::new(pos.x, y, pos.z), Material::Stone);
        }

        let top = pos + IVec3::new(0, height, 0);
        for dir in FROND_DIRECTIONS {
            world.push(top + dir, Material::Vegetation);
            world.push(top + dir * 2 - IVec3::Y, Material::Vegetation);
        }

        world.push(top + IVec3::Y, Material::Vegetation);

    }

}
