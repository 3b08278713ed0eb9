//! Covered causeway generation.

use glam::IVec3;

use crate::height::HeightField;
use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::FeatureGenerator;


/// Distance between two pairs of pillars.
const PILLAR_SPACING: i32 = 3;


/// A generator for a 2-wide roofed stone corridor running along X. The anchor gives the
/// start X and the corridor Z, the generator holds the other end. The corridor follows
/// the desert ground. Makes no random draw.
pub struct CausewayGenerator {
    /// X of the other end, may be on either side of the anchor.
    end_x: i32,
    field: HeightField,
}

impl CausewayGenerator {

    #[inline]
    pub fn new(end_x: i32, field: HeightField) -> Self {
        Self {
            end_x,
            field,
        }
    }

}

impl FeatureGenerator for CausewayGenerator {

    fn generate(&mut self, world: &mut World, pos: IVec3, _rand: &mut Mulberry32) {

        let start = pos.x.min(self.end_x);
        let end = pos.x.max(self.end_x);
        let z = pos.z;

        for x in start..=end {

            let y = self.field.desert_rise(x, z);

            world.push(IVec3::new(x, y, z), Material::Stone);
            world.push(IVec3::new(x, y, z + 1), Material::Stone);

            world.push(IVec3::new(x, y + 2, z), Material::Stone);
            world.push(IVec3::new(x, y + 2, z + 1), Material::Stone);

            if x % PILLAR_SPACING == 0 {
                world.push(IVec3::new(x, y + 1, z - 1), Material::Stone);
                world.push(IVec3::new(x, y + 1, z + 2), Material::Stone);
            }

        }

    }

}
