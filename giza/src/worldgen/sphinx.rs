//! The Great Sphinx, hand-sculpted geometry facing east.

use glam::IVec3;

use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::FeatureGenerator;


/// A generator for the Sphinx. The anchor is the front of the body, the statue extends
/// westward (-X) from it and faces the river. Makes no random draw.
pub struct SphinxGenerator(());

impl SphinxGenerator {
    #[inline]
    pub fn new() -> Self {
        Self(())
    }
}

impl FeatureGenerator for SphinxGenerator {

    fn generate(&mut self, world: &mut World, pos: IVec3, _rand: &mut Mulberry32) {

        // Base slab under the paws and the body, 12 long and 6 wide.
        for i in 0..12 {
            for j in 0..6 {
                world.push(pos + IVec3::new(-i, 0, j - 3), Material::Sand);
            }
        }

        // Paws stretched out in front.
        for paw in [IVec3::new(1, 0, -2), IVec3::new(2, 0, -2), IVec3::new(1, 0, 2), IVec3::new(2, 0, 2)] {
            world.push(pos + paw, Material::Sand);
        }

        // Lion body, 4 layers above the slab.
        for i in 0..10 {
            for j in 0..4 {
                for k in 1..5 {
                    world.push(pos + IVec3::new(-i, k, j - 2), Material::Sand);
                }
            }
        }

        // Human head above the front of the body.
        let head = pos + IVec3::new(-1, 5, 0);
        for hx in 0..3 {
            for hz in 0..3 {
                for hy in 0..3 {
                    world.push(head + IVec3::new(-hx, hy, hz - 1), Material::Sand);
                }
            }
        }

        // Nemes headdress ornament.
        world.push(head + IVec3::new(0, 3, 0), Material::Gold);

    }

}
