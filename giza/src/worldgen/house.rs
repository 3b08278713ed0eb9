//! Worker house generation.

use glam::IVec3;

use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::FeatureGenerator;


/// Footprint edge of a house.
const SIZE: i32 = 3;
/// Number of layers, floor included.
const LAYERS: i32 = 2;


/// A generator for the mudbrick huts of the workers' village, a hollow 3x3 box with a
/// torch burning outside the eastern wall. Makes no random draw.
pub struct HouseGenerator(());

impl HouseGenerator {
    #[inline]
    pub fn new() -> Self {
        Self(())
    }
}

impl FeatureGenerator for HouseGenerator {

    fn generate(&mut self, world: &mut World, pos: IVec3, _rand: &mut Mulberry32) {

        for dx in 0..SIZE {
            for dz in 0..SIZE {
                for dy in 0..LAYERS {
                    let wall = dx == 0 || dx == SIZE - 1 || dz == 0 || dz == SIZE - 1;
                    if dy == 0 || wall {
                        world.push(pos + IVec3::new(dx, dy, dz), Material::Mudbrick);
                    }
                }
            }
        }

        world.push(pos + IVec3::new(SIZE, 1, 1), Material::Torch);

    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn hollow_box() {

        let mut world = World::new();
        let mut rand = Mulberry32::new(12345);
        let pos = IVec3::new(19, 1, -49);
        HouseGenerator::new().generate(&mut world, pos, &mut rand);

        assert_eq!(rand, Mulberry32::new(12345));
        assert_eq!(world.len(), 18);
        assert_eq!(world.count(Material::Mudbrick), 17);

        // The upper center is empty.
        assert!(world.iter().all(|v| v.pos != pos + IVec3::new(1, 1, 1)));
        assert!(world.iter().any(|v| v.pos == pos + IVec3::new(1, 0, 1)));

        let torch = world.as_slice().last().unwrap();
        assert_eq!(torch.material, Material::Torch);
        assert_eq!(torch.pos, IVec3::new(22, 2, -48));

    }

}
