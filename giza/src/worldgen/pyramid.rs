//! Stepped pyramid generation.

use glam::IVec3;

use crate::height::HeightField;
use crate::util::Mulberry32;
use crate::voxel::Material;
use crate::world::World;

use super::FeatureGenerator;


/// Layers with a cross-section below this size are filled, larger ones only get their
/// perimeter.
const SOLID_BELOW: i32 = 4;
/// Number of gold layers at the apex.
const CAPSTONE_LAYERS: i32 = 2;


/// A generator for a stepped pyramid of limestone with a gold capstone. The anchor's X
/// and Z give the center, its Y is ignored: the base sits on the desert ground under
/// the center, never below 0. Makes no random draw.
pub struct PyramidGenerator {
    /// Edge of the base layer.
    base_size: i32,
    /// Height field used to find the ground level.
    field: HeightField,
}

impl PyramidGenerator {

    #[inline]
    pub fn new(base_size: i32, field: HeightField) -> Self {
        debug_assert!(base_size >= 2, "degenerate pyramid");
        Self {
            base_size,
            field,
        }
    }

    /// Number of layers.
    #[inline]
    pub fn height(&self) -> i32 {
        self.base_size / 2
    }

    /// Edge of the cross-section at the given layer, shrinking by 2 per layer.
    #[inline]
    pub fn layer_size(&self, layer: i32) -> i32 {
        self.base_size - layer * 2
    }

    /// Material of the given layer.
    #[inline]
    pub fn layer_material(&self, layer: i32) -> Material {
        if layer >= self.height() - CAPSTONE_LAYERS {
            Material::Gold
        } else {
            Material::Limestone
        }
    }

    /// Ground level of the base layer for a pyramid centered at the given column.
    #[inline]
    pub fn ground_level(&self, x: i32, z: i32) -> i32 {
        self.field.desert_rise(x, z).max(0)
    }

}

impl FeatureGenerator for PyramidGenerator {

    fn generate(&mut self, world: &mut World, pos: IVec3, _rand: &mut Mulberry32) {

        let ground = self.ground_level(pos.x, pos.z);

        for layer in 0..self.height() {

            let size = self.layer_size(layer);
            let half = size / 2;
            let solid = size < SOLID_BELOW;
            let material = self.layer_material(layer);

            for dx in -half..=half {
                for dz in -half..=half {
                    if solid || dx.abs() == half || dz.abs() == half {
                        world.push(IVec3::new(pos.x + dx, ground + layer, pos.z + dz), material);
                    }
                }
            }

        }

    }

}
