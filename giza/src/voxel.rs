//! Voxel placements and their materials, the fundamental unit of the generated world.

use glam::{IVec3, Vec3};


/// The material of a voxel. The renderer draws one instance set per material, so the
/// hints below describe how a whole batch looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Sand,
    Water,
    Vegetation,
    Limestone,
    Gold,
    /// Also used as palm bark.
    Stone,
    Mudbrick,
    Torch,
}

impl Material {

    /// All materials, in batch order.
    pub const ALL: [Self; 8] = [
        Self::Sand,
        Self::Water,
        Self::Vegetation,
        Self::Limestone,
        Self::Gold,
        Self::Stone,
        Self::Mudbrick,
        Self::Torch,
    ];

    /// Lowercase name of the material.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sand => "sand",
            Self::Water => "water",
            Self::Vegetation => "vegetation",
            Self::Limestone => "limestone",
            Self::Gold => "gold",
            Self::Stone => "stone",
            Self::Mudbrick => "mudbrick",
            Self::Torch => "torch",
        }
    }

    /// Base color of the material as `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            Self::Sand => 0xeebb66,
            Self::Water => 0x2288aa,
            Self::Vegetation => 0x448822,
            Self::Limestone => 0xeeeeee,
            Self::Gold => 0xffcc00,
            Self::Stone => 0x998877,
            Self::Mudbrick => 0x885533,
            Self::Torch => 0xff5500,
        }
    }

    pub fn roughness(self) -> f32 {
        match self {
            Self::Sand | Self::Mudbrick => 0.9,
            Self::Vegetation | Self::Stone => 0.8,
            Self::Limestone => 0.3,
            Self::Water | Self::Gold => 0.1,
            Self::Torch => 1.0,
        }
    }

    pub fn metalness(self) -> f32 {
        match self {
            Self::Gold => 1.0,
            Self::Limestone => 0.1,
            _ => 0.0,
        }
    }

    /// Emissive color and intensity, if the material glows.
    pub fn emissive(self) -> Option<(u32, f32)> {
        match self {
            Self::Gold => Some((0xffaa00, 0.2)),
            Self::Torch => Some((0xff5500, 2.0)),
            _ => None,
        }
    }

    /// Water is drawn translucent with an opacity of 0.8.
    pub fn is_transparent(self) -> bool {
        self == Self::Water
    }

    pub fn casts_shadow(self) -> bool {
        !matches!(self, Self::Water | Self::Torch)
    }

    pub fn receives_shadow(self) -> bool {
        !matches!(self, Self::Gold | Self::Torch)
    }

    /// Dimensions of the instanced box.
    pub fn box_size(self) -> Vec3 {
        match self {
            Self::Water => Vec3::new(1.0, 0.8, 1.0),
            Self::Torch => Vec3::new(0.3, 0.5, 0.3),
            _ => Vec3::ONE,
        }
    }

    /// Offset from the integer grid position to the rendered center. Water sits half a
    /// voxel below its cell so that the river surface is below the banks.
    pub fn render_offset(self) -> Vec3 {
        match self {
            Self::Water => Vec3::new(0.0, -0.5, 0.0),
            _ => Vec3::ZERO,
        }
    }

}


/// A single voxel of the world, immutable once created. Several placements may share
/// the same position, they are all drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelPlacement {
    pub pos: IVec3,
    pub material: Material,
}

impl VoxelPlacement {

    #[inline]
    pub fn new(pos: IVec3, material: Material) -> Self {
        Self { pos, material }
    }

    /// World-space center of the rendered instance.
    pub fn render_position(self) -> Vec3 {
        self.pos.as_vec3() + self.material.render_offset()
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn water_renders_half_below() {
        let surface = VoxelPlacement::new(IVec3::new(40, 0, 3), Material::Water);
        let deep = VoxelPlacement::new(IVec3::new(40, -1, 3), Material::Water);
        assert_eq!(surface.render_position(), Vec3::new(40.0, -0.5, 3.0));
        assert_eq!(deep.render_position(), Vec3::new(40.0, -1.5, 3.0));
    }

    #[test]
    fn solid_materials_render_on_grid() {
        for material in Material::ALL {
            if material != Material::Water {
                let voxel = VoxelPlacement::new(IVec3::new(-3, 7, 2), material);
                assert_eq!(voxel.render_position(), Vec3::new(-3.0, 7.0, 2.0));
            }
        }
    }

    #[test]
    fn renderer_hints() {

        let colors = Material::ALL.map(Material::color);
        assert_eq!(colors, [0xeebb66, 0x2288aa, 0x448822, 0xeeeeee, 0xffcc00, 0x998877, 0x885533, 0xff5500]);

        let roughness = Material::ALL.map(Material::roughness);
        assert_eq!(roughness, [0.9, 0.1, 0.8, 0.3, 0.1, 0.8, 0.9, 1.0]);

        let metalness = Material::ALL.map(Material::metalness);
        assert_eq!(metalness, [0.0, 0.0, 0.0, 0.1, 1.0, 0.0, 0.0, 0.0]);

        assert_eq!(Material::Gold.emissive(), Some((0xffaa00, 0.2)));
        assert_eq!(Material::Torch.emissive(), Some((0xff5500, 2.0)));
        assert_eq!(Material::ALL.iter().filter(|m| m.emissive().is_some()).count(), 2);

        assert!(Material::Water.is_transparent());
        assert_eq!(Material::ALL.iter().filter(|m| m.is_transparent()).count(), 1);

        for material in Material::ALL {
            let casts = !matches!(material, Material::Water | Material::Torch);
            let receives = !matches!(material, Material::Gold | Material::Torch);
            assert_eq!(material.casts_shadow(), casts, "{}", material.name());
            assert_eq!(material.receives_shadow(), receives, "{}", material.name());
        }

        assert_eq!(Material::Water.box_size(), Vec3::new(1.0, 0.8, 1.0));
        assert_eq!(Material::Torch.box_size(), Vec3::new(0.3, 0.5, 0.3));
        assert_eq!(Material::Limestone.box_size(), Vec3::ONE);

    }

    #[test]
    fn names_are_distinct() {
        for (i, a) in Material::ALL.iter().enumerate() {
            for b in &Material::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

}
