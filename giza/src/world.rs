//! The generated world, an ordered list of voxel placements.

use std::slice;

use glam::IVec3;
use indexmap::IndexMap;

use crate::voxel::{Material, VoxelPlacement};


/// The complete output of a generation: placements in generation order, terrain first
/// then landmarks. There is no index by position, consumers needing spatial lookups
/// should build their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    voxels: Vec<VoxelPlacement>,
}

impl World {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { voxels: Vec::with_capacity(capacity) }
    }

    /// Append a placement.
    #[inline]
    pub fn push(&mut self, pos: IVec3, material: Material) {
        self.voxels.push(VoxelPlacement::new(pos, material));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, VoxelPlacement> {
        self.voxels.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[VoxelPlacement] {
        &self.voxels
    }

    /// Count the placements of the given material.
    pub fn count(&self, material: Material) -> usize {
        self.voxels.iter().filter(|voxel| voxel.material == material).count()
    }

    /// Group the placements by material for batched drawing. Every material has a
    /// batch, possibly empty, and each batch keeps the generation order.
    pub fn batches(&self) -> MaterialBatches {
        let init = Material::ALL.iter()
            .map(|&material| (material, Vec::new()))
            .collect::<IndexMap<_, _>>();
        let inner = self.voxels.iter().fold(init, |mut batches, voxel| {
            batches[&voxel.material].push(voxel.pos);
            batches
        });
        MaterialBatches { inner }
    }

}

impl<'a> IntoIterator for &'a World {

    type Item = &'a VoxelPlacement;
    type IntoIter = slice::Iter<'a, VoxelPlacement>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }

}


/// Positions grouped by material, in [`Material::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialBatches {
    inner: IndexMap<Material, Vec<IVec3>>,
}

impl MaterialBatches {

    /// Get the positions of the given material.
    #[inline]
    pub fn get(&self, material: Material) -> &[IVec3] {
        self.inner.get(&material).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over all batches, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Material, &[IVec3])> + '_ {
        self.inner.iter().map(|(&material, positions)| (material, positions.as_slice()))
    }

    /// Total number of instances over all batches.
    pub fn total(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

}
