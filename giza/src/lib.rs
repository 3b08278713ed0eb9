//! Deterministic voxel landscape of the Giza plateau in the Old Kingdom: the Nile, its
//! fertile banks, the desert rise, three pyramids, the Sphinx and the covered causeway.

pub mod util;

pub mod voxel;
pub mod height;
pub mod config;
pub mod world;
pub mod worldgen;

pub mod scene;
pub mod tour;
