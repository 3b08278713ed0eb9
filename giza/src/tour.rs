//! Scripted fly-through of the plateau, from the river over the Sphinx and up the
//! causeway toward the Great Pyramid, looping every 30 seconds.

use glam::Vec3;


/// Duration of one pass, in seconds.
const LOOP_DURATION: f32 = 30.0;
/// Westward speed of the camera, in voxels per second.
const SPEED: f32 = 3.5;
const START_X: f32 = 50.0;
const MIN_X: f32 = -50.0;

/// While the camera is east of this X it looks at the Sphinx.
const SPHINX_VIEW_LIMIT: f32 = 10.0;
const SPHINX_TARGET: Vec3 = Vec3::new(15.0, 5.0, 0.0);
const PYRAMID_PEAK_TARGET: Vec3 = Vec3::new(-20.0, 25.0, -10.0);

/// Per-frame smoothing of the camera position toward the path.
const POSITION_LERP: f32 = 0.05;
/// Per-frame smoothing of the look target.
const TARGET_LERP: f32 = 0.1;

/// Initial orbit camera position, before any tour.
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(60.0, 40.0, 60.0);
/// Vertical field of view of the camera, in degrees.
pub const CAMERA_FOV: f32 = 45.0;


/// A camera pose on the tour path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Get the pose on the tour path after the given elapsed time in seconds.
pub fn tour_pose(elapsed: f32) -> TourPose {

    let t = elapsed * 0.1;
    let x = (START_X - (elapsed % LOOP_DURATION) * SPEED).max(MIN_X);
    let y = 10.0 + t.sin() * 2.0;
    let z = (t * 0.5).sin() * 10.0;

    TourPose {
        position: Vec3::new(x, y + 10.0, z + 20.0),
        target: if x > SPHINX_VIEW_LIMIT { SPHINX_TARGET } else { PYRAMID_PEAK_TARGET },
    }

}


/// A camera following the tour path with frame smoothing, it eases from wherever the
/// viewer left the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourCamera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for TourCamera {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_POSITION, Vec3::ZERO)
    }
}

impl TourCamera {

    #[inline]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Move one frame toward the pose at the given elapsed time.
    pub fn update(&mut self, elapsed: f32) {
        let pose = tour_pose(elapsed);
        self.position = self.position.lerp(pose.position, POSITION_LERP);
        self.target = self.target.lerp(pose.target, TARGET_LERP);
    }

}
