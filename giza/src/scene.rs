//! Time-of-day lighting table and the reactive scene state consumed by the renderer.

use glam::Vec3;


/// Fog starts at this distance from the camera.
pub const FOG_NEAR: f32 = 10.0;
/// Fog is opaque from this distance.
pub const FOG_FAR: f32 = 120.0;

/// Blue rim light giving definition to the silhouettes, independent of the time.
pub const RIM_LIGHT_POSITION: Vec3 = Vec3::new(-50.0, 20.0, -50.0);
pub const RIM_LIGHT_COLOR: u32 = 0x4444ff;
pub const RIM_LIGHT_INTENSITY: f32 = 0.2;

/// Position of the directional light at night, a fake moon used for shadows.
const MOON_POSITION: Vec3 = Vec3::new(20.0, 50.0, 20.0);


/// The four lighting states of the scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Dawn,
    #[default]
    Noon,
    GoldenHour,
    Night,
}

impl TimeOfDay {

    /// All states, in cycling order.
    pub const ALL: [Self; 4] = [Self::Dawn, Self::Noon, Self::GoldenHour, Self::Night];

    /// The state following this one, wrapping from night to dawn.
    pub fn next(self) -> Self {
        match self {
            Self::Dawn => Self::Noon,
            Self::Noon => Self::GoldenHour,
            Self::GoldenHour => Self::Night,
            Self::Night => Self::Dawn,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dawn => "DAWN",
            Self::Noon => "NOON",
            Self::GoldenHour => "GOLDEN_HOUR",
            Self::Night => "NIGHT",
        }
    }

    /// Get the lighting bundle of this state.
    pub fn lighting(self) -> Lighting {
        match self {
            Self::Dawn => Lighting {
                sun_position: Vec3::new(100.0, 10.0, 20.0),
                light_color: 0xff9966,
                ambient_color: 0x664444,
                intensity: 1.5,
                ambient_intensity: 0.5,
                fog_color: 0xffccaa,
                fog_density: 0.015,
                stars: false,
            },
            Self::Noon => Lighting {
                sun_position: Vec3::new(10.0, 100.0, 10.0),
                light_color: 0xffffff,
                ambient_color: 0xffffff,
                intensity: 2.5,
                ambient_intensity: 0.8,
                fog_color: 0xccf0ff,
                fog_density: 0.008,
                stars: false,
            },
            Self::GoldenHour => Lighting {
                sun_position: Vec3::new(-100.0, 15.0, 20.0),
                light_color: 0xffaa00,
                ambient_color: 0x996633,
                intensity: 2.0,
                ambient_intensity: 0.5,
                fog_color: 0xaa5588,
                fog_density: 0.012,
                stars: false,
            },
            Self::Night => Lighting {
                // Sun below the horizon, the light is the moon.
                sun_position: Vec3::new(0.0, -50.0, 0.0),
                light_color: 0x001133,
                ambient_color: 0x000022,
                intensity: 0.5,
                ambient_intensity: 0.2,
                fog_color: 0x000011,
                fog_density: 0.02,
                stars: true,
            },
        }
    }

    /// Whether the sky dome is drawn, it is replaced by the star field at night.
    #[inline]
    pub fn sky_visible(self) -> bool {
        self != Self::Night
    }

    /// Rayleigh scattering coefficient of the sky dome.
    #[inline]
    pub fn rayleigh(self) -> f32 {
        if self == Self::GoldenHour { 4.0 } else { 2.0 }
    }

    /// Position of the shadow-casting directional light.
    pub fn light_position(self) -> Vec3 {
        if self == Self::Night {
            MOON_POSITION
        } else {
            self.lighting().sun_position
        }
    }

}


/// Material, intensity and fog parameters of a time of day. Colors are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub sun_position: Vec3,
    pub light_color: u32,
    pub ambient_color: u32,
    pub intensity: f32,
    pub ambient_intensity: f32,
    pub fog_color: u32,
    /// Exponential fog density.
    pub fog_density: f32,
    /// Whether the star field is drawn.
    pub stars: bool,
}


/// Viewer-controlled state of the scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneState {
    pub time_of_day: TimeOfDay,
    /// When enabled the camera follows the tour instead of the orbit controls.
    pub tour_mode: bool,
}

impl SceneState {

    /// Advance to the next time of day.
    pub fn cycle_time(&mut self) {
        self.time_of_day = self.time_of_day.next();
    }

    pub fn toggle_tour(&mut self) {
        self.tour_mode = !self.tour_mode;
    }

}


/// Convert a `0xRRGGBB` color to normalized RGB components.
pub fn color_to_rgb(color: u32) -> Vec3 {
    Vec3::new(
        ((color >> 16) & 0xff) as f32,
        ((color >> 8) & 0xff) as f32,
        (color & 0xff) as f32,
    ) / 255.0
}
