//! Plain 3D value types produced by the layout functions.

use serde::{Deserialize, Serialize};

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Position3D) -> f64 {
        (*self - *other).length()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl std::ops::Add for Position3D {
    type Output = Position3D;

    fn add(self, rhs: Position3D) -> Position3D {
        Position3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Position3D {
    type Output = Position3D;

    fn sub(self, rhs: Position3D) -> Position3D {
        Position3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A day anchor: the deterministic arc position of one day, keyed by its
/// global index in the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPosition {
    pub day_index: usize,
    pub position: Position3D,
}

/// One rendered unit of a day's glyph cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarInstance {
    pub day_index: usize,
    pub position: Position3D,
    pub scale: f64,
}

/// Year caption anchored at the start of its arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearLabel {
    pub year: i32,
    pub position: Position3D,
}

/// One segment of the spherical guide grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: Position3D,
    pub to: Position3D,
}

/// One decorative mountain on the ring around the scene.
///
/// `scale_xz` widens the base cone on both horizontal axes; `yaw` is a
/// rotation about the vertical axis in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainInstance {
    pub position: Position3D,
    pub scale_xz: f64,
    pub scale_y: f64,
    pub yaw: f64,
}
