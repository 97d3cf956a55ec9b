/// One vertex of the motion path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Seconds from the start of the window.
    pub time: f64,
    /// Top-left x of the piece, in pixels.
    pub x: f64,
    /// Top-left y of the piece, in pixels.
    pub y: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
    /// `true` for the enter/exit keyframes of an alignment hold.
    pub is_alignment: bool,
}

impl Keyframe {
    pub fn motion(time: f64, x: f64, y: f64, rotation: f64) -> Self {
        Self {
            time,
            x,
            y,
            rotation,
            is_alignment: false,
        }
    }

    pub fn alignment(time: f64, x: f64, y: f64) -> Self {
        Self {
            time,
            x,
            y,
            rotation: 0.0,
            is_alignment: true,
        }
    }

    /// Value of one interpolated channel.
    pub fn channel(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Rotation => self.rotation,
        }
    }
}

/// Independently interpolated keyframe channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Rotation,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Rotation => "rotation",
        }
    }
}
