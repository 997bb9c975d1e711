pub use glam::{DMat3, DVec3};

/// A point in scene space. Transforms operate in 3D; 2D shapes live in the `z = 0` plane.
pub type Point3 = DVec3;

/// Scene origin.
pub const ORIGIN: Point3 = DVec3::ZERO;
/// Unit vector pointing out of the screen (+z), the default rotation axis.
pub const OUT: Point3 = DVec3::Z;
/// Unit vector pointing up (+y).
pub const UP: Point3 = DVec3::Y;
/// Unit vector pointing right (+x).
pub const RIGHT: Point3 = DVec3::X;

/// Radians per degree.
pub const DEGREES: f64 = std::f64::consts::PI / 180.0;

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Default for Rgba8Premul {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba8Premul {
    /// Opaque white, the default mobject color.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Fully opaque color from straight channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply straight (non-premultiplied) channels.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channel-wise blend; `t` is clamped so overshooting rate functions stay in gamut.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
