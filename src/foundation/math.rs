use crate::foundation::core::{DMat3, OUT, Point3};
use crate::foundation::error::{MorphError, MorphResult};

/// Minimal complex number used by complex-plane mappings (`x + iy` ↔ point `(x, y, 0)`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    /// Imaginary unit.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// `re + i·im`.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `r·e^(iθ)`.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Read `(x, y)` as `x + iy`, dropping `z`.
    pub fn from_point(p: Point3) -> Self {
        Self::new(p.x, p.y)
    }

    /// Back to a point in the `z = 0` plane; callers restore `z` themselves.
    pub fn to_point(self) -> Point3 {
        Point3::new(self.re, self.im, 0.0)
    }

    /// Modulus.
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Principal argument in `(-π, π]`.
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Principal logarithm; `Im(ln z) == arg z`.
    pub fn ln(self) -> Self {
        Self::new(self.norm().ln(), self.arg())
    }

    /// Complex exponential.
    pub fn exp(self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }

    /// Integer power in polar form.
    pub fn powi(self, n: i32) -> Self {
        Self::from_polar(self.norm().powi(n), self.arg() * f64::from(n))
    }

    /// Both parts finite.
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

/// Rotation by `angle` radians about `axis`. A zero-length axis falls back to [`OUT`].
pub fn rotation_matrix(angle: f64, axis: Point3) -> DMat3 {
    DMat3::from_axis_angle(unit_axis(axis), angle)
}

pub(crate) fn unit_axis(axis: Point3) -> Point3 {
    axis.try_normalize().unwrap_or(OUT)
}

/// Build a 3×3 linear map from row-major `rows`.
///
/// A 2×2 input is promoted into the top-left block of the identity. Any other shape is
/// rejected.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> MorphResult<DMat3> {
    let n = rows.len();
    if !(n == 2 || n == 3) || rows.iter().any(|r| r.len() != n) {
        let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
        return Err(MorphError::configuration(format!(
            "matrix has bad dimensions: {n} rows with widths {widths:?} (expected 2x2 or 3x3)"
        )));
    }
    if rows.iter().flatten().any(|v| !v.is_finite()) {
        return Err(MorphError::configuration("matrix entries must be finite"));
    }

    let mut m = [[0.0; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    for (i, row) in rows.iter().enumerate() {
        m[i][..n].copy_from_slice(row);
    }
    // glam is column-major; `m` is row-major.
    Ok(DMat3::from_cols_array_2d(&m).transpose())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
