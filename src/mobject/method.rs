use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{
    foundation::core::{DMat3, OUT, Point3, Rgba8Premul},
    foundation::error::{MorphError, MorphResult},
    foundation::math::{Complex, matrix_from_rows},
    mobject::model::Mobject,
};

/// Shared point mapping, as used by [`MobjectMethod::ApplyFunction`].
pub type PointFn = Arc<dyn Fn(Point3) -> Point3 + Send + Sync>;
/// Shared complex-plane mapping, as used by [`MobjectMethod::ApplyComplexFunction`].
pub type ComplexFn = Arc<dyn Fn(Complex) -> Complex + Send + Sync>;

/// A mutator on [`Mobject`], captured with its arguments so a target can be computed by
/// applying it to a copy of the source.
#[derive(Clone)]
pub enum MobjectMethod {
    /// [`Mobject::set_color`].
    SetColor(Rgba8Premul),
    /// [`Mobject::scale_about`].
    Scale {
        /// Scale factor.
        factor: f64,
        /// Fixed point; the family center when `None`.
        about_point: Option<Point3>,
    },
    /// [`Mobject::shift`].
    Shift(Point3),
    /// [`Mobject::move_to`].
    MoveTo(Point3),
    /// [`Mobject::rotate`].
    Rotate {
        /// Radians.
        angle: f64,
        /// Rotation axis.
        axis: Point3,
        /// Pivot; the family center when `None`.
        about_point: Option<Point3>,
    },
    /// [`Mobject::apply_function`].
    ApplyFunction(PointFn),
    /// [`Mobject::apply_matrix`].
    ApplyMatrix(DMat3),
    /// [`Mobject::apply_complex_function`].
    ApplyComplexFunction(ComplexFn),
    /// [`Mobject::restore`].
    Restore,
}

impl fmt::Debug for MobjectMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetColor(c) => f.debug_tuple("SetColor").field(c).finish(),
            Self::Scale {
                factor,
                about_point,
            } => f
                .debug_struct("Scale")
                .field("factor", factor)
                .field("about_point", about_point)
                .finish(),
            Self::Shift(v) => f.debug_tuple("Shift").field(v).finish(),
            Self::MoveTo(p) => f.debug_tuple("MoveTo").field(p).finish(),
            Self::Rotate {
                angle,
                axis,
                about_point,
            } => f
                .debug_struct("Rotate")
                .field("angle", angle)
                .field("axis", axis)
                .field("about_point", about_point)
                .finish(),
            Self::ApplyFunction(_) => f.write_str("ApplyFunction(..)"),
            Self::ApplyMatrix(m) => f.debug_tuple("ApplyMatrix").field(m).finish(),
            Self::ApplyComplexFunction(_) => f.write_str("ApplyComplexFunction(..)"),
            Self::Restore => f.write_str("Restore"),
        }
    }
}

impl MobjectMethod {
    /// Wrap a closure as [`MobjectMethod::ApplyFunction`].
    pub fn apply_function(f: impl Fn(Point3) -> Point3 + Send + Sync + 'static) -> Self {
        Self::ApplyFunction(Arc::new(f))
    }

    /// Wrap a closure as [`MobjectMethod::ApplyComplexFunction`].
    pub fn apply_complex_function(f: impl Fn(Complex) -> Complex + Send + Sync + 'static) -> Self {
        Self::ApplyComplexFunction(Arc::new(f))
    }

    /// The mutator's call name, as accepted by [`MobjectMethod::from_call`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetColor(_) => "set_color",
            Self::Scale { .. } => "scale",
            Self::Shift(_) => "shift",
            Self::MoveTo(_) => "move_to",
            Self::Rotate { .. } => "rotate",
            Self::ApplyFunction(_) => "apply_function",
            Self::ApplyMatrix(_) => "apply_matrix",
            Self::ApplyComplexFunction(_) => "apply_complex_function",
            Self::Restore => "restore",
        }
    }

    /// Run the mutator on `mob`.
    pub fn apply(&self, mob: &mut Mobject) -> MorphResult<()> {
        match self {
            Self::SetColor(c) => {
                mob.set_color(*c);
            }
            Self::Scale {
                factor,
                about_point,
            } => {
                mob.scale_about(*factor, *about_point);
            }
            Self::Shift(v) => {
                mob.shift(*v);
            }
            Self::MoveTo(p) => {
                mob.move_to(*p);
            }
            Self::Rotate {
                angle,
                axis,
                about_point,
            } => {
                mob.rotate(*angle, *axis, *about_point);
            }
            Self::ApplyFunction(f) => {
                mob.apply_function(&**f);
            }
            Self::ApplyMatrix(m) => {
                mob.apply_matrix(*m);
            }
            Self::ApplyComplexFunction(f) => {
                mob.apply_complex_function(&**f);
            }
            Self::Restore => {
                mob.restore()?;
            }
        }
        Ok(())
    }

    /// Build a method from its name, positional `args` and an optional trailing options
    /// object, e.g. `("scale", [2.0, {"about_point": [0, 0, 0]}])`.
    ///
    /// Function-valued methods cannot be described this way; construct those variants
    /// directly.
    pub fn from_call(name: &str, args: &[Value]) -> MorphResult<Self> {
        let (positional, options) = match args.split_last() {
            Some((Value::Object(opts), rest)) => (rest, Some(opts)),
            _ => (args, None),
        };
        let call = Call {
            name,
            positional,
            options,
        };

        let method = match name {
            "set_color" => {
                call.expect_arity(1)?;
                call.allow_options(&[])?;
                Self::SetColor(parse_color(name, &positional[0])?)
            }
            "scale" => {
                call.expect_arity(1)?;
                call.allow_options(&["about_point"])?;
                Self::Scale {
                    factor: parse_f64(name, &positional[0])?,
                    about_point: call.point_option("about_point")?,
                }
            }
            "shift" => {
                call.expect_arity(1)?;
                call.allow_options(&[])?;
                Self::Shift(parse_point(name, &positional[0])?)
            }
            "move_to" => {
                call.expect_arity(1)?;
                call.allow_options(&[])?;
                Self::MoveTo(parse_point(name, &positional[0])?)
            }
            "rotate" => {
                call.expect_arity(1)?;
                call.allow_options(&["axis", "about_point"])?;
                Self::Rotate {
                    angle: parse_f64(name, &positional[0])?,
                    axis: call.point_option("axis")?.unwrap_or(OUT),
                    about_point: call.point_option("about_point")?,
                }
            }
            "apply_matrix" => {
                call.expect_arity(1)?;
                call.allow_options(&[])?;
                Self::ApplyMatrix(parse_matrix(name, &positional[0])?)
            }
            "restore" => {
                call.expect_arity(0)?;
                call.allow_options(&[])?;
                Self::Restore
            }
            "apply_function" | "apply_complex_function" => {
                return Err(MorphError::configuration(format!(
                    "'{name}' takes a function argument and cannot be built from a call description"
                )));
            }
            other => {
                return Err(MorphError::configuration(format!(
                    "'{other}' is not a mobject method"
                )));
            }
        };
        Ok(method)
    }
}

struct Call<'a> {
    name: &'a str,
    positional: &'a [Value],
    options: Option<&'a Map<String, Value>>,
}

impl Call<'_> {
    fn expect_arity(&self, n: usize) -> MorphResult<()> {
        if self.positional.len() != n {
            return Err(MorphError::configuration(format!(
                "'{}' expects {n} positional argument(s), got {}",
                self.name,
                self.positional.len()
            )));
        }
        Ok(())
    }

    fn allow_options(&self, allowed: &[&str]) -> MorphResult<()> {
        let Some(opts) = self.options else {
            return Ok(());
        };
        match opts.keys().find(|k| !allowed.contains(&k.as_str())) {
            Some(key) => Err(MorphError::configuration(format!(
                "unknown option '{key}' for '{}'",
                self.name
            ))),
            None => Ok(()),
        }
    }

    fn point_option(&self, key: &str) -> MorphResult<Option<Point3>> {
        self.options
            .and_then(|o| o.get(key))
            .map(|v| parse_point(self.name, v))
            .transpose()
    }
}

fn parse_f64(method: &str, v: &Value) -> MorphResult<f64> {
    v.as_f64().filter(|f| f.is_finite()).ok_or_else(|| {
        MorphError::configuration(format!("'{method}' expects a finite number, got {v}"))
    })
}

fn parse_numbers(method: &str, v: &Value) -> MorphResult<Vec<f64>> {
    let arr = v
        .as_array()
        .ok_or_else(|| MorphError::configuration(format!("'{method}' expects an array, got {v}")))?;
    arr.iter().map(|x| parse_f64(method, x)).collect()
}

/// `[x, y]` or `[x, y, z]`.
fn parse_point(method: &str, v: &Value) -> MorphResult<Point3> {
    match parse_numbers(method, v)?.as_slice() {
        [x, y] => Ok(Point3::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        other => Err(MorphError::configuration(format!(
            "'{method}' expects a 2D or 3D point, got {} components",
            other.len()
        ))),
    }
}

fn parse_matrix(method: &str, v: &Value) -> MorphResult<DMat3> {
    let rows = v
        .as_array()
        .ok_or_else(|| MorphError::configuration(format!("'{method}' expects a matrix, got {v}")))?
        .iter()
        .map(|row| parse_numbers(method, row))
        .collect::<MorphResult<Vec<_>>>()?;
    matrix_from_rows(&rows)
}

/// `"#rrggbb"`, `"#rrggbbaa"` (straight alpha) or `[r, g, b]` / `[r, g, b, a]` in 0..=255.
fn parse_color(method: &str, v: &Value) -> MorphResult<Rgba8Premul> {
    let bad = || MorphError::configuration(format!("'{method}' expects a color, got {v}"));
    let channels: Vec<u8> = match v {
        Value::String(s) => {
            let hex = s.strip_prefix('#').ok_or_else(bad)?;
            if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
                return Err(bad());
            }
            (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad()))
                .collect::<MorphResult<_>>()?
        }
        Value::Array(items) => items
            .iter()
            .map(|c| {
                c.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(bad)
            })
            .collect::<MorphResult<_>>()?,
        _ => return Err(bad()),
    };
    match channels.as_slice() {
        [r, g, b] => Ok(Rgba8Premul::opaque(*r, *g, *b)),
        [r, g, b, a] => Ok(Rgba8Premul::from_straight_rgba(*r, *g, *b, *a)),
        _ => Err(bad()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/method.rs"]
mod tests;
