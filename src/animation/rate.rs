/// Polynomial easing curves, selectable from config through [`RateFunc::Ease`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// `t²`.
    InQuad,
    /// Mirror of `InQuad`.
    OutQuad,
    /// Quadratic in, quadratic out.
    InOutQuad,
    /// `t³`.
    InCubic,
    /// Mirror of `InCubic`.
    OutCubic,
    /// Cubic in, cubic out.
    InOutCubic,
}

impl Ease {
    /// Evaluate at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Time-shaping function applied to alpha before interpolation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFunc {
    /// Identity.
    Linear,
    #[default]
    /// Sigmoid ease with inflection 10, normalized to hit 0 and 1 exactly.
    Smooth,
    /// Goes to 1 at the midpoint and back to 0.
    ThereAndBack,
    /// First half of `smooth`, stretched: starts slow, arrives at full speed.
    RushInto,
    /// Second half of `smooth`, stretched: leaves at full speed, settles slowly.
    RushFrom,
    /// One of the polynomial [`Ease`] curves.
    Ease(Ease),
    /// Runs `inner` compressed into the window `[a, b]`, holding its endpoints outside it.
    Squish {
        /// Curve played inside the window.
        inner: Box<RateFunc>,
        /// Window start.
        a: f64,
        /// Window end.
        b: f64,
    },
}

const SMOOTH_INFLECTION: f64 = 10.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Normalized sigmoid ease; exactly 0 at `t <= 0` and 1 at `t >= 1`.
pub fn smooth(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
    let v = (sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error);
    v.clamp(0.0, 1.0)
}

impl RateFunc {
    /// `squish(smooth)` over the middle fifth of the timeline.
    pub fn squished_smooth() -> Self {
        Self::squish(Self::Smooth, 0.4, 0.6)
    }

    /// Compress `inner` into `[a, b]`. A zero-width window yields the constant `a`.
    pub fn squish(inner: RateFunc, a: f64, b: f64) -> Self {
        Self::Squish {
            inner: Box::new(inner),
            a,
            b,
        }
    }

    /// Evaluate at `t`.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::ThereAndBack => {
                let t = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(t)
            }
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Self::Ease(e) => e.apply(t),
            Self::Squish { inner, a, b } => {
                if a == b {
                    return *a;
                }
                if t < *a {
                    inner.apply(0.0)
                } else if t > *b {
                    inner.apply(1.0)
                } else {
                    inner.apply((t - a) / (b - a))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rate.rs"]
mod tests;
