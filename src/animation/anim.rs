use crate::{
    animation::ease::Ease,
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::{StarbrightError, StarbrightResult},
};

#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    pub frame: FrameIndex, // decoration-local frame
    pub fps: Fps,
}

impl SampleCtx {
    pub fn new(frame: FrameIndex, fps: Fps) -> Self {
        Self { frame, fps }
    }

    fn at(self, frame: FrameIndex) -> Self {
        Self { frame, ..self }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes {
            keys: vec![Keyframe {
                frame: FrameIndex(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        })
    }

    /// Evenly spaced keys across `duration_frames`, all eased with `ease`.
    pub fn evenly_spaced(values: Vec<T>, duration_frames: u64, ease: Ease) -> Self {
        let n = values.len();
        let keys = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let frame = if n <= 1 {
                    0
                } else {
                    ((i as f64) * (duration_frames as f64) / ((n - 1) as f64)).round() as u64
                };
                Keyframe {
                    frame: FrameIndex(frame),
                    value,
                    ease,
                }
            })
            .collect();
        Self::Keyframes(Keyframes {
            keys,
            mode: InterpMode::Linear,
            default: None,
        })
    }

    pub fn sample(&self, ctx: SampleCtx) -> StarbrightResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Expr(expr) => expr.sample(ctx),
        }
    }

    pub fn validate(&self) -> StarbrightResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    pub mode: InterpMode,
    pub default: Option<T>, // value when no keys exist
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> StarbrightResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(StarbrightError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(StarbrightError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, ctx: SampleCtx) -> StarbrightResult<T> {
        if self.keys.is_empty() {
            return self.default.clone().ok_or_else(|| {
                StarbrightError::animation("Keyframes has no keys and no default")
            });
        }

        let f = ctx.frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: FrameIndex,
    pub value: T,
    pub ease: Ease, // applied toward the next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    Delay {
        inner: Box<Anim<T>>,
        by: u64,
    },
    /// Restart `inner` every `period` frames.
    Loop {
        inner: Box<Anim<T>>,
        period: u64,
    },
}

impl<T> Expr<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> StarbrightResult<()> {
        match self {
            Self::Delay { inner, by: _ } => inner.validate(),
            Self::Loop { inner, period } => {
                if *period == 0 {
                    return Err(StarbrightError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }

    pub fn sample(&self, ctx: SampleCtx) -> StarbrightResult<T> {
        match self {
            Self::Delay { inner, by } => {
                let f = ctx.frame.0;
                inner.sample(ctx.at(FrameIndex(f.saturating_sub(*by))))
            }
            Self::Loop { inner, period } => {
                if *period == 0 {
                    return Err(StarbrightError::animation("Loop period must be > 0"));
                }
                inner.sample(ctx.at(FrameIndex(ctx.frame.0 % period)))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
