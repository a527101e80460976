use crate::{
    animation::anim::{Anim, Lerp},
    animation::ease::Ease,
    animation::ops::{delay, loop_},
    foundation::core::Fps,
    foundation::error::{StarbrightError, StarbrightResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Once,
    #[default]
    Forever,
}

/// Second-based transition parameters, converted to frame-based [`Anim`]s on demand.
///
/// Keyframe values are spread evenly across `duration_secs` and `ease` applies to each
/// segment between neighbouring values. With [`Repeat::Forever`] the whole run restarts
/// every `duration_secs + repeat_delay_secs`; `delay_secs` postpones the first run only.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub duration_secs: f64,
    #[serde(default)]
    pub delay_secs: f64,
    pub ease: Ease,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(default)]
    pub repeat_delay_secs: f64,
}

impl Timing {
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            ease,
            repeat: Repeat::Forever,
            repeat_delay_secs: 0.0,
        }
    }

    pub fn linear_loop(duration_secs: f64) -> Self {
        Self::new(duration_secs, Ease::Linear)
    }

    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn with_repeat_delay(mut self, repeat_delay_secs: f64) -> Self {
        self.repeat_delay_secs = repeat_delay_secs;
        self
    }

    pub fn once(mut self) -> Self {
        self.repeat = Repeat::Once;
        self
    }

    pub fn validate(&self) -> StarbrightResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(StarbrightError::animation(
                "timing duration_secs must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("delay_secs", self.delay_secs),
            ("repeat_delay_secs", self.repeat_delay_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(StarbrightError::animation(format!(
                    "timing {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn duration_frames(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_round(self.duration_secs).max(1)
    }

    pub fn animate<T>(&self, values: Vec<T>, fps: Fps) -> StarbrightResult<Anim<T>>
    where
        T: Lerp + Clone,
    {
        self.validate()?;
        if values.is_empty() {
            return Err(StarbrightError::animation(
                "timing needs at least one keyframe value",
            ));
        }

        // One frame per segment at least, so no keyframe shares a frame with its neighbour.
        let run = self.duration_frames(fps).max(values.len() as u64 - 1);
        let mut anim = Anim::evenly_spaced(values, run, self.ease);
        if self.repeat == Repeat::Forever {
            let period = run + fps.secs_to_frames_round(self.repeat_delay_secs);
            anim = loop_(anim, period);
        }
        let lead_in = fps.secs_to_frames_round(self.delay_secs);
        if lead_in > 0 {
            anim = delay(anim, lead_in);
        }
        Ok(anim)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
