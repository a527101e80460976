use crate::foundation::core::Canvas;

/// Ambient host state handed to every decoration explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub viewport: Canvas,
    pub scroll_y: f64,
    pub reduced_motion: bool,
}

impl Environment {
    pub fn new(viewport: Canvas) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            reduced_motion: false,
        }
    }

    pub fn with_scroll(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// `false` when every decoration should render its static frame.
    pub fn animates(&self) -> bool {
        !self.reduced_motion
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/env.rs"]
mod tests;
