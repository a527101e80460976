use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{StarbrightError, StarbrightResult},
    geometry::palette::ColorToken,
    scene::model::{Decoration, DecorationKind, Scene},
};

pub struct SceneBuilder {
    canvas: Canvas,
    fps: Fps,
    seed: u64,
    reduced_motion: bool,
    scroll_y: f64,
    background: Option<ColorToken>,
    decorations: Vec<Decoration>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            fps: Fps::default(),
            seed: 0,
            reduced_motion: false,
            scroll_y: 0.0,
            background: None,
            decorations: Vec::new(),
        }
    }

    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn reduced_motion(mut self, on: bool) -> Self {
        self.reduced_motion = on;
        self
    }

    pub fn scroll_y(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn background(mut self, color: ColorToken) -> Self {
        self.background = Some(color);
        self
    }

    pub fn decoration(
        mut self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        kind: DecorationKind,
    ) -> StarbrightResult<Self> {
        let id = id.into();
        if self.decorations.iter().any(|d| d.id == id) {
            return Err(StarbrightError::validation(format!(
                "duplicate decoration id '{id}'"
            )));
        }
        self.decorations.push(Decoration { id, x, y, kind });
        Ok(self)
    }

    pub fn build(self) -> StarbrightResult<Scene> {
        let scene = Scene {
            canvas: self.canvas,
            fps: self.fps,
            seed: self.seed,
            reduced_motion: self.reduced_motion,
            scroll_y: self.scroll_y,
            background: self.background,
            decorations: self.decorations,
        };
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
