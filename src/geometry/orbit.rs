use kurbo::Vec2;

/// Point on a circle of radius `distance` around the origin at `angle_deg`.
///
/// Angles grow toward +y, which in screen space is clockwise.
pub fn orbit_position(distance: f64, angle_deg: f64) -> Vec2 {
    let a = angle_deg.to_radians();
    Vec2::new(distance * a.cos(), distance * a.sin())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Clockwise,
    Counterclockwise,
}

impl Direction {
    /// Sign applied to angular progression.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::Counterclockwise => -1.0,
        }
    }
}

/// Side of the square that holds every orbit: the widest `distance * 2 + size`, plus a 20px margin.
///
/// An empty set of orbits needs only the margin.
pub fn container_size(orbits: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let widest = orbits
        .into_iter()
        .map(|(distance, size)| distance * 2.0 + size)
        .fold(0.0_f64, f64::max);
    widest + 20.0
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/orbit.rs"]
mod tests;
