//! Frame-based animation values and the second-based [`timing::Timing`] front end.

pub mod anim;
pub mod ease;
pub mod ops;
pub mod timing;
