use crate::animation::anim::{Anim, Expr};

pub fn delay<T>(inner: Anim<T>, by_frames: u64) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by: by_frames,
    })
}

pub fn loop_<T>(inner: Anim<T>, period_frames: u64) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period: period_frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
