use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Rc<RefCell<dyn FnMut(u64)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.callbacks.iter().any(|(k, _)| *k == id)
    }
}

/// Single-threaded stand-in for a host repaint loop.
///
/// Every [`tick`](Self::tick) calls each live subscriber once with the tick counter
/// (starting at 1). Subscribers deregister by dropping their [`Subscription`].
#[derive(Default)]
pub struct FrameScheduler {
    registry: Rc<RefCell<Registry>>,
    ticks: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl FnMut(u64) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        let callback: Callback = Rc::new(RefCell::new(callback));
        reg.callbacks.push((id, callback));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Advance one frame; returns how many callbacks ran.
    pub fn tick(&mut self) -> usize {
        self.ticks += 1;
        // Snapshot so callbacks may drop subscriptions (their own included) mid-tick.
        let snapshot: Vec<(u64, Callback)> = self.registry.borrow().callbacks.clone();
        let mut ran = 0;
        for (id, cb) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            (cb.borrow_mut())(self.ticks);
            ran += 1;
        }
        ran
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }
}

/// Handle for a per-frame callback; dropping it cancels the callback.
#[must_use = "dropping a Subscription cancels its callback"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|reg| reg.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            // Never borrowed across a callback call.
            if let Ok(mut reg) = reg.try_borrow_mut() {
                reg.callbacks.retain(|(k, _)| *k != self.id);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/scheduler.rs"]
mod tests;
