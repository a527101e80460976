pub(crate) mod atomic;
pub(crate) mod comet;
pub(crate) mod env;
pub(crate) mod orbit;
pub(crate) mod parallax;
pub(crate) mod scheduler;
pub(crate) mod starfield;
