pub(crate) mod divider;
pub(crate) mod orbit;
pub(crate) mod palette;
pub(crate) mod path_data;
pub(crate) mod starburst;
