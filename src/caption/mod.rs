pub(crate) mod flatten;
pub(crate) mod markers;
pub(crate) mod model;
pub(crate) mod segment;
pub(crate) mod style;
