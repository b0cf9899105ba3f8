pub(crate) mod horizontal;
pub(crate) mod metrics;
