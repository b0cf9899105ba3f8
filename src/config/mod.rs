pub(crate) mod data;
pub(crate) mod service;
