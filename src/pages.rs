pub mod catalog;
pub(crate) mod driver;
pub(crate) mod model;
