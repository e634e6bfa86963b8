pub(crate) mod scatter;
