pub(crate) mod community;
