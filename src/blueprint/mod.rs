pub(crate) mod cache;
pub(crate) mod element;
pub(crate) mod tree;
pub(crate) mod value;
