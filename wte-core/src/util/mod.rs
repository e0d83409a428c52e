pub mod select;
pub mod sequence;
