//! bibleshape - reshape flat verse-indexed Bible JSON into a
//! book/chapter/verse document

pub mod cli;
pub mod observability;
pub mod reshape;
