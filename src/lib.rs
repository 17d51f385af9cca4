pub mod mesh;
pub mod writer;
pub mod xml;
pub mod data;
pub mod error;
pub mod export;
pub mod reader;
pub mod series;
pub mod prelude;

pub use crate::export::export;
