pub mod area;
pub mod field;
pub mod filter;
pub mod generation;
pub mod run;
pub mod series;
pub mod slider;
pub mod validate;
pub mod wind;
