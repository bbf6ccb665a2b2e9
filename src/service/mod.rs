pub mod hasyx;
pub mod schema;
