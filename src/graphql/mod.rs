pub mod catalog;
pub mod client;
pub mod comparison;
pub mod hasyx;
pub mod introspection;
pub mod operation;
pub mod order;
pub mod scalar;
pub mod sdl;
pub mod subscription;
pub mod table;
pub mod tables;
