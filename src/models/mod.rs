pub mod club;
pub mod game;
pub mod hasyx;
pub mod introspection;
pub mod log;
pub mod notification;
pub mod payment;
pub mod response;
pub mod schema;
pub mod tournament;
pub mod user;
