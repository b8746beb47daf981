pub mod history;
pub mod quiz;
pub mod session;
pub mod shared;
pub mod speech;
pub mod translation;
