mod context;
mod table;

pub mod elevate;
pub mod init;
pub mod links;
pub mod run;
pub mod status;
