pub mod config;
pub mod disclosure;
pub mod html;
