//! Custom widgets

pub mod fire_map;
pub mod percent_bar;

pub use fire_map::FireMap;
pub use percent_bar::PercentBar;
