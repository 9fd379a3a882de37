pub mod assets;
pub mod icons;
pub mod sheet;
pub mod theme;
