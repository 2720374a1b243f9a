pub mod glutils;
pub mod math;
pub mod shaders;
pub mod sprite;
pub mod system;
