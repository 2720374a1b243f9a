pub mod assets;
pub mod decode;
pub mod sprite_set;
