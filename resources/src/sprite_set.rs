use crate::assets;
use crate::decode::{image_from_base64, Image};
use tracing::debug;

/// The four ship bitmaps, decoded once at startup.
pub struct SpriteSet {
    pub ship: Image,
    pub burn: Image,
    pub left: Image,
    pub right: Image,
}

impl SpriteSet {
    pub fn load() -> Result<SpriteSet, String> {
        Ok(SpriteSet {
            ship: load_one("ship", assets::SHIP_PNG)?,
            burn: load_one("burn", assets::BURN_PNG)?,
            left: load_one("left", assets::LEFT_PNG)?,
            right: load_one("right", assets::RIGHT_PNG)?,
        })
    }
}

fn load_one(name: &str, encoded: &str) -> Result<Image, String> {
    let img = image_from_base64(encoded).map_err(|e| format!("asset '{name}': {e}"))?;
    debug!(asset = name, width = img.width, height = img.height, "decoded sprite");
    Ok(img)
}
