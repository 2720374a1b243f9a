use base64::Engine as _;

/// Decoded bitmap, always RGBA8, rows stored top-down.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

pub fn decode_base64(text: &str) -> Result<Vec<u8>, String> {
    base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| format!("base64 decoding error: {e}"))
}

pub fn decode_png(bytes: &[u8]) -> Result<Image, String> {
    let img = match stb_image::image::load_from_memory_with_depth(bytes, 4, false) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err("32-bit images not supported here".to_string());
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => {
            return Err(format!("image decoding error: {e}"));
        }
    };

    if img.width == 0 || img.height == 0 || img.data.len() != img.width * img.height * 4 {
        return Err(format!(
            "unexpected pixel data: {}x{} with {} bytes",
            img.width,
            img.height,
            img.data.len()
        ));
    }

    Ok(Image {
        width: img.width,
        height: img.height,
        data: img.data,
    })
}

pub fn image_from_base64(text: &str) -> Result<Image, String> {
    let bytes = decode_base64(text)?;
    decode_png(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[test]
    fn decodes_ship_asset() {
        let img = image_from_base64(assets::SHIP_PNG).unwrap();
        assert_eq!((img.width, img.height), (32, 32));
        assert_eq!(img.data.len(), 32 * 32 * 4);

        // nose pixel is opaque, top-left corner is transparent
        let alpha = |x: usize, y: usize| img.data[(y * img.width + x) * 4 + 3];
        assert_eq!(alpha(16, 4), 255);
        assert_eq!(alpha(0, 0), 0);
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_base64("not*base64!").unwrap_err();
        assert!(err.contains("base64"), "{err}");
    }

    #[test]
    fn rejects_non_png_payload() {
        // "hello world" is valid base64 text but not an image
        let err = image_from_base64("aGVsbG8gd29ybGQ=").unwrap_err();
        assert!(err.contains("image decoding error"), "{err}");
    }
}
