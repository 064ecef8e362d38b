use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// An image decoded out of a `data:image/...;base64,...` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub extension: String,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    pub fn content_type(&self) -> String {
        format!("image/{}", self.extension)
    }
}

/// Parses a base64 data URL into raw image bytes plus the file extension
/// taken from the MIME subtype. Returns `None` for anything that is not a
/// well-formed `data:image/...` URL.
pub fn parse_image_data_url(data_url: &str) -> Option<DecodedImage> {
    let rest = data_url.strip_prefix("data:image/")?;
    let (subtype, payload) = rest.split_once(";base64,")?;

    if subtype.is_empty() || !subtype.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let bytes = BASE64.decode(payload.trim()).ok()?;
    if bytes.is_empty() {
        return None;
    }

    Some(DecodedImage {
        extension: subtype.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8]) -> String {
        BASE64.encode(bytes)
    }

    #[test]
    fn parses_png_data_url() {
        let url = format!("data:image/png;base64,{}", encode(b"\x89PNG\r\n"));
        let image = parse_image_data_url(&url).expect("valid data url");
        assert_eq!(image.extension, "png");
        assert_eq!(image.content_type(), "image/png");
        assert_eq!(image.bytes, b"\x89PNG\r\n");
    }

    #[test]
    fn rejects_non_image_data_url() {
        let url = format!("data:text/plain;base64,{}", encode(b"hello"));
        assert!(parse_image_data_url(&url).is_none());
    }

    #[test]
    fn rejects_missing_base64_marker() {
        assert!(parse_image_data_url("data:image/png,rawbytes").is_none());
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        assert!(parse_image_data_url("data:image/jpeg;base64,!!!not-base64!!!").is_none());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(parse_image_data_url("data:image/webp;base64,").is_none());
    }

    #[test]
    fn rejects_plain_url() {
        assert!(parse_image_data_url("https://example.com/car.png").is_none());
    }
}
