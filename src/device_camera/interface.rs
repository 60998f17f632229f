use base64::{engine::general_purpose::STANDARD, Engine as _};

/// One encoded frame as produced by the camera at the moment of capture.
#[derive(Clone, PartialEq)]
pub struct StillImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl StillImage {
    pub fn new(bytes: Vec<u8>, mime_type: &str) -> Self {
        Self {
            bytes,
            mime_type: mime_type.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:<mime>;base64,<payload>`, the form the prediction service splits on `,`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

impl std::fmt::Debug for StillImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StillImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub trait DeviceCamera {
    /// Snapshot of the current feed. Never starts or stops the camera.
    fn capture_frame(&self) -> Result<StillImage, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let image = StillImage::new(vec![0xff, 0xd8, 0xff], "image/jpeg");

        assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,/9j/");
        assert!(!image.is_empty());
        assert!(StillImage::new(vec![], "image/jpeg").is_empty());
    }

    #[test]
    fn test_debug_omits_payload() {
        let image = StillImage::new(vec![7; 4096], "image/png");

        assert_eq!(
            format!("{:?}", image),
            "StillImage { mime_type: \"image/png\", len: 4096 }"
        );
    }
}
