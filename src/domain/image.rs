//! Inline image payloads sent alongside analysis prompts.

use super::errors::DomainError;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet, padding optional. Captures are re-encoded canonically.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Base64 image data ready for transmission, without any data-URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Accepts either bare base64 or a data URL (`data:image/png;base64,...`).
    ///
    /// The prefix is stripped and its MIME type kept. Line breaks and missing
    /// padding are tolerated; the remainder must decode as standard base64.
    pub fn from_capture(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        let (mime_type, data) = match input.split_once(',') {
            Some((header, data)) if header.starts_with("data:") => {
                let mime = header
                    .trim_start_matches("data:")
                    .split(';')
                    .next()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_IMAGE_MIME);
                (mime.to_string(), data)
            }
            Some(_) => {
                return Err(DomainError::Image(
                    "unexpected ',' outside a data URL".to_string(),
                ));
            }
            None => (DEFAULT_IMAGE_MIME.to_string(), input),
        };

        let compact: String = data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if compact.is_empty() {
            return Err(DomainError::Image("empty image data".to_string()));
        }
        let bytes = LENIENT.decode(&compact).map_err(|e| {
            DomainError::Image(format!(
                "image data is not valid base64 ({} chars): {}",
                compact.len(),
                e
            ))
        })?;

        Ok(Self::from_bytes(mime_type, &bytes))
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    /// Browser-style capture string, e.g. `data:image/jpeg;base64,...`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];

    #[test]
    fn test_bare_and_prefixed_decode_to_same_bytes() {
        let bare = BASE64.encode(PIXEL);
        let prefixed = format!("data:image/jpeg;base64,{}", bare);

        let a = ImagePayload::from_capture(&bare).unwrap();
        let b = ImagePayload::from_capture(&prefixed).unwrap();

        assert_eq!(a.data, bare);
        assert_eq!(b.data, bare);
        assert!(!b.data.starts_with("data:"));
        assert_eq!(BASE64.decode(&b.data).unwrap(), PIXEL);
    }

    #[test]
    fn test_prefix_mime_is_kept() {
        let payload =
            ImagePayload::from_capture(&format!("data:image/png;base64,{}", BASE64.encode(PIXEL)))
                .unwrap();
        assert_eq!(payload.mime_type, "image/png");

        let bare = ImagePayload::from_capture(&BASE64.encode(PIXEL)).unwrap();
        assert_eq!(bare.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(matches!(
            ImagePayload::from_capture("data:image/jpeg;base64,@@@"),
            Err(DomainError::Image(_))
        ));
        assert!(ImagePayload::from_capture("").is_err());
        assert!(ImagePayload::from_capture("abc,def").is_err());
    }

    #[test]
    fn test_wrapped_and_unpadded_data_accepted() {
        let canonical = BASE64.encode(&PIXEL[..5]);
        assert!(canonical.ends_with('='));

        let wrapped = format!("{}\r\n{}", &canonical[..4], &canonical[4..]);
        let payload = ImagePayload::from_capture(&wrapped).unwrap();
        assert_eq!(payload.data, canonical);

        let unpadded = canonical.trim_end_matches('=');
        let payload =
            ImagePayload::from_capture(&format!("data:image/png;base64,{}", unpadded)).unwrap();
        assert_eq!(payload.data, canonical);
        assert_eq!(payload.mime_type, "image/png");

        let err = ImagePayload::from_capture("  \n ").unwrap_err();
        assert!(err.to_string().contains("empty image data"));
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let payload = ImagePayload::from_bytes("image/webp", PIXEL);
        assert_eq!(BASE64.decode(&payload.data).unwrap(), PIXEL);
        let again = ImagePayload::from_capture(&payload.to_data_url()).unwrap();
        assert_eq!(again, payload);
    }
}
