use base64::{engine::general_purpose::STANDARD, Engine as _};

/// The downloadable CV stored under `aboutData.cv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvPayload {
    /// Uploaded file embedded as a `data:` URL.
    Inline { mime: String, bytes: Vec<u8> },
    /// Anything else is treated as a link to follow.
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CvError {
    #[error("CV data URL is malformed")]
    MalformedDataUrl,

    #[error("CV data is not valid base64")]
    InvalidBase64,
}

impl CvPayload {
    /// `Ok(None)` when no CV has been uploaded.
    pub fn parse(raw: &str) -> Result<Option<Self>, CvError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let Some(rest) = raw.strip_prefix("data:") else {
            return Ok(Some(CvPayload::Link(raw.to_string())));
        };

        let (header, data) = rest.split_once(',').ok_or(CvError::MalformedDataUrl)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(CvError::MalformedDataUrl)?;
        let mime = if mime.is_empty() {
            "application/octet-stream"
        } else {
            mime
        };

        let bytes = STANDARD
            .decode(data.as_bytes())
            .map_err(|_| CvError::InvalidBase64)?;

        Ok(Some(CvPayload::Inline {
            mime: mime.to_string(),
            bytes,
        }))
    }
}
