use serde::{Deserialize, Serialize};

/// Inline binary payload for a request part.
///
/// The data is the pure base64 payload with no data-URI header; the MIME
/// type travels alongside it so the service can interpret the bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// IANA media type of the encoded bytes.
    pub mime_type: String,

    /// Base64-encoded payload.
    pub data: String,
}

impl Blob {
    /// Create a new blob from an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let blob = Blob::new("text/csv", "YSxiLGM=");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#"{"mimeType":"text/csv","data":"YSxiLGM="}"#);
    }

    #[test]
    fn deserialization() {
        let json = r#"{"mimeType":"image/png","data":"aGVsbG8="}"#;
        let blob: Blob = serde_json::from_str(json).unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.data, "aGVsbG8=");
    }
}
