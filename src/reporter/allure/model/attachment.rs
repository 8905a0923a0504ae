use mime::Mime;
use serde_derive::Serialize;
use std::path::Path;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(with = "crate::reporter::serialize::mime_type")]
    pub r#type: Mime,
    pub source: String,
}

impl Attachment {
    /// Guesses the content type of an Xcode attachment from its extension.
    pub fn mime_of(path: &Path) -> Mime {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => mime::IMAGE_PNG,
            Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
            Some("gif") => mime::IMAGE_GIF,
            Some("txt") | Some("log") | Some("crash") | Some("ips") => mime::TEXT_PLAIN,
            Some("json") => mime::APPLICATION_JSON,
            Some("html") => mime::TEXT_HTML,
            Some("xml") | Some("plist") => mime::TEXT_XML,
            _ => mime::APPLICATION_OCTET_STREAM,
        }
    }
}
