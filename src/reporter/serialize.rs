pub mod mime_type {
    use mime::Mime;
    use serde::Serializer;

    /// Writes the content type as its `type/subtype` essence, parameters included.
    pub fn serialize<S>(mime: &Mime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(mime)
    }
}
