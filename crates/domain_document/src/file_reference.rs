//! File reference value object

use core_kernel::DomainError;

/// A stored file identified by its public URL, filename, and MIME type.
///
/// The URL must be http(s) with a non-empty host; scheme and host are
/// lowercased in the stored form. The filename must be a base name with no
/// path separators, and the MIME type must look like `type/subtype`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    url: String,
    filename: String,
    mime_type: String,
}

impl FileReference {
    /// Constructs a `FileReference` with normalization and ordered checks.
    pub fn new(raw_url: &str, filename: &str, mime_type: &str) -> Result<Self, DomainError> {
        let raw_url = raw_url.trim();
        let filename = filename.trim();
        let mime_type = mime_type.trim();

        if raw_url.is_empty() {
            return Err(DomainError::empty("url"));
        }
        let url = normalize_http_url(raw_url)?;

        if filename.is_empty() {
            return Err(DomainError::empty("filename"));
        }
        if filename.contains(['/', '\\']) {
            return Err(DomainError::rule("filename must not contain path separators"));
        }

        if mime_type.is_empty() {
            return Err(DomainError::empty("mimeType"));
        }
        if mime_type.chars().any(char::is_whitespace) {
            return Err(DomainError::rule("mimeType must not contain spaces"));
        }
        match mime_type.split_once('/') {
            Some((t, s)) if !t.is_empty() && !s.is_empty() && !s.contains('/') => {}
            _ => return Err(DomainError::rule("mimeType must be in the form type/subtype")),
        }

        Ok(Self {
            url,
            filename: filename.to_owned(),
            mime_type: mime_type.to_owned(),
        })
    }

    /// The file's absolute/public URL with lowercased scheme and host.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The file name, without any path components.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The MIME type, e.g. `application/pdf`.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// Splits `scheme://host[rest]`, requires an http(s) scheme and a non-empty
/// host, and rebuilds the URL with scheme and host lowercased.
fn normalize_http_url(raw: &str) -> Result<String, DomainError> {
    let invalid = DomainError::rule("url must be a valid http(s) URL with host");

    let (scheme, rest) = raw.split_once("://").ok_or_else(|| invalid.clone())?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return Err(invalid);
    }
    let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (host, tail) = rest.split_at(host_end);
    if host.is_empty() {
        return Err(invalid);
    }

    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(DomainError::rule("url scheme must be http or https"));
    }

    Ok(format!("{}://{}{}", scheme, host.to_ascii_lowercase(), tail))
}
