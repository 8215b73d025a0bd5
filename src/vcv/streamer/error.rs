/// Errors that can occur while streaming archive records
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// UTF-8 encoding error in names or attribute values
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Invalid document structure
    #[error("Invalid VCV structure: {0}")]
    InvalidStructure(String),
}
