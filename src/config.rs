/// Folder to index, the manifest name to write into it, and the accepted
/// file suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub folder: String,
    pub output_file: String,
    /// Always lowercase, so matching only has to lowercase the file name.
    pub extensions: Vec<String>,
}

impl ScanConfig {
    #[must_use]
    pub fn new(folder: &str, output_file: &str, extensions: &[&str]) -> Self {
        Self {
            folder: folder.to_string(),
            output_file: output_file.to_string(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn photos() -> Self {
        Self::new(
            "photos",
            "index.json",
            &[".jpg", ".jpeg", ".png", ".gif", ".webp"],
        )
    }

    #[must_use]
    pub fn posts() -> Self {
        Self::new("posts", "index.json", &[".md"])
    }

    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}

/// Configurations run on every invocation, in order.
#[must_use]
pub fn builtin() -> Vec<ScanConfig> {
    vec![ScanConfig::photos(), ScanConfig::posts()]
}
