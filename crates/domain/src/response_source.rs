/// Where the response handed to the post-resolution filters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseSource {
    Upstream,
    Cache,
    Rewrite,
    Local,
}

impl ResponseSource {
    /// Only fresh upstream answers are subject to rebinding checks.
    pub fn needs_rebind_check(&self) -> bool {
        matches!(self, ResponseSource::Upstream)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::Upstream => "upstream",
            ResponseSource::Cache => "cache",
            ResponseSource::Rewrite => "rewrite",
            ResponseSource::Local => "local",
        }
    }
}
