use crate::error::{GaugeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Capability the renderer draws through. Production surfaces are hosting
/// HTML documents; tests substitute an in-memory fake.
pub trait DrawingSurface {
    /// Whether the surface exposes a drawable element with this id.
    fn has_element(&self, id: &str) -> bool;

    /// Attaches a rendered chart fragment to the surface. Attaching more
    /// than once is not rejected here; duplicate instantiation is the
    /// charting library's concern.
    fn attach_fragment(&mut self, fragment: &str);

    /// Human-readable name of the surface, for error reporting.
    fn location(&self) -> String;
}

/// A hosting document loaded into memory.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    path: PathBuf,
    contents: String,
}

impl HtmlDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.contents).map_err(GaugeError::Io)
    }
}

impl DrawingSurface for HtmlDocument {
    fn has_element(&self, id: &str) -> bool {
        self.contents.contains(&format!("id=\"{id}\""))
            || self.contents.contains(&format!("id='{id}'"))
    }

    fn attach_fragment(&mut self, fragment: &str) {
        match self.contents.rfind("</body>") {
            Some(index) => self.contents.insert_str(index, fragment),
            None => self.contents.push_str(fragment),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Resolves the hosting document for a render. A file path is loaded
/// directly; a directory is walked for the first `.html`/`.htm` document
/// containing the target element.
pub fn locate_document(path: &Path, target: &str) -> Result<HtmlDocument> {
    if path.is_file() {
        return HtmlDocument::load(path);
    }

    let mut candidates = 0usize;
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let is_html = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            .unwrap_or(false);
        if !is_html {
            continue;
        }
        candidates += 1;
        let document = HtmlDocument::load(entry.path())?;
        if document.has_element(target) {
            debug!(document = %document.location(), element = target, "resolved hosting document");
            return Ok(document);
        }
    }

    debug!(candidates, element = target, "no hosting document matched");
    Err(GaugeError::DocumentNotFound(path.display().to_string()))
}
