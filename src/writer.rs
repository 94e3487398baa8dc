use crate::error::{GaugeError, Result};
use crate::surface::HtmlDocument;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Serialize)]
struct RollbackManifest {
    timestamp: String,
    scoregauge_version: String,
    document: String,
    prior_sha256: String,
}

/// Overwrites the hosting document in place, recording the prior
/// contents' hash in a rollback manifest first.
pub fn write_in_place(document: &HtmlDocument, prior_contents: &str) -> Result<PathBuf> {
    let parent = document
        .path()
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = parent.join(".scoregauge/backups");
    fs::create_dir_all(&dir).map_err(GaugeError::Io)?;

    let manifest = RollbackManifest {
        timestamp: Utc::now().to_rfc3339(),
        scoregauge_version: env!("CARGO_PKG_VERSION").to_string(),
        document: document.path().display().to_string(),
        prior_sha256: hex_digest(prior_contents),
    };

    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let manifest_path = dir.join(format!("manifest-{stamp}.json"));
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .map_err(GaugeError::Io)?;

    document.write_to(document.path())?;
    info!(document = %document.path().display(), manifest = %manifest_path.display(), "document rewritten in place");
    Ok(manifest_path)
}

fn hex_digest(contents: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawingSurface;
    use tempfile::TempDir;

    #[test]
    fn in_place_write_records_a_manifest_with_the_prior_hash() {
        let dir = TempDir::new().expect("temp dir should be created");
        let page = dir.path().join("results.html");
        fs::write(&page, "<html><body></body></html>").expect("page should write");

        let mut document = HtmlDocument::load(&page).expect("page should load");
        let prior = document.contents().to_string();
        document.attach_fragment("<script>gauge</script>");

        let manifest_path =
            write_in_place(&document, &prior).expect("in-place write should succeed");

        let rewritten = fs::read_to_string(&page).expect("page should reread");
        assert!(rewritten.contains("<script>gauge</script>"));

        let manifest = fs::read_to_string(&manifest_path).expect("manifest should read");
        assert!(manifest.contains("\"prior_sha256\""));
        assert!(manifest.contains("results.html"));
        assert!(manifest_path.starts_with(dir.path().join(".scoregauge/backups")));
    }

    #[test]
    fn hex_digest_is_stable_and_lowercase() {
        let digest = hex_digest("abc");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
