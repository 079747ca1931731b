//! Zip packaging of every export artifact

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{export_to_css, export_to_javascript, export_to_scss, export_to_tailwind, generate_guide};
use crate::designs::DesignSystem;
use crate::error::Result;

/// Archive members in write order, with the description the guide lists
pub const EXPORT_FILES: &[(&str, &str)] = &[
    ("design-tokens.json", "Original design system definition"),
    ("css-variables.css", "CSS custom properties (use in any project)"),
    ("scss-variables.scss", "SCSS variables (for SCSS projects)"),
    ("tailwind.config.js", "Tailwind configuration (for Tailwind projects)"),
    ("design-tokens.js", "JavaScript/TypeScript module"),
    ("AI-IMPLEMENTATION-GUIDE.md", "This file"),
];

/// `{id}-design-system.zip`
pub fn export_file_name(system: &DesignSystem) -> String {
    format!("{}-design-system.zip", system.id)
}

/// Build the zip archive in memory
#[instrument(name = "create_export_package", skip_all, fields(system_id = %system.id))]
pub fn create_export_package(system: &DesignSystem) -> Result<Vec<u8>> {
    // Source document as loaded, unmodelled fields included
    let json = system
        .document()
        .and_then(|document| serde_json::to_string_pretty(&document))
        .map_err(std::io::Error::from)?;
    let contents = [
        json,
        export_to_css(system),
        export_to_scss(system),
        export_to_tailwind(system),
        export_to_javascript(system),
        generate_guide(system),
    ];

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for ((name, _), content) in EXPORT_FILES.iter().zip(contents.iter()) {
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    info!(bytes = bytes.len(), files = EXPORT_FILES.len(), "Export package built");
    Ok(bytes)
}

/// Build the archive and write it to `dir/{id}-design-system.zip`.
///
/// The archive is fully built before anything touches the disk, and it is
/// written under a temporary name first, so a failed export leaves no file behind.
pub fn write_export_package(system: &DesignSystem, dir: &Path) -> Result<PathBuf> {
    let bytes = create_export_package(system)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(system));
    let partial = path.with_extension("zip.partial");

    if let Err(e) = fs::write(&partial, &bytes).and_then(|_| fs::rename(&partial, &path)) {
        warn!(error = %e, path = %partial.display(), "Export write failed, removing partial file");
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }

    info!(
        event_type = "export_created",
        system_id = %system.id,
        path = %path.display(),
        bytes = bytes.len(),
        "Exported design system"
    );
    Ok(path)
}
