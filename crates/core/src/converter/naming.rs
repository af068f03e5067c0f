//! File name rules: which entries get converted and what their PNG is called.

/// Extensions converted when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".bmp", ".gif", ".tiff", ".webp"];

/// Extension appended to every output file.
pub const OUTPUT_EXTENSION: &str = ".png";

/// Returns true when the lowercased name ends with one of `extensions`.
pub fn is_recognized<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    let lower = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.as_ref().to_lowercase()))
}

/// Strips trailing `.<suffix>` segments until no dot remains.
///
/// Every suffix goes, not only the last one: `photo.v2.final.jpg` becomes
/// `photo`. Names starting with a dot have no base and return `None`.
pub fn base_name(file_name: &str) -> Option<&str> {
    if file_name.is_empty() || file_name.starts_with('.') {
        return None;
    }

    let mut base = file_name;
    while let Some((stem, _)) = base.rsplit_once('.') {
        base = stem;
    }
    Some(base)
}

/// Output file name for a source: its base name plus `.png`.
pub fn output_file_name(file_name: &str) -> Option<String> {
    base_name(file_name).map(|base| format!("{}{}", base, OUTPUT_EXTENSION))
}
