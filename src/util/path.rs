use std::env;
use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR`, and `${VAR}` in a path.
///
/// Unresolvable variables are left as-is rather than failing; a literal
/// path is always returned.
pub fn expand_user(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}

/// Render `path` relative to the current directory for display.
///
/// Falls back to the path unchanged when no relative form exists (different
/// roots, unknown cwd).
pub fn relative_to_cwd(path: &Path) -> PathBuf {
    if path.is_relative() {
        return path.to_path_buf();
    }
    env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, &cwd))
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_passes_through() {
        let p = Path::new("output/wbs-map.png");
        assert_eq!(relative_to_cwd(p), PathBuf::from("output/wbs-map.png"));
    }

    #[test]
    fn absolute_path_under_cwd_becomes_relative() {
        let cwd = env::current_dir().unwrap();
        let p = cwd.join("output").join("wbs-map.md");
        assert_eq!(relative_to_cwd(&p), PathBuf::from("output/wbs-map.md"));
    }
}
