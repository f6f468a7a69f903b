//! Extension Normalizer
//!
//! Rewrites a path's extension to the fixed target extension.

/// Extension every processed path is normalized to
pub const TARGET_EXTENSION: &str = ".mkv";

/// Replace the path's extension with [`TARGET_EXTENSION`].
///
/// A path whose extension already matches, case-insensitively, is returned
/// unchanged. Paths with no extension get the target extension appended.
/// Idempotent.
pub fn normalize_extension(path: &str) -> String {
    let (base, ext) = split_extension(path);
    if ext.eq_ignore_ascii_case(TARGET_EXTENSION) {
        return path.to_string();
    }
    format!("{base}{TARGET_EXTENSION}")
}

/// Split into (base, extension) on the last `.` after the final `/`. The
/// extension includes its dot and is empty when the final segment has none.
/// A leading dot marks a hidden file, not an extension.
fn split_extension(path: &str) -> (&str, &str) {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    let name = &path[file_start..];
    match name.rfind('.') {
        Some(i) if i > 0 => path.split_at(file_start + i),
        _ => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_foreign_extension() {
        assert_eq!(
            normalize_extension("/root/movies/film.avi"),
            "/root/movies/film.mkv"
        );
    }

    #[test]
    fn already_normalized_path_is_unchanged() {
        assert_eq!(normalize_extension("/a/b.mkv"), "/a/b.mkv");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(normalize_extension("/a/b.MKV"), "/a/b.MKV");
        assert_eq!(normalize_extension("/a/b.Mkv"), "/a/b.Mkv");
    }

    #[test]
    fn missing_extension_gets_target_appended() {
        assert_eq!(normalize_extension("/a/video"), "/a/video.mkv");
    }

    #[test]
    fn dot_in_directory_name_is_not_an_extension() {
        assert_eq!(
            normalize_extension("/season.1/episode"),
            "/season.1/episode.mkv"
        );
    }

    #[test]
    fn hidden_file_gets_target_appended() {
        assert_eq!(normalize_extension("/a/.hidden"), "/a/.hidden.mkv");
    }

    #[test]
    fn only_last_extension_is_replaced() {
        assert_eq!(normalize_extension("/a/show.s01e01.avi"), "/a/show.s01e01.mkv");
    }

    #[test]
    fn normalization_is_idempotent() {
        for path in ["/a/b.avi", "/a/b.mkv", "/a/b.MKV", "/a/video", "/a/.hidden"] {
            let once = normalize_extension(path);
            assert_eq!(normalize_extension(&once), once);
        }
    }
}
