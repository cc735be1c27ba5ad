//! Site-relative URLs from source-relative file paths.

/// Derive the URL of a content file from its path relative to the source.
///
/// The directory is kept and the extension dropped. An `index` file maps
/// to its directory (`/` at the top level).
///
/// # Examples
///
/// ```
/// use weft::transform::url_from_path;
///
/// assert_eq!(url_from_path("blog/hello.md"), "blog/hello");
/// assert_eq!(url_from_path("index.md"), "/");
/// assert_eq!(url_from_path("blog/index.md"), "blog/");
/// ```
pub fn url_from_path(rel_source_path: &str) -> String {
    let (dir, file) = match rel_source_path.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", rel_source_path),
    };
    let stem = file_stem(file);
    let name = if stem == "index" { "/" } else { stem };

    join_normalized(dir, name)
}

/// File name without its last extension. Dotfiles keep their name.
fn file_stem(file: &str) -> &str {
    match file.rfind('.') {
        Some(0) | None => file,
        Some(pos) => &file[..pos],
    }
}

/// Join two path parts with `/` and normalize the result.
///
/// `.` segments and empty segments are dropped and `..` consumes the
/// previous segment. A trailing slash on the last part is kept.
fn join_normalized(dir: &str, name: &str) -> String {
    let joined = if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    };

    let absolute = joined.starts_with('/');
    let trailing = joined.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut url = segments.join("/");
    if absolute {
        url.insert(0, '/');
    }
    if trailing && !url.ends_with('/') {
        url.push('/');
    }
    if url.is_empty() {
        url.push('.');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file() {
        assert_eq!(url_from_path("blog/hello.md"), "blog/hello");
        assert_eq!(url_from_path("about.json"), "about");
    }

    #[test]
    fn test_index_files() {
        assert_eq!(url_from_path("index.md"), "/");
        assert_eq!(url_from_path("blog/index.md"), "blog/");
        assert_eq!(url_from_path("a/b/index.mdx"), "a/b/");
    }

    #[test]
    fn test_only_last_extension_dropped() {
        assert_eq!(url_from_path("data/archive.tar.json"), "data/archive.tar");
        assert_eq!(url_from_path("notes/readme"), "notes/readme");
    }

    #[test]
    fn test_dotfile_keeps_name() {
        assert_eq!(url_from_path("conf/.hidden"), "conf/.hidden");
    }

    #[test]
    fn test_normalizes_segments() {
        assert_eq!(url_from_path("./a.md"), "a");
        assert_eq!(url_from_path("blog//x/../hello.md"), "blog/hello");
        assert_eq!(url_from_path("../up.md"), "../up");
    }

    #[test]
    fn test_data_object_path() {
        assert_eq!(
            url_from_path("content/data/authors/john.json"),
            "content/data/authors/john"
        );
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(url_from_path(""), ".");
    }
}
