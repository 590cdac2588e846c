//! Map backend document paths to documentation site URLs.
//!
//!   "isaac-platform/isaac-sim/index.mdx" → "/ai-native-book/docs/isaac-platform/isaac-sim"
//!   "intro.md"                           → "/ai-native-book/docs/intro"

const MARKDOWN_EXTENSIONS: [&str; 2] = [".mdx", ".md"];
const INDEX_SEGMENT: &str = "/index";

/// Convert a source `file_path` into a docs URL under `base_path`.
pub fn file_path_to_url(file_path: &str, base_path: &str) -> String {
    let mut path = file_path;
    for ext in MARKDOWN_EXTENSIONS {
        if let Some(stripped) = path.strip_suffix(ext) {
            path = stripped;
            break;
        }
    }
    let path = path.strip_suffix(INDEX_SEGMENT).unwrap_or(path);

    format!("{}/{}", base_path.trim_end_matches('/'), path)
}
