//! Download-artifact resolution.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::workflow::DownloadDescriptor;

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is
/// escaped (the `encodeURIComponent` set). The descriptor's fields are
/// opaque server-assigned identifiers and may contain path-unsafe
/// characters, so each segment is encoded independently.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the retrieval address for an artifact. Pure; callers only hold a
/// descriptor when the last submission succeeded, so calling this in any
/// other state is a bug on their side, not a user-facing error.
pub fn resolve_download_url(base_url: &str, artifact: &DownloadDescriptor) -> String {
    format!(
        "{}/api/download/{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(&artifact.server_path, COMPONENT),
        utf8_percent_encode(&artifact.download_name, COMPONENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(server_path: &str, download_name: &str) -> DownloadDescriptor {
        DownloadDescriptor {
            server_path: server_path.into(),
            download_name: download_name.into(),
        }
    }

    #[test]
    fn plain_identifiers_pass_through() {
        let url = resolve_download_url(
            "http://localhost:5000",
            &descriptor("abc", "doc_summary.txt"),
        );
        assert_eq!(url, "http://localhost:5000/api/download/abc/doc_summary.txt");
    }

    #[test]
    fn path_unsafe_characters_are_escaped_per_segment() {
        let url = resolve_download_url(
            "http://localhost:5000/",
            &descriptor("out dir/run 1", "my summary.txt"),
        );
        assert_eq!(
            url,
            "http://localhost:5000/api/download/out%20dir%2Frun%201/my%20summary.txt"
        );
    }

    #[test]
    fn unreserved_marks_survive_unescaped() {
        let url = resolve_download_url("http://h", &descriptor("a~b", "it's(1).txt"));
        assert!(url.ends_with("/a~b/it's(1).txt"));
    }
}
