// Hashtag normalization shared by the local and remote paths.

use std::collections::HashSet;

/// Prefix `#` unless the tag already carries one.
pub fn with_hash(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

/// Turn raw candidate tags into a final hashtag list.
///
/// Prefixes `#`, drops empty candidates, removes exact duplicates keeping the
/// first occurrence, and truncates to `count`.
pub fn finalize<I, S>(tags: I, count: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for tag in tags {
        if result.len() >= count {
            break;
        }
        let tag = tag.as_ref();
        if tag.is_empty() || tag == "#" {
            continue;
        }
        let tagged = with_hash(tag);
        if seen.insert(tagged.clone()) {
            result.push(tagged);
        }
    }

    result
}
