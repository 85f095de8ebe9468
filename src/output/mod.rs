// Output formatting — terminal display and the copy-all text.

pub mod terminal;

/// Space-joined hashtags, ready to paste into a post.
pub fn copy_text(hashtags: &[String]) -> String {
    hashtags.join(" ")
}
