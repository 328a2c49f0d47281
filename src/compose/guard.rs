/// True when the message has nothing but blank lines and lines starting with `comment_prefix`,
/// i.e. the user has not written anything yet.
pub fn is_empty_message(text: &str, comment_prefix: &str) -> bool {
    text.split('\n')
        .all(|line| line.is_empty() || line.starts_with(comment_prefix))
}
