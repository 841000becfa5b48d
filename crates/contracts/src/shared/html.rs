/// Escapes text for insertion into HTML markup, including quoted and
/// unquoted attribute values.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}
