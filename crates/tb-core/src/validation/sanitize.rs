/// Strip everything that is not an ASCII letter or a space
pub fn sanitize_string(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}
