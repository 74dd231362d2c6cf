//! 1337sp3@k substitution: a=@, e=3, i=!, l=1, o=0, t=7.

/// Maps one character, ignoring case. Unmapped characters pass through.
pub fn leet_char(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' => '@',
        'e' => '3',
        'i' => '!',
        'l' => '1',
        'o' => '0',
        't' => '7',
        _ => c,
    }
}

/// Applies the substitution to every character of `text`, pads and separators
/// included. The character count never changes.
pub fn eleet(text: &str) -> String {
    text.chars().map(leet_char).collect()
}
