//! Player input, decoded once at the boundary

/// A single key action understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Delete,
    Submit,
}

impl KeyInput {
    /// Accept an ASCII letter, folded to lowercase
    #[must_use]
    pub fn letter(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_lowercase()))
    }

    /// Decode a key name as an on-screen keyboard would report it
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_key_name("Enter"), Some(KeyInput::Submit));
    /// assert_eq!(KeyInput::from_key_name("Q"), Some(KeyInput::Letter('q')));
    /// assert_eq!(KeyInput::from_key_name("F1"), None);
    /// ```
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Submit),
            "backspace" | "delete" | "on_delete" => Some(Self::Delete),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::letter(ch),
                    _ => None,
                }
            }
        }
    }
}
