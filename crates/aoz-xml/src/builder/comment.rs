use std::fmt::Display;

use crate::builder::value::accept;
use crate::builder::XmlText;

/// An XML comment, stored without surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comment {
    value: String,
}

impl Comment {
    /// Creates a comment from `value`, trimmed. Anything that is not a string
    /// yields an empty comment.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::Comment;
    /// let comment = Comment::new("  generated  ");
    /// assert_eq!(comment.render(), "<!-- generated -->");
    /// ```
    pub fn new<T>(value: T) -> Self
    where
        T: TryInto<XmlText>,
        T::Error: Display,
    {
        Self {
            value: accept::<_, XmlText>(value, "comment")
                .map(|text| trim(text.as_str()).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value<T>(&mut self, value: T) -> bool
    where
        T: TryInto<XmlText>,
        T::Error: Display,
    {
        let Some(text) = accept::<_, XmlText>(value, "comment") else {
            return false;
        };
        self.value = trim(text.as_str()).to_string();
        true
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

// Same character set as the classic C `trim`: no Unicode whitespace.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<!-- {} -->", self.value)
    }
}
