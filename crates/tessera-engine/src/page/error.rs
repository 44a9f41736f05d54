use std::fmt;

/// Error produced while reading the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// The page is not well-formed XML.
    Xml(String),
    /// No element carries the requested id.
    MissingElement { id: String },
    /// The element exists but has an unexpected tag.
    WrongElement { id: String, expected: &'static str, found: String },
    /// An attribute value could not be interpreted.
    InvalidAttribute { id: String, name: &'static str, value: String },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Xml(msg) => write!(f, "page is not well-formed: {msg}"),
            PageError::MissingElement { id } => write!(f, "no element with id `{id}`"),
            PageError::WrongElement { id, expected, found } => {
                write!(f, "element `{id}` is a <{found}>, expected <{expected}>")
            }
            PageError::InvalidAttribute { id, name, value } => {
                write!(f, "element `{id}` has invalid {name}=\"{value}\"")
            }
        }
    }
}

impl std::error::Error for PageError {}
