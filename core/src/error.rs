use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Message(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
    Xml(roxmltree::Error),
    CannotParse(String),
    /// Element or attribute name that is not a valid XML name.
    InvalidName(String),
    ExpectedElement(String),
    /// Index of the value that was requested past the end of an archive.
    ArchiveExhausted(usize),
}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Message(msg) => formatter.write_str(msg),
            Error::Io(error) => write!(formatter, "io error: {}", error),
            Error::Json(error) => write!(formatter, "json error: {}", error),
            Error::Encode(error) => write!(formatter, "binary encode error: {}", error),
            Error::Decode(error) => write!(formatter, "binary decode error: {}", error),
            Error::Xml(error) => write!(formatter, "xml error: {}", error),
            Error::CannotParse(text) => write!(formatter, "cannot parse: {:?}", text),
            Error::InvalidName(name) => write!(formatter, "invalid xml name: {:?}", name),
            Error::ExpectedElement(name) => write!(formatter, "expected element `{}`", name),
            Error::ArchiveExhausted(index) => {
                write!(formatter, "archive has no value at index {}", index)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::Json(error) => Some(error),
            Error::Encode(error) => Some(error),
            Error::Decode(error) => Some(error),
            Error::Xml(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<bincode::error::EncodeError> for Error {
    fn from(error: bincode::error::EncodeError) -> Self {
        Error::Encode(error)
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(error: bincode::error::DecodeError) -> Self {
        Error::Decode(error)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(error: roxmltree::Error) -> Self {
        Error::Xml(error)
    }
}
