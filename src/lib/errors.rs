use failure::Fail;

/// The Error enum containing all Errors that may occur when running pkgbuildgen
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "Failed to read/write a file! Error: {}", _0)]
    File(String),
    #[fail(display = "Malformed package metadata! Error: {}", _0)]
    DataFormat(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::DataFormat(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::File(e.to_string())
    }
}
