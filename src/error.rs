use std::{error, fmt, io};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;

    #[test]
    fn from_io_error() {
        let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(error.message(), "I/O error: pipe closed");
        assert_eq!(error.to_string(), "I/O error: pipe closed");
    }
}
