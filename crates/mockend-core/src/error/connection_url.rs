use super::Error;

/// The connection URL does not start with a scheme any driver understands.
#[derive(Debug)]
pub(super) struct UnsupportedConnectionUrl {
    url: Box<str>,
}

/// The scheme is supported, but the rest of the URL cannot be used.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    message: Box<str>,
}

impl Error {
    pub fn unsupported_connection_url(url: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedConnectionUrl(
            UnsupportedConnectionUrl {
                url: url.into().into(),
            },
        ))
    }

    pub fn is_unsupported_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedConnectionUrl(_))
    }

    pub fn invalid_connection_url(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrl {
                message: message.into().into(),
            },
        ))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}

impl std::fmt::Display for UnsupportedConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported connection URL: {}", self.url)
    }
}

impl std::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid connection URL: {}", self.message)
    }
}
