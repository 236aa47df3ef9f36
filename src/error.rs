/// Errors from the algorithms in this crate.
///
/// Every failure is a broken caller contract, detected before any work is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Input the algorithm cannot run on, e.g. an empty sequence.
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = Error::invalid_argument("empty sequence");
        assert_eq!(e.to_string(), "invalid argument: empty sequence");
    }

    #[test]
    fn into_anyhow() {
        let res: anyhow::Result<()> = Err(Error::invalid_argument("x").into());
        assert!(res.unwrap_err().downcast_ref::<Error>().is_some());
    }
}
