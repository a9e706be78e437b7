use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashError {
    /// The state already holds a hash; call `reset` before writing again.
    #[error("lookup3 hashlittle can only be written to once")]
    AlreadyWritten,
}

pub type HashResult<T> = Result<T, HashError>;

impl From<HashError> for io::Error {
    fn from(err: HashError) -> Self {
        io::Error::other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_written_message() {
        assert_eq!(
            HashError::AlreadyWritten.to_string(),
            "lookup3 hashlittle can only be written to once"
        );
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = HashError::AlreadyWritten.into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<HashError>())
            .copied();
        assert_eq!(inner, Some(HashError::AlreadyWritten));
    }
}
