use std::fmt;

/// Failure reading or writing a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound { kind: &'static str, id: String },
    Encode(String),
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} {id} not found"),
            Self::Encode(e) => write!(f, "Encode error: {e}"),
            Self::Decode(e) => write!(f, "Decode error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub(crate) fn encode<T: serde::Serialize>(doc: &T) -> Result<Vec<u8>, StoreError> {
    rmp_serde::to_vec_named(doc).map_err(|e| StoreError::Encode(e.to_string()))
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    rmp_serde::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = StoreError::NotFound {
            kind: "match",
            id: "m1".to_string(),
        };
        assert_eq!(err.to_string(), "match m1 not found");
    }

    #[test]
    fn decode_garbage_is_an_error() {
        let result: Result<fairway_core::player::Player, _> = decode(&[0xc1]);
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }
}
