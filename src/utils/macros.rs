#[macro_export]
macro_rules! from_error {
    ($from:ty, $to_variant:ident) => {
        impl From<$from> for $crate::utils::error::CollectionError {
            fn from(err: $from) -> Self {
                $crate::utils::error::CollectionError::$to_variant(err)
            }
        }
    };
}

/// Unwraps a nullable insertion argument, failing with `InvalidArgument`
/// before the container is touched.
#[macro_export]
macro_rules! require_present {
    ($item:expr) => {
        match $item {
            Some(item) => item,
            None => return Err($crate::utils::error::CollectionError::InvalidArgument),
        }
    };
}
