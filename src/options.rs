use crate::budget::Budget;

/// Decoder configuration.
///
/// Decoding is guarded by a [`Budget`] unless `budget` is set to `None`.
///
/// ```rust
/// use saphyr_value::{Budget, Options};
///
/// let options = saphyr_value::options! {
///     budget: Some(saphyr_value::budget! {
///         max_nodes: 16,
///     }),
/// };
/// let err = saphyr_value::decode_with_options(&"- x\n".repeat(32), options).unwrap_err();
/// assert_eq!(err.kind(), saphyr_value::ErrorKind::Resource);
///
/// // Unbounded decoding.
/// let _ = Options { budget: None };
/// # let _ = Budget::default();
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    /// Limits enforced on the raw parser events while decoding.
    pub budget: Option<Budget>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            budget: Some(Budget::default()),
        }
    }
}
