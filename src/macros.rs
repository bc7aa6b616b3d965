//! Macros for building option structs from `Default` plus a few overrides.

/// Construct [`crate::Options`] from `Default` and a list of field assignments.
///
/// ```rust
/// let options = saphyr_value::options! {
///     budget: None,
/// };
/// assert!(options.budget.is_none());
/// ```
#[macro_export]
macro_rules! options {
    ( $( $field:ident : $value:expr ),* $(,)? ) => {{
        let mut opt = $crate::Options::default();
        $(
            opt.$field = $value;
        )*
        opt
    }};
}

/// Construct [`crate::SerializerOptions`] from `Default` and a list of field assignments.
///
/// ```rust
/// let opts = saphyr_value::serializer_options! {
///     indent_step: 4,
///     empty_as_braces: false,
/// };
/// assert_eq!(opts.indent_step, 4);
/// ```
#[macro_export]
macro_rules! serializer_options {
    ( $( $field:ident : $value:expr ),* $(,)? ) => {{
        let mut opt = $crate::SerializerOptions::default();
        $(
            opt.$field = $value;
        )*
        opt
    }};
}

/// Construct [`crate::Budget`] from `Default` and a list of field assignments.
///
/// ```rust
/// let budget = saphyr_value::budget! {
///     max_depth: 32,
///     max_nodes: 1_000,
/// };
/// assert_eq!(budget.max_depth, 32);
/// ```
#[macro_export]
macro_rules! budget {
    ( $( $field:ident : $value:expr ),* $(,)? ) => {{
        let mut b = $crate::Budget::default();
        $(
            b.$field = $value;
        )*
        b
    }};
}
