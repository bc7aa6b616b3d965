/// Prefix of the core schema tags in canonical form.
pub(crate) const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

pub(crate) const TAG_NULL: &str = "!!null";
pub(crate) const TAG_NULL_CANONICAL: &str = "tag:yaml.org,2002:null";
pub(crate) const TAG_NULL_CANONICAL_ALT: &str = "tag:yaml.org,2002:!null";

pub(crate) const TAG_BOOL: &str = "!!bool";
pub(crate) const TAG_BOOL_CANONICAL: &str = "tag:yaml.org,2002:bool";
pub(crate) const TAG_BOOL_CANONICAL_ALT: &str = "tag:yaml.org,2002:!bool";

pub(crate) const TAG_INT: &str = "!!int";
pub(crate) const TAG_INT_CANONICAL: &str = "tag:yaml.org,2002:int";
pub(crate) const TAG_INT_CANONICAL_ALT: &str = "tag:yaml.org,2002:!int";

pub(crate) const TAG_FLOAT: &str = "!!float";
pub(crate) const TAG_FLOAT_CANONICAL: &str = "tag:yaml.org,2002:float";
pub(crate) const TAG_FLOAT_CANONICAL_ALT: &str = "tag:yaml.org,2002:!float";

pub(crate) const TAG_STR: &str = "!!str";
pub(crate) const TAG_STR_CANONICAL: &str = "tag:yaml.org,2002:str";
pub(crate) const TAG_STR_CANONICAL_ALT: &str = "tag:yaml.org,2002:!str";

/// One of the core scalar tags, or something else.
///
/// The parser renders a `!!x` tag with the secondary handle already resolved, so
/// each tag is matched in all the spellings it may arrive in. A verbatim tag
/// (`!<tag:yaml.org,2002:int>`) arrives with an extra leading `!`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CoreTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
    /// Local or application tag; ignored by scalar resolution.
    Other,
}

impl CoreTag {
    pub(crate) fn from_tag(tag: Option<&str>) -> Option<Self> {
        let t = tag?;
        let t = t
            .strip_prefix('!')
            .filter(|rest| rest.starts_with(CORE_TAG_PREFIX))
            .unwrap_or(t);
        Some(match t {
            TAG_NULL | TAG_NULL_CANONICAL | TAG_NULL_CANONICAL_ALT => CoreTag::Null,
            TAG_BOOL | TAG_BOOL_CANONICAL | TAG_BOOL_CANONICAL_ALT => CoreTag::Bool,
            TAG_INT | TAG_INT_CANONICAL | TAG_INT_CANONICAL_ALT => CoreTag::Int,
            TAG_FLOAT | TAG_FLOAT_CANONICAL | TAG_FLOAT_CANONICAL_ALT => CoreTag::Float,
            TAG_STR | TAG_STR_CANONICAL | TAG_STR_CANONICAL_ALT => CoreTag::Str,
            _ => CoreTag::Other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_spellings() {
        for t in [TAG_INT, TAG_INT_CANONICAL, TAG_INT_CANONICAL_ALT] {
            assert_eq!(CoreTag::from_tag(Some(t)), Some(CoreTag::Int));
        }
        assert_eq!(CoreTag::from_tag(Some("!!str")), Some(CoreTag::Str));
        assert_eq!(CoreTag::from_tag(Some("!int")), Some(CoreTag::Other));
        assert_eq!(CoreTag::from_tag(Some("!!timestamp")), Some(CoreTag::Other));
        assert_eq!(CoreTag::from_tag(None), None);
    }

    #[test]
    fn recognizes_verbatim_spelling() {
        assert_eq!(
            CoreTag::from_tag(Some("!tag:yaml.org,2002:int")),
            Some(CoreTag::Int)
        );
        assert_eq!(
            CoreTag::from_tag(Some("!tag:yaml.org,2002:!str")),
            Some(CoreTag::Str)
        );
        assert_eq!(
            CoreTag::from_tag(Some("!tag:example.com,2002:int")),
            Some(CoreTag::Other)
        );
    }
}
