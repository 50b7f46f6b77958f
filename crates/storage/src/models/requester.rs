use std::fmt;

/// Who asked for a battle card. Part of the card's idempotency key together
/// with the contest id; `Anonymous` is stored as `NULL` and is a key of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Requester {
    #[default]
    Anonymous,
    User(String),
}

impl Requester {
    /// Blank ids are treated as no requester at all.
    pub fn from_optional(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self::User(id),
            _ => Self::Anonymous,
        }
    }

    /// Value bound to the nullable `created_by` column.
    pub fn as_column(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }
}

impl From<Option<String>> for Requester {
    fn from(id: Option<String>) -> Self {
        Self::from_optional(id)
    }
}

impl fmt::Display for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "anonymous"),
            Self::User(id) => write!(f, "user:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_ids_are_anonymous() {
        assert_eq!(Requester::from_optional(None), Requester::Anonymous);
        assert_eq!(Requester::from_optional(Some(String::new())), Requester::Anonymous);
        assert_eq!(Requester::from_optional(Some("  ".into())), Requester::Anonymous);
    }

    #[test]
    fn test_column_value() {
        assert_eq!(Requester::Anonymous.as_column(), None);
        assert_eq!(Requester::User("alice".into()).as_column(), Some("alice"));
    }
}
