//! String-backed ID types for the taxonomy levels.
//!
//! Each ID type wraps a `String` to prevent cross-level confusion.
//! A `SubAreaId` cannot be accidentally used where a `DomainId` is expected.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Top-level taxonomy domain identifier.
    DomainId
);

define_id!(
    /// Sub-area identifier, unique across the catalog.
    SubAreaId
);

define_id!(
    /// Skill group identifier.
    SkillGroupId
);

define_id!(
    /// Leaf skill identifier encoding `domain/sub-area/skill-group/skill`.
    SkillId
);

impl SkillId {
    /// Split the encoded path into its segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The leading (domain) segment of the path.
    pub fn domain_segment(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_id_segments_follow_path() {
        let id = SkillId::from("d1/d1a/d1a1/s1");
        let parts: Vec<&str> = id.segments().collect();
        assert_eq!(parts, vec!["d1", "d1a", "d1a1", "s1"]);
        assert_eq!(id.domain_segment(), "d1");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = DomainId::from("d3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"d3\"");
    }
}
