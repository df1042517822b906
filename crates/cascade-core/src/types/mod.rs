//! Identifier and collection types.

pub mod collections;
pub mod identifiers;

pub use identifiers::{DomainId, SkillGroupId, SkillId, SubAreaId};
