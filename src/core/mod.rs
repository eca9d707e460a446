pub mod collector;
mod collector_tests;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod tasks;

pub use errors::SkillviewError;
pub use models::{
    FieldName,
    Language,
    Skill,
    SkillFields,
    SkillId,
};
