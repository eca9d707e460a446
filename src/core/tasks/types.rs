use crate::core::models::{
    Skill,
    SkillFields,
    SkillId,
};

pub type PageLoadResult = Result<Vec<Skill>, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    LoadingMessage { generation: u64, message: String },

    PageLoaded { generation: u64, result: PageLoadResult },

    /// One skill's translation arrived. Sent as each fetch resolves, before
    /// the aggregate settles.
    TranslationFetched { generation: u64, skill_id: SkillId, fields: SkillFields },

    /// Every fetch attempt has settled. Sent exactly once per batch with the
    /// number of skills that acquired a translation.
    TranslationsSettled { generation: u64, translated: usize },
}

impl TaskResult {
    /// The page load this result belongs to. Opening a new page bumps the
    /// generation, so results still in flight for the old page are dropped
    /// instead of leaking into the new one.
    pub fn generation(&self) -> u64 {
        match self {
            TaskResult::LoadingMessage { generation, .. }
            | TaskResult::PageLoaded { generation, .. }
            | TaskResult::TranslationFetched { generation, .. }
            | TaskResult::TranslationsSettled { generation, .. } => *generation,
        }
    }
}
