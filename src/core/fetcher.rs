use std::future::Future;

use futures::future::join_all;
use reqwest::Client;

use crate::core::{
    models::{
        Language,
        SkillFields,
        SkillId,
    },
    SkillviewError,
};

/// Origin of the rendered site. The translation resources live next to the
/// pages, so a local static-site preview works out of the box.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// One settled fetch attempt: the skill it was for and the translated
/// document, if the attempt produced one.
pub type FetchOutcome = (SkillId, Option<SkillFields>);

pub fn translation_url(base: &str, lang: Language, id: &str) -> String {
    format!("{}/data/translations/{}/skill/{}.json", base.trim_end_matches('/'), lang.tag(), id)
}

/// Fetches one skill's translated document. An HTTP error status, a transport
/// error, and a body that fails to decode all count as failures.
pub async fn fetch_translation(
    client: &Client,
    base: &str,
    id: &str,
) -> Result<SkillFields, SkillviewError> {
    let url = translation_url(base, Language::English, id);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(SkillviewError::Custom(format!("HTTP {} from {}", response.status(), url)));
    }

    Ok(response.json::<SkillFields>().await?)
}

/// Joins N independent fetch attempts. Every future runs concurrently and the
/// aggregate resolves only once all of them have settled; a failed attempt
/// never aborts the rest.
pub async fn settle_all<F>(fetches: Vec<F>) -> Vec<FetchOutcome>
where
    F: Future<Output = FetchOutcome>,
{
    join_all(fetches).await
}

pub fn translated_count(outcomes: &[FetchOutcome]) -> usize {
    outcomes.iter().filter(|(_, fields)| fields.is_some()).count()
}

/// Issues one fetch per skill, all concurrently, and waits for every attempt
/// to settle. Failures are logged and reported as `None`.
pub async fn fetch_all(client: &Client, base: &str, ids: &[SkillId]) -> Vec<FetchOutcome> {
    let fetches: Vec<_> = ids
        .iter()
        .map(|id| {
            let client = client.clone();
            let base = base.to_string();
            let id = id.clone();
            async move {
                match fetch_translation(&client, &base, &id).await {
                    Ok(fields) => (id, Some(fields)),
                    Err(e) => {
                        eprintln!("Translation fetch failed for skill {}: {}", id, e);
                        (id, None)
                    }
                }
            }
        })
        .collect();

    settle_all(fetches).await
}
