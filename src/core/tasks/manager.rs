use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use reqwest::Client;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    collector,
    fetcher::{
        fetch_translation,
        settle_all,
        translated_count,
    },
    models::SkillId,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_page(&self, path: PathBuf, generation: u64) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage {
                generation,
                message: format!("Reading {}...", path.display()),
            });

            let result = collector::load_page(&path).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::PageLoaded { generation, result });
        });
    }

    /// Fires one fetch per skill, all concurrently, and reports the settled
    /// aggregate once every attempt has finished. Results carry the caller's
    /// generation so an abandoned batch can be told apart from the live one.
    pub fn fetch_translations(&self, base_url: String, ids: Vec<SkillId>, generation: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let translated = runtime.block_on(async {
                let client = Client::new();

                let fetches: Vec<_> = ids
                    .iter()
                    .map(|id| {
                        let client = client.clone();
                        let base = base_url.clone();
                        let id = id.clone();
                        let sender = sender.clone();
                        async move {
                            match fetch_translation(&client, &base, &id).await {
                                Ok(fields) => {
                                    let _ = sender.send(TaskResult::TranslationFetched {
                                        generation,
                                        skill_id: id.clone(),
                                        fields: fields.clone(),
                                    });
                                    (id, Some(fields))
                                }
                                Err(e) => {
                                    eprintln!(
                                        "Translation fetch failed for skill {}: {}",
                                        id, e
                                    );
                                    (id, None)
                                }
                            }
                        }
                    })
                    .collect();

                let outcomes = settle_all(fetches).await;
                translated_count(&outcomes)
            });

            let _ = sender.send(TaskResult::TranslationsSettled { generation, translated });
        });
    }
}
