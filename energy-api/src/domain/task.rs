use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Keyed background tasks. Scheduling under an existing key aborts the
/// still-pending task first, so a superseding action never races its
/// predecessor.
#[derive(Clone, Default)]
pub struct ScheduledTasks {
    tasks: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl ScheduledTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn schedule<F>(&self, key: &str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().await;
        if let Some(previous) = tasks.insert(key.to_string(), tokio::spawn(fut)) {
            previous.abort();
        }
    }

    pub async fn cancel(&self, key: &str) {
        if let Some(task) = self.tasks.lock().await.remove(key) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_aborts_previous() {
        let tasks = ScheduledTasks::new();
        let fired = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let fired = fired.clone();
            tasks
                .schedule("refresh", async move {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        // only the last scheduled task survived
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let tasks = ScheduledTasks::new();
        let fired = Arc::new(AtomicU32::new(0));

        let f = fired.clone();
        tasks
            .schedule("send", async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                f.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        tasks.cancel("send").await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
