use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use energy_database::entities::notification::NotificationAction;
use energy_database::repositories::notification::NotificationStore;
use futures::future::join_all;

use super::{render_template, NotificationPush};

// telegram throttles both per-bot and per-chat, these pacing values
// stay safely under the documented limits
pub const BATCH_SIZE: usize = 30;
const BATCH_DELAY: Duration = Duration::from_millis(1100);
const RECIPIENT_DELAY: Duration = Duration::from_millis(35);

#[derive(Debug, Clone)]
pub struct Recipient {
    pub chat_id: String,
    pub vars: HashMap<String, String>,
}

impl Recipient {
    pub fn new(chat_id: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            vars: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendReport {
    pub total: usize,
    pub total_sent: usize,
    pub total_failed: usize,
    pub batches: usize,
}

/// Delivers one rendered message to every recipient, in paced batches.
/// A single recipient failing never aborts its batch or the job; the
/// report carries independent per-recipient counts.
pub struct BulkSender {
    push: Arc<dyn NotificationPush>,
    store: Arc<dyn NotificationStore>,
    hourly_limit: i64,
}

impl BulkSender {
    pub fn new(
        push: Arc<dyn NotificationPush>,
        store: Arc<dyn NotificationStore>,
        hourly_limit: i64,
    ) -> Self {
        Self {
            push,
            store,
            hourly_limit,
        }
    }

    pub async fn send_bulk(
        &self,
        job_id: &str,
        template: &str,
        actions: &[NotificationAction],
        recipients: &[Recipient],
    ) -> Result<BulkSendReport, crate::ServiceError> {
        if recipients.is_empty() {
            return Err(crate::BusinessError::Notify(crate::NotifyError::NoRecipients).into());
        }

        let total = recipients.len();
        let mut total_sent = 0usize;
        let mut total_failed = 0usize;
        let mut batches = 0usize;

        for (batch_no, batch) in recipients.chunks(BATCH_SIZE).enumerate() {
            if batch_no > 0 {
                tokio::time::sleep(BATCH_DELAY).await;
            }

            let sends = batch
                .iter()
                .enumerate()
                .map(|(index, recipient)| self.send_one(index, recipient, template, actions));
            let results = join_all(sends).await;

            total_sent += results.iter().filter(|delivered| **delivered).count();
            total_failed += results.iter().filter(|delivered| !**delivered).count();
            batches += 1;

            // progress bookkeeping is auxiliary, a write failure must not
            // stop the remaining batches
            if let Err(err) = self
                .store
                .add_progress(
                    job_id,
                    batches as i64,
                    total_sent as i64,
                    total_failed as i64,
                    total as i64,
                )
                .await
            {
                tracing::warn!(job_id, batch = batches, ?err, "progress row write failed");
            }
        }

        tracing::info!(job_id, total, total_sent, total_failed, batches, "bulk send done");
        Ok(BulkSendReport {
            total,
            total_sent,
            total_failed,
            batches,
        })
    }

    async fn send_one(
        &self,
        index: usize,
        recipient: &Recipient,
        template: &str,
        actions: &[NotificationAction],
    ) -> bool {
        // stagger sends inside the batch
        tokio::time::sleep(RECIPIENT_DELAY * index as u32).await;

        let chat_id = recipient.chat_id.as_str();

        // rolling one hour window; the check and the later insert are
        // not atomic, concurrent jobs can overshoot by a few messages
        let since = energy_utils::time::now_minus_hours(1);
        match self.store.sent_count_since(chat_id, since).await {
            Ok(count) if count >= self.hourly_limit => {
                let reason = crate::NotifyError::RateLimited(chat_id.to_string()).to_string();
                self.record(chat_id, "", 2, Some(&reason)).await;
                return false;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(chat_id, ?err, "rate limit lookup failed, sending anyway");
            }
        }

        let content = render_template(template, &recipient.vars);
        match self.push.push(chat_id, &content, actions).await {
            Ok(()) => {
                self.record(chat_id, &content, 1, None).await;
                true
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(chat_id, %message, "notification delivery failed");
                self.record(chat_id, &content, 2, Some(&message)).await;
                false
            }
        }
    }

    async fn record(&self, chat_id: &str, content: &str, status: i16, error: Option<&str>) {
        if let Err(err) = self.store.add_log(chat_id, content, status, error).await {
            tracing::warn!(chat_id, ?err, "notification log write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use energy_database::entities::notification::NotificationLogEntity;
    use std::sync::Mutex;

    struct FakePush {
        fail_chats: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl NotificationPush for FakePush {
        async fn push(
            &self,
            chat_id: &str,
            _content: &str,
            _actions: &[NotificationAction],
        ) -> Result<(), crate::ServiceError> {
            self.calls.lock().unwrap().push(chat_id.to_string());
            if self.fail_chats.iter().any(|c| c == chat_id) {
                return Err(energy_transport::TransportError::NodeResponseError(
                    "blocked by user".to_string(),
                )
                .into());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeStore {
        logs: Mutex<Vec<(String, i16)>>,
        progress: Mutex<Vec<(i64, i64, i64, i64)>>,
        saturated_chats: Vec<String>,
    }

    #[async_trait::async_trait]
    impl NotificationStore for FakeStore {
        async fn add_log(
            &self,
            chat_id: &str,
            content: &str,
            status: i16,
            error: Option<&str>,
        ) -> Result<NotificationLogEntity, energy_database::Error> {
            self.logs.lock().unwrap().push((chat_id.to_string(), status));
            Ok(NotificationLogEntity {
                id: 0,
                chat_id: chat_id.to_string(),
                content: content.to_string(),
                status,
                error: error.map(str::to_string),
                created_at: Utc::now(),
            })
        }

        async fn sent_count_since(
            &self,
            chat_id: &str,
            _since: DateTime<Utc>,
        ) -> Result<i64, energy_database::Error> {
            if self.saturated_chats.iter().any(|c| c == chat_id) {
                Ok(i64::MAX)
            } else {
                Ok(0)
            }
        }

        async fn add_progress(
            &self,
            _job_id: &str,
            batch_no: i64,
            sent: i64,
            failed: i64,
            total: i64,
        ) -> Result<(), energy_database::Error> {
            self.progress
                .lock()
                .unwrap()
                .push((batch_no, sent, failed, total));
            Ok(())
        }
    }

    fn recipients(n: usize) -> Vec<Recipient> {
        (0..n).map(|i| Recipient::new(&format!("chat-{i}"))).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_65_users_make_three_batches() {
        let push = Arc::new(FakePush {
            fail_chats: vec!["chat-7".to_string(), "chat-40".to_string()],
            calls: Mutex::new(Vec::new()),
        });
        let store = Arc::new(FakeStore::default());
        let sender = BulkSender::new(push.clone(), store.clone(), 20);

        let report = sender
            .send_bulk("job-1", "hello", &[], &recipients(65))
            .await
            .unwrap();

        assert_eq!(report.batches, 3);
        assert_eq!(report.total, 65);
        assert_eq!(report.total_sent + report.total_failed, 65);
        assert_eq!(report.total_failed, 2);

        // one progress row per batch, final row covers the whole set
        let progress = store.progress.lock().unwrap();
        assert_eq!(progress.len(), 3);
        assert_eq!(progress[2].0, 3);
        assert_eq!(progress[2].1 + progress[2].2, 65);

        assert_eq!(push.calls.lock().unwrap().len(), 65);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_failure_does_not_abort_batch() {
        let push = Arc::new(FakePush {
            fail_chats: vec!["chat-0".to_string()],
            calls: Mutex::new(Vec::new()),
        });
        let store = Arc::new(FakeStore::default());
        let sender = BulkSender::new(push, store.clone(), 20);

        let report = sender
            .send_bulk("job-2", "hello", &[], &recipients(5))
            .await
            .unwrap();

        assert_eq!(report.total_sent, 4);
        assert_eq!(report.total_failed, 1);

        let logs = store.logs.lock().unwrap();
        assert_eq!(logs.len(), 5);
        assert_eq!(logs.iter().filter(|(_, status)| *status == 2).count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_chat_is_skipped() {
        let push = Arc::new(FakePush {
            fail_chats: Vec::new(),
            calls: Mutex::new(Vec::new()),
        });
        let store = Arc::new(FakeStore {
            saturated_chats: vec!["chat-1".to_string()],
            ..Default::default()
        });
        let sender = BulkSender::new(push.clone(), store, 20);

        let report = sender
            .send_bulk("job-3", "hello", &[], &recipients(3))
            .await
            .unwrap();

        assert_eq!(report.total_sent, 2);
        assert_eq!(report.total_failed, 1);
        // the saturated chat never reached the bot api
        assert!(!push.calls.lock().unwrap().contains(&"chat-1".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_recipients_rejected() {
        let push = Arc::new(FakePush {
            fail_chats: Vec::new(),
            calls: Mutex::new(Vec::new()),
        });
        let store = Arc::new(FakeStore::default());
        let sender = BulkSender::new(push, store, 20);

        assert!(sender.send_bulk("job-4", "hello", &[], &[]).await.is_err());
    }
}
