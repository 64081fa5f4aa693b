use sqlx::types::chrono;

// inline keyboard action attached to a bot message, stored as jsonb
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationAction {
    Url { text: String, url: String },
    Callback { text: String, data: String },
}

#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfigEntity {
    pub id: i64,
    pub name: String,
    pub template: String,
    pub actions: sqlx::types::Json<Vec<NotificationAction>>,
    pub enabled: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl NotificationConfigEntity {
    pub fn actions(&self) -> &[NotificationAction] {
        &self.actions.0
    }
}

pub struct NewNotificationConfigEntity {
    pub name: String,
    pub template: String,
    pub actions: Vec<NotificationAction>,
}

// status: 0 pending, 1 sent, 2 failed
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogEntity {
    pub id: i64,
    pub chat_id: String,
    pub content: String,
    pub status: i16,
    pub error: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SendProgressEntity {
    pub id: i64,
    pub job_id: String,
    pub batch_no: i64,
    pub sent: i64,
    pub failed: i64,
    pub total: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_shape() {
        let actions = vec![
            NotificationAction::Url {
                text: "打开面板".to_string(),
                url: "https://example.com/panel".to_string(),
            },
            NotificationAction::Callback {
                text: "续租".to_string(),
                data: "renew:42".to_string(),
            },
        ];

        let json = serde_json::to_string(&actions).unwrap();
        assert!(json.contains(r#""kind":"url""#));
        assert!(json.contains(r#""kind":"callback""#));

        let back: Vec<NotificationAction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actions);
    }

    #[test]
    fn test_action_rejects_unknown_kind() {
        let raw = r#"[{"kind":"popup","text":"x"}]"#;
        assert!(serde_json::from_str::<Vec<NotificationAction>>(raw).is_err());
    }
}
