use energy_database::entities::notification::NotificationAction;
use energy_transport::client::HttpClient;
use serde_json::json;

#[async_trait::async_trait]
pub trait NotificationPush: Send + Sync {
    async fn push(
        &self,
        chat_id: &str,
        content: &str,
        actions: &[NotificationAction],
    ) -> Result<(), crate::ServiceError>;
}

#[derive(Debug, serde::Deserialize)]
struct BotApiResp {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramPush {
    client: HttpClient,
    bot_token: String,
}

impl TelegramPush {
    pub fn new(api_url: &str, bot_token: &str) -> Result<Self, crate::ServiceError> {
        Ok(Self {
            client: HttpClient::new(api_url, None)?,
            bot_token: bot_token.to_string(),
        })
    }

    fn inline_keyboard(actions: &[NotificationAction]) -> serde_json::Value {
        let buttons: Vec<serde_json::Value> = actions
            .iter()
            .map(|action| match action {
                NotificationAction::Url { text, url } => json!({ "text": text, "url": url }),
                NotificationAction::Callback { text, data } => {
                    json!({ "text": text, "callback_data": data })
                }
            })
            .collect();
        json!({ "inline_keyboard": [buttons] })
    }
}

#[async_trait::async_trait]
impl NotificationPush for TelegramPush {
    async fn push(
        &self,
        chat_id: &str,
        content: &str,
        actions: &[NotificationAction],
    ) -> Result<(), crate::ServiceError> {
        let endpoint = format!("bot{}/sendMessage", self.bot_token);

        let mut body = json!({
            "chat_id": chat_id,
            "text": content,
            "parse_mode": "HTML",
        });
        if !actions.is_empty() {
            body["reply_markup"] = Self::inline_keyboard(actions);
        }

        let resp = self
            .client
            .post(&endpoint)
            .json(body)
            .send::<BotApiResp>()
            .await?;

        if !resp.ok {
            let description = resp.description.unwrap_or_else(|| "unknown".to_string());
            return Err(energy_transport::TransportError::NodeResponseError(description).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_keyboard_shape() {
        let actions = vec![
            NotificationAction::Url {
                text: "面板".to_string(),
                url: "https://example.com".to_string(),
            },
            NotificationAction::Callback {
                text: "续租".to_string(),
                data: "renew:1".to_string(),
            },
        ];

        let keyboard = TelegramPush::inline_keyboard(&actions);
        let row = &keyboard["inline_keyboard"][0];
        assert_eq!(row[0]["url"], "https://example.com");
        assert_eq!(row[1]["callback_data"], "renew:1");
    }
}
