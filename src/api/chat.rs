//! Chat Endpoints
//!
//! History is paginated newest-first by the server; [`list`] reverses it so
//! pages always render chronologically.

use web_sys::{File, FormData};

use super::client::{self, ApiError};
use super::models::ChatMessage;

/// Fetch the most recent messages with `other_id`, oldest first.
pub async fn list(other_id: i64, limit: usize) -> Result<Vec<ChatMessage>, ApiError> {
    let page: Vec<ChatMessage> =
        client::get_list(&format!("/chat/{}/?limit={}", other_id, limit)).await?;
    Ok(to_chronological(page))
}

/// Send a message with text and/or an attachment. The endpoint accepts a
/// file, so the body is always multipart.
pub async fn send(
    other_id: i64,
    text: &str,
    file: Option<&File>,
) -> Result<ChatMessage, ApiError> {
    let form = FormData::new().unwrap();
    if !text.is_empty() {
        let _ = form.append_with_str("text", text);
    }
    if let Some(file) = file {
        let _ = form.append_with_blob("file", file);
    }
    client::post_form(&format!("/chat/{}/", other_id), form).await
}

fn to_chronological(mut newest_first: Vec<ChatMessage>) -> Vec<ChatMessage> {
    newest_first.reverse();
    newest_first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i64) -> ChatMessage {
        ChatMessage {
            id,
            sender_id: 1,
            recipient_id: 2,
            text: Some(format!("m{}", id)),
            file_url: None,
            created_at: format!("2026-01-0{}T00:00:00Z", id),
        }
    }

    #[test]
    fn test_reverses_server_pagination_to_chronological() {
        let page = vec![msg(3), msg(2), msg(1)];
        let ordered = to_chronological(page);
        let ids: Vec<i64> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
