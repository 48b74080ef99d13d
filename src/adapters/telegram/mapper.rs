//! Map Bot API payloads to domain entities.
//!
//! Every Bot API response is wrapped in `{ ok, result | error_code, description }`.

use crate::domain::{BotIdentity, ChatInfo, ChatType, DomainError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<u16>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseParameters {
    pub retry_after: Option<u64>,
}

/// Subset of `ChatFullInfo` used by the report.
#[derive(Debug, Deserialize)]
pub struct ChatDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub invite_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

/// Unwrap the envelope. `method` only labels the error; it never contains the token.
pub fn unwrap_response<T>(method: &str, response: ApiResponse<T>) -> Result<T, DomainError> {
    unwrap_envelope(method, response, false)
}

/// Unwrap the answer to a credential check (`getMe`). A malformed token answers
/// 404 rather than 401, so both count as a rejected credential.
pub fn unwrap_credential_check<T>(
    method: &str,
    response: ApiResponse<T>,
) -> Result<T, DomainError> {
    unwrap_envelope(method, response, true)
}

fn unwrap_envelope<T>(
    method: &str,
    response: ApiResponse<T>,
    not_found_is_auth: bool,
) -> Result<T, DomainError> {
    if response.ok {
        return response
            .result
            .ok_or_else(|| DomainError::Gateway(format!("{}: ok response without result", method)));
    }
    let description = response
        .description
        .unwrap_or_else(|| "no description".to_string());
    match response.error_code {
        Some(429) => Err(DomainError::FloodWait {
            seconds: response
                .parameters
                .and_then(|p| p.retry_after)
                .unwrap_or(0),
        }),
        Some(401) => Err(DomainError::Auth(description)),
        Some(404) if not_found_is_auth => Err(DomainError::Auth(description)),
        Some(code) => Err(DomainError::Gateway(format!(
            "{}: {} {}",
            method, code, description
        ))),
        None => Err(DomainError::Gateway(format!("{}: {}", method, description))),
    }
}

/// Private chats carry no title; their display name stands in for it.
pub fn chat_to_domain(dto: ChatDto) -> ChatInfo {
    let is_private = dto.kind == ChatType::Private;
    let title = dto.title.filter(|t| !t.trim().is_empty()).or_else(|| {
        if !is_private {
            return None;
        }
        let name = [dto.first_name.as_deref(), dto.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    });
    ChatInfo {
        id: dto.id,
        title,
        username: dto.username,
        invite_link: dto.invite_link,
    }
}

pub fn user_to_identity(dto: UserDto) -> BotIdentity {
    BotIdentity {
        id: dto.id,
        first_name: dto.first_name,
        username: dto.username,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(json: &str) -> ApiResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn supergroup_maps_to_chat_info() {
        let r: ApiResponse<ChatDto> = parse(
            r#"{"ok":true,"result":{"id":-1001234567890,"type":"supergroup","title":"Rust BR",
                "username":"rustbr","invite_link":"https://t.me/+xyz","accent_color_id":3}}"#,
        );
        let chat = chat_to_domain(unwrap_response("getChat", r).unwrap());
        assert_eq!(chat.id, -1001234567890);
        assert_eq!(chat.title.as_deref(), Some("Rust BR"));
        assert_eq!(chat.username.as_deref(), Some("rustbr"));
        assert_eq!(chat.invite_link.as_deref(), Some("https://t.me/+xyz"));
    }

    #[test]
    fn private_chat_uses_display_name() {
        let r: ApiResponse<ChatDto> = parse(
            r#"{"ok":true,"result":{"id":99,"type":"private","first_name":"Ana","last_name":"Lima"}}"#,
        );
        let chat = chat_to_domain(unwrap_response("getChat", r).unwrap());
        assert_eq!(chat.title.as_deref(), Some("Ana Lima"));
    }

    #[test]
    fn untitled_group_keeps_no_title() {
        let r: ApiResponse<ChatDto> = parse(
            r#"{"ok":true,"result":{"id":-5,"type":"group","first_name":"Stray"}}"#,
        );
        let chat = chat_to_domain(unwrap_response("getChat", r).unwrap());
        assert!(chat.title.is_none());
    }

    #[test]
    fn member_count_result() {
        let r: ApiResponse<u64> = parse(r#"{"ok":true,"result":1234}"#);
        assert_eq!(unwrap_response("getChatMemberCount", r).unwrap(), 1234);
    }

    #[test]
    fn bad_request_is_gateway_error() {
        let r: ApiResponse<ChatDto> =
            parse(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#);
        let err = unwrap_response("getChat", r).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Telegram gateway error: getChat: 400 Bad Request: chat not found"
        );
    }

    #[test]
    fn unauthorized_is_auth_error() {
        let r: ApiResponse<UserDto> =
            parse(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#);
        assert!(matches!(
            unwrap_response("getMe", r),
            Err(DomainError::Auth(_))
        ));
    }

    #[test]
    fn not_found_is_auth_only_for_credential_check() {
        let not_found = r#"{"ok":false,"error_code":404,"description":"Not Found"}"#;
        let me: ApiResponse<UserDto> = parse(not_found);
        assert!(matches!(
            unwrap_credential_check("getMe", me),
            Err(DomainError::Auth(_))
        ));
        let chat: ApiResponse<ChatDto> = parse(not_found);
        assert!(matches!(
            unwrap_response("getChat", chat),
            Err(DomainError::Gateway(_))
        ));
    }

    #[test]
    fn credential_check_keeps_other_failures() {
        let r: ApiResponse<UserDto> = parse(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":3}}"#,
        );
        assert!(matches!(
            unwrap_credential_check("getMe", r),
            Err(DomainError::FloodWait { seconds: 3 })
        ));
    }

    #[test]
    fn too_many_requests_is_flood_wait() {
        let r: ApiResponse<String> = parse(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 17",
                "parameters":{"retry_after":17}}"#,
        );
        assert!(matches!(
            unwrap_response("exportChatInviteLink", r),
            Err(DomainError::FloodWait { seconds: 17 })
        ));
    }

    #[test]
    fn bot_identity() {
        let r: ApiResponse<UserDto> = parse(
            r#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"Reporter","username":"rep_bot"}}"#,
        );
        let me = user_to_identity(unwrap_response("getMe", r).unwrap());
        assert_eq!(me.id, 42);
        assert_eq!(me.username.as_deref(), Some("rep_bot"));
    }
}
