//! Domain error to HTTP response mapping with bilingual messages.

use actix_web::{http::header, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use aw_core::errors::{AuthError, DomainError, WatchlistError};
use aw_shared::types::response::ErrorBody;

use crate::middleware::request_id::request_id;

/// Language preference for error messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    English,
    Chinese,
}

/// Detect language preference from the Accept-Language header
///
/// Example header: "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"
pub fn extract_language(req: &HttpRequest) -> Language {
    let header_str = match req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
    {
        Some(value) => value,
        None => return Language::English,
    };

    let mut preferred = Language::English;
    let mut max_quality = 0.0_f32;

    for lang in header_str.split(',') {
        let parts: Vec<&str> = lang.trim().split(';').collect();
        let language = parts[0].to_lowercase();
        let quality = parts
            .get(1)
            .and_then(|q| q.trim_start_matches("q=").parse::<f32>().ok())
            .unwrap_or(1.0);

        if language.starts_with("zh") && quality > max_quality {
            preferred = Language::Chinese;
            max_quality = quality;
        } else if language.starts_with("en") && quality > max_quality {
            preferred = Language::English;
            max_quality = quality;
        }
    }

    preferred
}

/// Helper function to get localized message
fn get_localized_message(lang: Language, en: &str, zh: &str) -> String {
    match lang {
        Language::English => en.to_string(),
        Language::Chinese => zh.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// The request is consulted for the language preference and the correlation
/// id, which is echoed in every error body.
pub fn handle_domain_error(req: &HttpRequest, error: &DomainError) -> HttpResponse {
    let lang = extract_language(req);
    let id = request_id(req);

    let body = |code: &str, message: String| {
        let mut body = ErrorBody::new(code, message);
        if let Some(ref id) = id {
            body = body.with_request_id(id.clone());
        }
        body
    };

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(body(
                "invalid_credentials",
                get_localized_message(lang, "Invalid login or password", "用户名或密码错误"),
            )),
            AuthError::SessionRevoked => HttpResponse::Unauthorized().json(body(
                "session_revoked",
                get_localized_message(
                    lang,
                    "Session has been revoked. Please login again",
                    "会话已失效，请重新登录",
                ),
            )),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(body(
                "user_already_exists",
                get_localized_message(lang, "User already exists", "用户已存在"),
            )),
            AuthError::UserNotFound => HttpResponse::NotFound().json(body(
                "user_not_found",
                get_localized_message(lang, "User not found", "用户不存在"),
            )),
            AuthError::RegistrationDisabled => HttpResponse::Forbidden().json(body(
                "registration_disabled",
                get_localized_message(lang, "Registration is currently disabled", "注册功能暂时关闭"),
            )),
        },
        // One undifferentiated message for every token failure; the specific
        // variant goes to the log only
        DomainError::Token(token_error) => {
            log::debug!("token rejected: {:?} (request_id={:?})", token_error, id);
            HttpResponse::Unauthorized().json(body(
                "invalid_token",
                get_localized_message(lang, "Invalid or expired token", "令牌无效或已过期"),
            ))
        }
        DomainError::Watchlist(watchlist_error) => match watchlist_error {
            WatchlistError::EntryNotFound => HttpResponse::NotFound().json(body(
                "entry_not_found",
                get_localized_message(lang, "Watchlist entry not found", "追番记录不存在"),
            )),
            WatchlistError::InvalidProgress { episodes, total } => {
                HttpResponse::BadRequest().json(body(
                    "invalid_progress",
                    get_localized_message(
                        lang,
                        &format!(
                            "Episodes watched ({}) cannot exceed the title's total of {}",
                            episodes, total
                        ),
                        &format!("已观看集数（{}）不能超过总集数 {}", episodes, total),
                    ),
                ))
            }
            WatchlistError::DuplicateEntry => HttpResponse::Conflict().json(body(
                "entry_already_exists",
                get_localized_message(lang, "Watchlist entry already exists", "追番记录已存在"),
            )),
        },
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(body(
            "not_found",
            get_localized_message(
                lang,
                &format!("{} not found", resource),
                &format!("{}不存在", resource),
            ),
        )),
        DomainError::StoreUnavailable { message } => {
            log::error!("store unavailable: {} (request_id={:?})", message, id);
            HttpResponse::ServiceUnavailable().json(body(
                "store_unavailable",
                get_localized_message(
                    lang,
                    "Service is temporarily unavailable. Please try again later",
                    "服务暂时不可用，请稍后重试",
                ),
            ))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {} (request_id={:?})", message, id);
            HttpResponse::InternalServerError().json(body(
                "internal_error",
                get_localized_message(lang, "An internal error occurred", "发生内部错误"),
            ))
        }
    }
}

/// Convert request body validation failures into a 400 response
pub fn handle_validation_error(req: &HttpRequest, errors: &ValidationErrors) -> HttpResponse {
    let lang = extract_language(req);

    let mut body = ErrorBody::new(
        "validation_error",
        get_localized_message(
            lang,
            &format!("Invalid request: {}", errors),
            &format!("请求参数无效：{}", errors),
        ),
    );
    if let Some(id) = request_id(req) {
        body = body.with_request_id(id);
    }

    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_language_prefers_higher_quality() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.7"))
            .to_http_request();

        assert_eq!(extract_language(&req), Language::Chinese);
    }

    #[test]
    fn test_extract_language_defaults_to_english() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_language(&req), Language::English);

        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9"))
            .to_http_request();
        assert_eq!(extract_language(&req), Language::English);
    }

    #[test]
    fn test_token_errors_map_to_one_generic_401() {
        use aw_core::errors::TokenError;

        let req = TestRequest::default().to_http_request();

        for token_error in [
            TokenError::TokenExpired,
            TokenError::InvalidTokenFormat,
            TokenError::InvalidSignature,
            TokenError::WrongTokenType,
            TokenError::InvalidClaims,
        ] {
            let response = handle_domain_error(&req, &DomainError::Token(token_error));
            assert_eq!(response.status(), 401);
        }
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let req = TestRequest::default().to_http_request();
        let response = handle_domain_error(
            &req,
            &DomainError::StoreUnavailable {
                message: "redis down".to_string(),
            },
        );
        assert_eq!(response.status(), 503);
    }

    #[test]
    fn test_invalid_progress_maps_to_400() {
        let req = TestRequest::default().to_http_request();
        let response = handle_domain_error(
            &req,
            &DomainError::Watchlist(WatchlistError::InvalidProgress {
                episodes: 20,
                total: 12,
            }),
        );
        assert_eq!(response.status(), 400);
    }
}
