//! Thin gloo-net wrapper used by every resource API.
//!
//! All calls go through [`send`] so that transport failures, error bodies and
//! decode failures end up in the same [`ApiError`] taxonomy.

use crate::shared::api_utils::api_url;
use contracts::shared::api::{ApiEnvelope, ErrorBody, MessageResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),
    /// 4xx/5xx; `message` comes from the `{ "message": ... }` body when there is one.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    /// The body did not match the expected DTO.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request could not be built.
    #[error("request error: {0}")]
    Request(String),
}

impl ApiError {
    /// Text for the alert banner: the server's own message when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    let builder = match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    };
    builder.header("Accept", "application/json")
}

async fn send<B: Serialize>(
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let url = api_url(path);
    log::debug!("{:?} {}", method, url);

    let builder = builder(method, &url);
    let sent = match body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {}", status),
    };
    log::warn!("{:?} {} failed: {} {}", method, url, status, message);
    Err(ApiError::Server { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path` and decode the whole body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send::<()>(HttpMethod::Get, path, None).await?;
    decode(response).await
}

/// `GET path` and unwrap the `data` field of the envelope.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> = get_json(path).await?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode(format!("{}: response has no data", path)))
}

/// Sends a mutation with a JSON body.
pub async fn send_message<B: Serialize>(
    method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<MessageResponse, ApiError> {
    let response = send(method, path, Some(body)).await?;
    read_message(response).await
}

/// Sends a mutation without a body (delete, lock, unlock).
pub async fn send_empty(method: HttpMethod, path: &str) -> Result<MessageResponse, ApiError> {
    let response = send::<()>(method, path, None).await?;
    read_message(response).await
}

/// Some endpoints answer a successful mutation with an empty body.
async fn read_message(response: Response) -> Result<MessageResponse, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_message(&text)
}

fn parse_message(text: &str) -> Result<MessageResponse, ApiError> {
    if text.trim().is_empty() {
        return Ok(MessageResponse {
            message: None,
            data: None,
        });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: "Product is referenced by an order".into(),
        };
        assert_eq!(err.user_message("Cannot delete"), "Product is referenced by an order");
    }

    #[test]
    fn test_user_message_fallback() {
        let blank = ApiError::Server {
            status: 500,
            message: " ".into(),
        };
        assert_eq!(blank.user_message("Cannot delete"), "Cannot delete");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Cannot delete"),
            "Cannot delete"
        );
    }

    #[test]
    fn test_parse_message() {
        assert_eq!(parse_message("").unwrap().message, None);
        assert_eq!(
            parse_message(r#"{"message":"Deleted successfully"}"#)
                .unwrap()
                .message
                .as_deref(),
            Some("Deleted successfully")
        );
        assert!(matches!(parse_message("<html>"), Err(ApiError::Decode(_))));
    }
}
