//! Envelope-aware HTTP helpers.
//!
//! Every portal endpoint wraps its payload in the uniform
//! `{success, message, data}` envelope; these helpers unwrap it and map
//! failures to plain strings for the notification layer. A missing record
//! is not a failure: `get_optional` turns 404 and data-less success
//! responses into `Ok(None)` so callers can start fresh.

use crate::shared::api_utils::api_url;
use contracts::domain::common::ApiResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    envelope.into_result()
}

/// GET whose payload is irrelevant; used by the connectivity probe.
pub async fn get_ack(path: &str) -> Result<(), String> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<serde_json::Value> =
        resp.json().await.map_err(|e| e.to_string())?;
    envelope.ack()
}

/// Fetch a record that may legitimately not exist yet.
pub async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Request failed".to_string()));
    }
    Ok(envelope.data)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    envelope.into_result()
}

/// POST whose response data is optional; returns it when the server
/// chooses to echo updated fields.
pub async fn post_json_optional<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<T>, String> {
    let resp = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Request failed".to_string()));
    }
    Ok(envelope.data)
}

pub async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let resp = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<serde_json::Value> =
        resp.json().await.map_err(|e| e.to_string())?;
    envelope.ack()
}

/// Body-less POST (`/esg/submit`).
pub async fn post_empty_ack(path: &str) -> Result<(), String> {
    let resp = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<serde_json::Value> =
        resp.json().await.map_err(|e| e.to_string())?;
    envelope.ack()
}

/// Multipart POST used by the certificate upload endpoint.
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    envelope.into_result()
}
