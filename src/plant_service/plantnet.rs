//! PlantNet API連携
//!
//! 画像ごとに `images`、部位ごとに `organs` のパートを持つ
//! multipart/form-data を POST する。

use super::{PlantQuery, PlantService};
use crate::error::{ToxicPlantsError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub struct PlantNetService {
    client: reqwest::Client,
    endpoint: String,
}

/// エラーレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    status_code: Option<u16>,
    message: Option<String>,
}

impl PlantNetService {
    pub fn new(endpoint: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// 言語パラメータ付きURL
    fn request_url(&self, language: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}lang={}", self.endpoint, separator, language)
    }

    async fn build_form(query: &PlantQuery) -> Result<Form> {
        let mut form = Form::new();

        for image in &query.images {
            let data = tokio::fs::read(&image.path).await?;
            let part = Part::bytes(data)
                .file_name(image.file_name.clone())
                .mime_str(image.content_type)?;
            form = form.part("images", part);
        }

        for organ in &query.organs {
            form = form.text("organs", organ.clone());
        }

        Ok(form)
    }
}

#[async_trait]
impl PlantService for PlantNetService {
    async fn identify(&self, query: &PlantQuery) -> Result<String> {
        let form = Self::build_form(query).await?;
        let url = self.request_url(query.language());
        debug!(
            images = query.images.len(),
            organs = query.organs.len(),
            "sending PlantNet request"
        );

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(status = status.as_u16(), "PlantNet request failed");
        Err(parse_error_response(status.as_u16(), &body))
    }
}

/// エラーレスポンスを `ApiCall` に変換
fn parse_error_response(http_status: u16, body: &str) -> ToxicPlantsError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            status_code,
            message: Some(message),
        }) => ToxicPlantsError::ApiCall {
            status: status_code.unwrap_or(http_status),
            message,
        },
        _ => ToxicPlantsError::ApiParse(format!(
            "unexpected error response (HTTP {}): {}",
            http_status, body
        )),
    }
}
