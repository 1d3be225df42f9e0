//! 植物識別サービス
//!
//! - PlantNetService: PlantNet APIへ画像を送信
//! - FakePlantService: 固定レスポンスを返す（APIを呼ばずに動作確認する用途）

mod plantnet;

pub use plantnet::PlantNetService;

use crate::config::{Config, DEFAULT_LANGUAGE};
use crate::error::Result;
use crate::scanner::ImageInfo;
use async_trait::async_trait;

/// 1リクエスト分の識別対象
#[derive(Debug, Clone, Default)]
pub struct PlantQuery {
    pub images: Vec<ImageInfo>,
    pub organs: Vec<String>,
    pub language: Option<String>,
}

impl PlantQuery {
    /// 言語指定（未指定時は既定言語）
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// 植物識別サービス
///
/// 生のレスポンス本文を返し、パースは呼び出し側で行う。
#[async_trait]
pub trait PlantService: Send + Sync {
    async fn identify(&self, query: &PlantQuery) -> Result<String>;
}

/// 固定レスポンスを返すサービス
pub struct FakePlantService {
    response: String,
}

const FAKE_RESPONSE: &str = r#"{
  "results": [
    {"score": 0.91, "species": {"scientificName": "Taxus baccata", "commonNames": ["Yew"]}},
    {"score": 0.42, "species": {"scientificName": "Nerium oleander", "commonNames": ["Oleander"]}},
    {"score": 0.07, "species": {"scientificName": "Hedera helix", "commonNames": ["Ivy"]}}
  ]
}"#;

impl FakePlantService {
    pub fn new() -> Self {
        Self::with_response(FAKE_RESPONSE)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for FakePlantService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantService for FakePlantService {
    async fn identify(&self, _query: &PlantQuery) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// 設定に応じたサービスを生成
pub fn from_config(config: &Config) -> Result<Box<dyn PlantService>> {
    if config.mock_plant_call() {
        tracing::info!("MOCK_PLANTCALL enabled, using fake plant service");
        return Ok(Box::new(FakePlantService::new()));
    }

    let endpoint = config.plantnet_endpoint()?;
    Ok(Box::new(PlantNetService::new(endpoint, config.timeout_seconds)?))
}
