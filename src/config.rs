use crate::error::{Result, ToxicPlantsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "nl";

const DEFAULT_PLANTNET_URL: &str =
    "https://my-api.plantnet.org/v2/identify/all?include-related-images=false";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plantnet_url: Option<String>,
    pub api_key: Option<String>,
    pub language: String,
    pub reference_data: Option<PathBuf>,
    pub mock_plant_call: bool,
    pub timeout_seconds: u64,

    /// 環境変数による上書き（保存しない）
    #[serde(skip)]
    env: EnvOverrides,
}

#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    plantnet_url: Option<String>,
    api_key: Option<String>,
    mock_plant_call: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plantnet_url: Some(DEFAULT_PLANTNET_URL.into()),
            api_key: None,
            language: DEFAULT_LANGUAGE.into(),
            reference_data: None,
            mock_plant_call: false,
            timeout_seconds: 60,
            env: EnvOverrides::default(),
        }
    }
}

impl Config {
    /// 実行時の設定（設定ファイル + 環境変数）
    pub fn load() -> Result<Self> {
        Ok(Self::load_file()?.with_env(|key| std::env::var(key).ok()))
    }

    /// 設定ファイルの値のみ（編集・保存用）
    pub fn load_file() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ToxicPlantsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("toxic-plants").join("config.json"))
    }

    /// 環境変数による上書き（PLANTNET_URL / PLANTNET_API_KEY / MOCK_PLANTCALL）
    ///
    /// 上書きは参照時にのみ効き、`save` ではファイルの値だけを書く。
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        self.env = EnvOverrides {
            plantnet_url: var("PLANTNET_URL").filter(|v| !v.trim().is_empty()),
            api_key: var("PLANTNET_API_KEY").filter(|v| !v.trim().is_empty()),
            mock_plant_call: var("MOCK_PLANTCALL")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1")),
        };
        self
    }

    /// PlantNetのURL（環境変数を優先）
    pub fn plantnet_url(&self) -> Option<&str> {
        self.env.plantnet_url.as_deref().or(self.plantnet_url.as_deref())
    }

    /// APIキー（環境変数を優先）
    pub fn api_key(&self) -> Option<&str> {
        self.env.api_key.as_deref().or(self.api_key.as_deref())
    }

    pub fn mock_plant_call(&self) -> bool {
        self.env.mock_plant_call.unwrap_or(self.mock_plant_call)
    }

    /// 植物識別APIのエンドポイント（APIキー付き）
    pub fn plantnet_endpoint(&self) -> Result<String> {
        let url = self
            .plantnet_url()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ToxicPlantsError::Config("PlantNetのURLが設定されていません".into()))?;

        if url.contains("api-key=") {
            return Ok(url.to_string());
        }

        let key = self.api_key().ok_or(ToxicPlantsError::MissingApiKey)?;
        let separator = if url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}api-key={}", url, separator, key))
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_plantnet_url(&mut self, url: String) -> Result<()> {
        self.plantnet_url = Some(url);
        self.save()
    }

    pub fn set_reference_data(&mut self, path: PathBuf) -> Result<()> {
        self.reference_data = Some(path);
        self.save()
    }

    /// 毒性参照データのパス（引数指定を優先）
    pub fn reference_data_path(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.reference_data.clone()).ok_or_else(|| {
            ToxicPlantsError::Config(
                "毒性参照データが指定されていません。\
                 --data か `toxic-plants config --set-data` で指定してください"
                    .into(),
            )
        })
    }
}
