use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToxicPlantsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`toxic-plants config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("植物識別APIエラー ({status}): {message}")]
    ApiCall { status: u16, message: String },

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] toxic_plants_common::Error),
}

impl ToxicPlantsError {
    /// 参照データの欠陥によるエラーか（クライアント入力エラーと区別する）
    pub fn is_data_defect(&self) -> bool {
        matches!(self, ToxicPlantsError::Common(e) if e.is_data_defect())
    }
}

impl From<toxic_plants_common::RequestError> for ToxicPlantsError {
    fn from(e: toxic_plants_common::RequestError) -> Self {
        ToxicPlantsError::Common(e.into())
    }
}

impl From<toxic_plants_common::ConflictError> for ToxicPlantsError {
    fn from(e: toxic_plants_common::ConflictError) -> Self {
        ToxicPlantsError::Common(e.into())
    }
}

pub type Result<T> = std::result::Result<T, ToxicPlantsError>;
