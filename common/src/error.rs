//! エラー型定義
//!
//! - ValidationError: 参照データ登録時の不変条件違反（起動時に致命的）
//! - ConflictError: 同一(動物, 種)への複数ヒット（リクエスト単位で致命的）
//! - RequestError: クライアント入力の不備

use crate::animal::Animal;
use thiserror::Error;

/// 毒性レコード登録時の検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// 人が読める理由
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// 参照データの整合性エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Multiple hits on same toxic plant.")]
pub struct ConflictError {
    pub animal: Animal,
    pub species: String,
    pub hits: usize,
}

/// リクエスト入力エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("No animal received")]
    NoAnimal,

    #[error("Animal not supported")]
    AnimalNotSupported(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Reference data format error at line {line}: {message}")]
    ReferenceFormat { line: usize, message: String },

    #[error("Reference data error at line {line}: {source}")]
    ReferenceData {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl Error {
    /// 参照データ側の欠陥か（クライアント入力ではなくデータ修正が必要）
    pub fn is_data_defect(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::Conflict(_)
                | Error::ReferenceFormat { .. }
                | Error::ReferenceData { .. }
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
