//! 型定義
//!
//! - PlantObservation: 画像認識で得た植物（1リクエスト分）
//! - NewToxicityRecord: 未検証の参照データ1行
//! - ToxicityRecord: 検証済みの参照データ（登録後は不変）
//! - MatchResult: (動物, 植物) ごとの判定結果

use crate::animal::Animal;
use serde::{Deserialize, Serialize};

/// 該当レコードがない場合の補足情報
pub const NO_TOXICITY_INFORMATION: &str =
    "There is no information that this plant is toxic for this animal";

/// 画像認識で得た植物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantObservation {
    pub scientific_name: String,

    /// 認識の確信度 (0.0-1.0)
    #[serde(default)]
    pub score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PlantObservation {
    pub fn new(scientific_name: impl Into<String>, score: f64) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            score,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 未検証の毒性レコード（参照データの1行）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewToxicityRecord {
    pub animal: Option<Animal>,
    pub species: Option<String>,
    pub toxicity_class: i64,
    pub reference: Option<String>,
    pub extra_information: Option<String>,
}

/// 検証済みの毒性レコード
///
/// `ToxicityRecordStore::add` を通してのみ生成される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToxicityRecord {
    animal: Animal,
    species: String,
    toxicity_class: u8,
    reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_information: Option<String>,
}

impl ToxicityRecord {
    pub(crate) fn new(
        animal: Animal,
        species: String,
        toxicity_class: u8,
        reference: String,
        extra_information: Option<String>,
    ) -> Self {
        Self {
            animal,
            species,
            toxicity_class,
            reference,
            extra_information,
        }
    }

    pub fn animal(&self) -> Animal {
        self.animal
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// 毒性クラス 1（軽度）〜 3（重度）
    pub fn toxicity_class(&self) -> u8 {
        self.toxicity_class
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn extra_information(&self) -> Option<&str> {
        self.extra_information.as_deref()
    }
}

/// (動物, 植物) の判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub animal: Animal,
    pub plant: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_detail: Option<String>,

    /// 0 = 毒性情報なし
    pub toxicity_class: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_information: Option<String>,
}

impl MatchResult {
    pub fn is_toxic(&self) -> bool {
        self.toxicity_class > 0
    }
}

/// 1リクエスト分の照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub results: Vec<MatchResult>,
    pub toxic_hits: usize,
}

impl MatchReport {
    pub fn new(results: Vec<MatchResult>) -> Self {
        let toxic_hits = results.iter().filter(|r| r.is_toxic()).count();
        Self { results, toxic_hits }
    }
}
