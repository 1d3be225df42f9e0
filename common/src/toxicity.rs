//! 毒性参照データストア
//!
//! 起動時に参照データを1行ずつ `add` で登録し、その後は `Arc` で共有して
//! 読み取り専用として扱う。追記のみで削除・更新はない。

use crate::animal::Animal;
use crate::error::ValidationError;
use crate::types::{NewToxicityRecord, ToxicityRecord};

const MINIMUM_CLASS: i64 = 1;
const MAXIMUM_CLASS: i64 = 3;

/// 検証済み毒性レコードの集合
#[derive(Debug, Clone, Default)]
pub struct ToxicityRecordStore {
    records: Vec<ToxicityRecord>,
}

impl ToxicityRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを検証して追加
    ///
    /// 検証順序（最初に違反した規則の理由を返す）:
    /// 1. 毒性クラスが 1-3 の範囲外
    /// 2. 種名が空
    /// 3. 出典が空
    /// 4. 動物が未指定
    pub fn add(&mut self, record: NewToxicityRecord) -> Result<(), ValidationError> {
        let NewToxicityRecord {
            animal,
            species,
            toxicity_class,
            reference,
            extra_information,
        } = record;

        if !(MINIMUM_CLASS..=MAXIMUM_CLASS).contains(&toxicity_class) {
            return Err(ValidationError::new(format!(
                "toxicity class is not in range of {}-{}",
                MINIMUM_CLASS, MAXIMUM_CLASS
            )));
        }
        let species = match species {
            Some(s) if !is_blank(&s) => s,
            _ => return Err(ValidationError::new("species can not be empty")),
        };
        let reference = match reference {
            Some(r) if !is_blank(&r) => r,
            _ => return Err(ValidationError::new("reference can not be empty")),
        };
        let animal = animal.ok_or_else(|| ValidationError::new("animal can not be empty"))?;

        self.records.push(ToxicityRecord::new(
            animal,
            species,
            toxicity_class as u8,
            reference,
            extra_information,
        ));
        Ok(())
    }

    /// 全レコード（登録順）
    pub fn get_all(&self) -> &[ToxicityRecord] {
        &self.records
    }

    /// 指定動物のレコード（登録順）
    pub fn get_by_animal(&self, animal: Animal) -> Vec<&ToxicityRecord> {
        self.records.iter().filter(|r| r.animal() == animal).collect()
    }

    /// 動物と種名の完全一致でレコードを取得
    ///
    /// 種名は前後空白除去も大文字小文字の同一視もしない。
    /// 2件以上返る場合は参照データの不整合で、呼び出し側が報告する。
    pub fn get_by_animal_and_species(
        &self,
        animal: Animal,
        species: &str,
    ) -> Vec<&ToxicityRecord> {
        self.records
            .iter()
            .filter(|r| r.animal() == animal && r.species() == species)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
