//! 毒性参照データ（CSV）の読み込み
//!
//! ヘッダー: `animal,species,toxicity_class,reference,extra_information`
//! 全行を `ToxicityRecordStore::add` に通し、1行でも不正なら読み込み全体を失敗させる。

use crate::animal::Animal;
use crate::error::{Error, Result};
use crate::toxicity::ToxicityRecordStore;
use crate::types::NewToxicityRecord;
use std::path::Path;
use tracing::info;

const HEADER: [&str; 5] = [
    "animal",
    "species",
    "toxicity_class",
    "reference",
    "extra_information",
];
const MIN_COLUMNS: usize = 4;

/// CSVファイルからストアを構築
pub fn load_reference_csv(path: &Path) -> Result<ToxicityRecordStore> {
    let content = std::fs::read_to_string(path)?;
    let store = load_reference_csv_str(&content)?;
    info!(path = %path.display(), records = store.len(), "toxicity reference data loaded");
    Ok(store)
}

/// CSV文字列からストアを構築
///
/// 最初の空でない行はヘッダーでなければならない。
pub fn load_reference_csv_str(content: &str) -> Result<ToxicityRecordStore> {
    let mut store = ToxicityRecordStore::new();
    let mut rows = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    match rows.next() {
        Some((_, line)) if is_header(line) => {}
        Some((line_no, _)) => {
            return Err(Error::ReferenceFormat {
                line: line_no,
                message: format!("missing header `{}`", HEADER.join(",")),
            })
        }
        None => return Ok(store),
    }

    for (line_no, line) in rows {
        let record = parse_row(line).ok_or_else(|| Error::ReferenceFormat {
            line: line_no,
            message: format!("expected at least {} columns", MIN_COLUMNS),
        })?;

        store
            .add(record)
            .map_err(|source| Error::ReferenceData { line: line_no, source })?;
    }

    Ok(store)
}

/// ヘッダー行か（`extra_information` 列は省略可）
fn is_header(line: &str) -> bool {
    let fields = parse_csv_line(line);
    (MIN_COLUMNS..=HEADER.len()).contains(&fields.len())
        && fields
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

/// CSV1行を未検証レコードに変換
///
/// 不明な動物名は未指定、数値でない毒性クラスは 0 として
/// 検証側に理由を報告させる。
fn parse_row(line: &str) -> Option<NewToxicityRecord> {
    let fields = parse_csv_line(line);
    if fields.len() < MIN_COLUMNS {
        return None;
    }

    let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());

    Some(NewToxicityRecord {
        animal: Animal::from_name(&fields[0]),
        species: optional(fields[1].as_str()),
        toxicity_class: fields[2].trim().parse().unwrap_or(0),
        reference: optional(fields[3].as_str()),
        extra_information: fields.get(4).and_then(|s| optional(s.as_str())),
    })
}

/// CSV行をパース（ダブルクォート対応、`""` はクォート1つ）
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    // 最後のフィールド
    fields.push(field.trim().to_string());
    fields
}
