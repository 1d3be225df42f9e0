//! 照合結果の出力

use crate::error::Result;
use std::fmt::Write as _;
use std::path::Path;
use toxic_plants_common::{MatchReport, MatchResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown format: {}. Use json or table", s)),
        }
    }
}

/// 結果をJSON配列に変換
pub fn to_json(results: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// 結果を表形式に変換
pub fn to_table(report: &MatchReport) -> String {
    let plant_width = report
        .results
        .iter()
        .map(|r| r.plant.chars().count())
        .max()
        .unwrap_or(0)
        .max("Plant".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<w$} {:>5}  {}",
        "Animal",
        "Plant",
        "Class",
        "Reference",
        w = plant_width
    );
    for r in &report.results {
        let _ = writeln!(
            out,
            "{:<10} {:<w$} {:>5}  {}",
            r.animal.name(),
            r.plant,
            r.toxicity_class,
            r.reference.as_deref().unwrap_or("-"),
            w = plant_width
        );
    }
    let _ = writeln!(out, "\n{} possible toxic plant hits", report.toxic_hits);
    out
}

pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&report.results),
        OutputFormat::Table => Ok(to_table(report)),
    }
}

/// 出力先が指定されていればファイルに、なければ標準出力に書く
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toxic_plants_common::{Animal, NO_TOXICITY_INFORMATION};

    fn report() -> MatchReport {
        MatchReport::new(vec![
            MatchResult {
                animal: Animal::Cat,
                plant: "Lilium candidum".into(),
                plant_detail: Some("Madonna lily".into()),
                toxicity_class: 3,
                reference: Some("ASPCA".into()),
                extra_information: None,
            },
            MatchResult {
                animal: Animal::Cat,
                plant: "Hedera helix".into(),
                plant_detail: None,
                toxicity_class: 0,
                reference: None,
                extra_information: Some(NO_TOXICITY_INFORMATION.into()),
            },
        ])
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&report().results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["animal"], "Cat");
        assert_eq!(value[0]["plantDetail"], "Madonna lily");
        assert_eq!(value[1]["toxicityClass"], 0);
        assert!(value[1].get("reference").is_none());
    }

    #[test]
    fn test_to_table() {
        let table = to_table(&report());
        assert!(table.contains("Lilium candidum"));
        assert!(table.contains("ASPCA"));
        assert!(table.contains("1 possible toxic plant hits"));
    }
}
