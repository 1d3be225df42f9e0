//! 植物識別APIレスポンスパーサー
//!
//! PlantNet形式のレスポンスから認識された植物を取り出す
//!
//! ```json
//! {"results": [
//!   {"score": 0.91, "species": {"scientificName": "Taxus baccata", "commonNames": ["Yew"]}}
//! ]}
//! ```

use crate::error::{Error, Result};
use crate::types::PlantObservation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IdentifyResponse {
    results: Option<Vec<IdentifyResult>>,
}

#[derive(Debug, Deserialize)]
struct IdentifyResult {
    #[serde(default)]
    score: f64,
    species: Option<Species>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Species {
    scientific_name: Option<String>,
    #[serde(default)]
    common_names: Vec<String>,
}

/// APIレスポンスから植物一覧をパース
///
/// # Arguments
/// * `response` - APIレスポンス本文（JSON）
///
/// # Returns
/// * `Ok(Vec<PlantObservation>)` - レスポンス順の植物（重複排除はしない）
/// * `Err` - JSONでない、`results` がない、学名が空の結果がある場合
///
/// # Examples
/// ```
/// use toxic_plants_common::parse_plant_response;
///
/// let response =
///     r#"{"results": [{"score": 0.5, "species": {"scientificName": "Hedera helix"}}]}"#;
/// let plants = parse_plant_response(response).unwrap();
/// assert_eq!(plants[0].scientific_name, "Hedera helix");
/// ```
pub fn parse_plant_response(response: &str) -> Result<Vec<PlantObservation>> {
    let parsed: IdentifyResponse = serde_json::from_str(response.trim())
        .map_err(|e| Error::Parse(format!("plant response JSON error: {}", e)))?;

    let results = parsed
        .results
        .ok_or_else(|| Error::Parse("plant response has no results".into()))?;

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| -> Result<PlantObservation> {
            let species = result.species.unwrap_or(Species {
                scientific_name: None,
                common_names: Vec::new(),
            });
            let scientific_name = species
                .scientific_name
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(|| {
                    Error::Parse(format!("result {} has no scientific name", index + 1))
                })?;

            let mut plant = PlantObservation::new(scientific_name, result.score.clamp(0.0, 1.0));
            if !species.common_names.is_empty() {
                plant = plant.with_detail(species.common_names.join(", "));
            }
            Ok(plant)
        })
        .collect()
}
