//! 毒性チェックのリクエスト処理
//!
//! 1. 動物名を解析（未指定・非対応はクライアント入力エラー）
//! 2. 植物識別サービスで植物を取得
//! 3. リクエスト専用の観測ストアに登録して照合

use crate::error::Result;
use crate::plant_service::{PlantQuery, PlantService};
use toxic_plants_common::{
    parse_plant_response, Animal, AnimalObservationStore, ConflictError, MatchEngine, MatchReport,
    PlantObservation, PlantObservationStore, RequestError, ToxicityRecordStore,
};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    pub animals: Vec<String>,
    pub query: PlantQuery,
}

/// 動物名を解析
pub fn parse_animals(names: &[String]) -> std::result::Result<Vec<Animal>, RequestError> {
    if names.is_empty() {
        return Err(RequestError::NoAnimal);
    }
    names.iter().map(|name| name.parse()).collect()
}

/// リクエストを処理して照合結果を返す
pub async fn handle_request(
    store: &ToxicityRecordStore,
    service: &dyn PlantService,
    request: &CheckRequest,
) -> Result<MatchReport> {
    let animals = parse_animals(&request.animals)?;

    let body = service.identify(&request.query).await?;
    let plants = parse_plant_response(&body)?;
    info!(plants = plants.len(), "plants identified");

    Ok(check_plants(store, &animals, plants)?)
}

/// 識別済みの植物と動物を照合
pub fn check_plants(
    store: &ToxicityRecordStore,
    animals: &[Animal],
    plants: impl IntoIterator<Item = PlantObservation>,
) -> std::result::Result<MatchReport, ConflictError> {
    let mut animal_store = AnimalObservationStore::new();
    animal_store.extend(animals.iter().copied());

    let mut plant_store = PlantObservationStore::new();
    plant_store.extend(plants);

    let results =
        MatchEngine::new(store, &animal_store, &plant_store).match_toxic_plants_for_animals()?;
    Ok(MatchReport::new(results))
}
