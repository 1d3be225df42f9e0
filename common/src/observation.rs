//! リクエスト単位の観測データ
//!
//! 植物・動物ともリクエストごとに新しいインスタンスを作り、
//! リクエスト間では共有しない。

use crate::animal::Animal;
use crate::types::PlantObservation;
use tracing::debug;

/// 認識された植物（学名で重複排除、先勝ち）
#[derive(Debug, Clone, Default)]
pub struct PlantObservationStore {
    plants: Vec<PlantObservation>,
}

impl PlantObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 植物を追加
    ///
    /// 同じ学名が既にあれば破棄する。追加した場合 true。
    pub fn add(&mut self, plant: PlantObservation) -> bool {
        if self
            .plants
            .iter()
            .any(|p| p.scientific_name == plant.scientific_name)
        {
            debug!(
                scientific_name = %plant.scientific_name,
                score = plant.score,
                "duplicate plant discarded"
            );
            return false;
        }
        self.plants.push(plant);
        true
    }

    pub fn get_all(&self) -> &[PlantObservation] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl Extend<PlantObservation> for PlantObservationStore {
    fn extend<I: IntoIterator<Item = PlantObservation>>(&mut self, iter: I) {
        for plant in iter {
            self.add(plant);
        }
    }
}

/// リクエストで指定された動物
#[derive(Debug, Clone, Default)]
pub struct AnimalObservationStore {
    animals: Vec<Animal>,
}

impl AnimalObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn get_all(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

impl Extend<Animal> for AnimalObservationStore {
    fn extend<I: IntoIterator<Item = Animal>>(&mut self, iter: I) {
        self.animals.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_store_keeps_insertion_order() {
        let mut store = PlantObservationStore::new();
        store.add(PlantObservation::new("Taxus baccata", 0.9));
        store.add(PlantObservation::new("Nerium oleander", 0.4));

        let names: Vec<_> = store.get_all().iter().map(|p| p.scientific_name.as_str()).collect();
        assert_eq!(names, vec!["Taxus baccata", "Nerium oleander"]);
    }

    #[test]
    fn test_plant_store_first_write_wins() {
        let mut store = PlantObservationStore::new();
        assert!(store.add(PlantObservation::new("Taxus baccata", 0.9).with_detail("yew")));
        assert!(!store.add(PlantObservation::new("Taxus baccata", 0.2)));

        assert_eq!(store.len(), 1);
        assert!((store.get_all()[0].score - 0.9).abs() < f64::EPSILON);
        assert_eq!(store.get_all()[0].detail.as_deref(), Some("yew"));
    }

    #[test]
    fn test_plant_store_dedup_is_case_sensitive() {
        let mut store = PlantObservationStore::new();
        store.extend(vec![
            PlantObservation::new("Taxus baccata", 0.9),
            PlantObservation::new("taxus baccata", 0.8),
        ]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_animal_store_allows_repeats() {
        let mut store = AnimalObservationStore::new();
        store.extend([Animal::Dog, Animal::Cat, Animal::Dog]);
        assert_eq!(store.get_all(), &[Animal::Dog, Animal::Cat, Animal::Dog]);
    }
}
