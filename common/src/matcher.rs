//! 動物×植物の毒性照合
//!
//! 指定動物（外側）× 認識植物（内側）の全組み合わせを参照データと照合する。
//! 出力形式は射影関数で切り替え、0件/1件/複数件の分岐は1か所にまとめる。

use crate::animal::Animal;
use crate::error::ConflictError;
use crate::observation::{AnimalObservationStore, PlantObservationStore};
use crate::toxicity::ToxicityRecordStore;
use crate::types::{MatchResult, PlantObservation, ToxicityRecord, NO_TOXICITY_INFORMATION};
use tracing::info;

/// 1組の判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// 該当レコードが1件
    Toxic(&'a ToxicityRecord),
    /// 該当レコードなし
    NoKnownToxicity,
}

/// (動物, 植物) の組と判定
#[derive(Debug, Clone, Copy)]
pub struct PairMatch<'a> {
    pub animal: Animal,
    pub plant: &'a PlantObservation,
    pub verdict: Verdict<'a>,
}

impl PairMatch<'_> {
    /// 毒性クラス（該当なしは 0）
    pub fn toxicity_class(&self) -> u8 {
        match self.verdict {
            Verdict::Toxic(record) => record.toxicity_class(),
            Verdict::NoKnownToxicity => 0,
        }
    }

    pub fn to_match_result(&self) -> MatchResult {
        let (toxicity_class, reference, extra_information) = match self.verdict {
            Verdict::Toxic(record) => (
                record.toxicity_class(),
                Some(record.reference().to_string()),
                record.extra_information().map(str::to_string),
            ),
            Verdict::NoKnownToxicity => (0, None, Some(NO_TOXICITY_INFORMATION.to_string())),
        };

        MatchResult {
            animal: self.animal,
            plant: self.plant.scientific_name.clone(),
            plant_detail: self.plant.detail.clone(),
            toxicity_class,
            reference,
            extra_information,
        }
    }
}

/// 照合エンジン
pub struct MatchEngine<'a> {
    toxicity: &'a ToxicityRecordStore,
    animals: &'a AnimalObservationStore,
    plants: &'a PlantObservationStore,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        toxicity: &'a ToxicityRecordStore,
        animals: &'a AnimalObservationStore,
        plants: &'a PlantObservationStore,
    ) -> Self {
        Self {
            toxicity,
            animals,
            plants,
        }
    }

    /// 全組み合わせを照合し、各組を `project` で射影する
    ///
    /// 1組でも複数ヒットがあれば全体を失敗させ、途中結果は返さない。
    pub fn match_with<T, F>(&self, mut project: F) -> Result<Vec<T>, ConflictError>
    where
        F: FnMut(PairMatch<'a>) -> T,
    {
        let animals = self.animals.get_all();
        let plants = self.plants.get_all();
        let mut output = Vec::with_capacity(animals.len() * plants.len());
        let mut toxic_hits = 0usize;

        for &animal in animals {
            for plant in plants {
                let verdict = self.resolve(animal, plant)?;
                if matches!(verdict, Verdict::Toxic(_)) {
                    toxic_hits += 1;
                }
                output.push(project(PairMatch {
                    animal,
                    plant,
                    verdict,
                }));
            }
        }

        info!(
            animals = animals.len(),
            plants = plants.len(),
            toxic_hits,
            "Found {} possible toxic plant hits for sent animals",
            toxic_hits
        );
        Ok(output)
    }

    /// 全組み合わせの判定結果
    pub fn match_toxic_plants_for_animals(&self) -> Result<Vec<MatchResult>, ConflictError> {
        self.match_with(|pair| pair.to_match_result())
    }

    fn resolve(
        &self,
        animal: Animal,
        plant: &PlantObservation,
    ) -> Result<Verdict<'a>, ConflictError> {
        let hits = self
            .toxicity
            .get_by_animal_and_species(animal, &plant.scientific_name);

        match hits.as_slice() {
            [] => Ok(Verdict::NoKnownToxicity),
            [record] => Ok(Verdict::Toxic(*record)),
            _ => Err(ConflictError {
                animal,
                species: plant.scientific_name.clone(),
                hits: hits.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewToxicityRecord;

    fn record(animal: Animal, species: &str, class: i64, reference: &str) -> NewToxicityRecord {
        NewToxicityRecord {
            animal: Some(animal),
            species: Some(species.to_string()),
            toxicity_class: class,
            reference: Some(reference.to_string()),
            extra_information: None,
        }
    }

    #[test]
    fn test_one_toxic_one_unknown() {
        let mut toxicity = ToxicityRecordStore::new();
        toxicity.add(record(Animal::Alpaca, "P1", 2, "R")).unwrap();

        let mut animals = AnimalObservationStore::new();
        animals.add(Animal::Alpaca);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("P1", 0.8).with_detail("first"));
        plants.add(PlantObservation::new("P2", 0.5));

        let engine = MatchEngine::new(&toxicity, &animals, &plants);
        let results = engine.match_toxic_plants_for_animals().unwrap();

        assert_eq!(results.len(), 2);

        assert_eq!(results[0].animal, Animal::Alpaca);
        assert_eq!(results[0].plant, "P1");
        assert_eq!(results[0].plant_detail.as_deref(), Some("first"));
        assert_eq!(results[0].toxicity_class, 2);
        assert_eq!(results[0].reference.as_deref(), Some("R"));

        assert_eq!(results[1].plant, "P2");
        assert_eq!(results[1].toxicity_class, 0);
        assert!(results[1].reference.is_none());
        assert_eq!(
            results[1].extra_information.as_deref(),
            Some(NO_TOXICITY_INFORMATION)
        );
    }

    #[test]
    fn test_extra_information_copied_from_record() {
        let mut toxicity = ToxicityRecordStore::new();
        toxicity
            .add(NewToxicityRecord {
                extra_information: Some("Causes vomiting".to_string()),
                ..record(Animal::Dog, "Allium cepa", 3, "ASPCA")
            })
            .unwrap();

        let mut animals = AnimalObservationStore::new();
        animals.add(Animal::Dog);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("Allium cepa", 0.99));

        let results = MatchEngine::new(&toxicity, &animals, &plants)
            .match_toxic_plants_for_animals()
            .unwrap();

        assert_eq!(results[0].extra_information.as_deref(), Some("Causes vomiting"));
    }

    #[test]
    fn test_output_order_animals_outer_plants_inner() {
        let toxicity = ToxicityRecordStore::new();
        let mut animals = AnimalObservationStore::new();
        animals.extend([Animal::Dog, Animal::Cat]);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("A", 0.1));
        plants.add(PlantObservation::new("B", 0.1));
        plants.add(PlantObservation::new("C", 0.1));

        let pairs = MatchEngine::new(&toxicity, &animals, &plants)
            .match_with(|pair| (pair.animal, pair.plant.scientific_name.clone()))
            .unwrap();

        let expected: Vec<(Animal, String)> = [Animal::Dog, Animal::Cat]
            .into_iter()
            .flat_map(|a| ["A", "B", "C"].into_iter().map(move |p| (a, p.to_string())))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_conflict_fails_whole_batch() {
        let mut toxicity = ToxicityRecordStore::new();
        toxicity.add(record(Animal::Cat, "Lilium candidum", 3, "R1")).unwrap();
        toxicity.add(record(Animal::Cat, "Lilium candidum", 2, "R2")).unwrap();
        toxicity.add(record(Animal::Cat, "Taxus baccata", 3, "R3")).unwrap();

        let mut animals = AnimalObservationStore::new();
        animals.add(Animal::Cat);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("Taxus baccata", 0.9));
        plants.add(PlantObservation::new("Lilium candidum", 0.9));

        let err = MatchEngine::new(&toxicity, &animals, &plants)
            .match_toxic_plants_for_animals()
            .unwrap_err();

        assert_eq!(err.animal, Animal::Cat);
        assert_eq!(err.species, "Lilium candidum");
        assert_eq!(err.hits, 2);
        assert_eq!(err.to_string(), "Multiple hits on same toxic plant.");
    }

    #[test]
    fn test_conflict_for_other_animal_does_not_affect_pair() {
        let mut toxicity = ToxicityRecordStore::new();
        toxicity.add(record(Animal::Cat, "Lilium candidum", 3, "R1")).unwrap();
        toxicity.add(record(Animal::Cat, "Lilium candidum", 2, "R2")).unwrap();

        let mut animals = AnimalObservationStore::new();
        animals.add(Animal::Dog);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("Lilium candidum", 0.9));

        let results = MatchEngine::new(&toxicity, &animals, &plants)
            .match_toxic_plants_for_animals()
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].toxicity_class, 0);
    }

    #[test]
    fn test_empty_observations_give_empty_result() {
        let toxicity = ToxicityRecordStore::new();
        let animals = AnimalObservationStore::new();
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("A", 0.1));

        let results = MatchEngine::new(&toxicity, &animals, &plants)
            .match_toxic_plants_for_animals()
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_projection_sees_verdict() {
        let mut toxicity = ToxicityRecordStore::new();
        toxicity.add(record(Animal::Horse, "Senecio jacobaea", 3, "R")).unwrap();

        let mut animals = AnimalObservationStore::new();
        animals.add(Animal::Horse);
        let mut plants = PlantObservationStore::new();
        plants.add(PlantObservation::new("Senecio jacobaea", 0.7));
        plants.add(PlantObservation::new("Trifolium repens", 0.6));

        let classes = MatchEngine::new(&toxicity, &animals, &plants)
            .match_with(|pair| pair.toxicity_class())
            .unwrap();
        assert_eq!(classes, vec![3, 0]);
    }
}
