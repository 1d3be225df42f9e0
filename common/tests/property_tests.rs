//! 照合コアの性質テスト

use proptest::prelude::*;
use toxic_plants_common::{
    Animal, AnimalObservationStore, MatchEngine, NewToxicityRecord, PlantObservation,
    PlantObservationStore, ToxicityRecordStore, ANIMAL_NAMES,
};

fn arb_animal() -> impl Strategy<Value = Animal> {
    (0..ANIMAL_NAMES.len()).prop_map(|i| ANIMAL_NAMES[i].0)
}

fn record(animal: Animal, species: &str, class: i64) -> NewToxicityRecord {
    NewToxicityRecord {
        animal: Some(animal),
        species: Some(species.to_string()),
        toxicity_class: class,
        reference: Some("reference".to_string()),
        extra_information: None,
    }
}

proptest! {
    /// 範囲外の毒性クラスは必ず拒否される
    #[test]
    fn class_outside_range_is_rejected(class in prop_oneof![i64::MIN..1i64, 4i64..i64::MAX]) {
        let mut store = ToxicityRecordStore::new();
        let err = store.add(record(Animal::Alpaca, "Taxus baccata", class)).unwrap_err();
        prop_assert_eq!(err.reason(), "toxicity class is not in range of 1-3");
        prop_assert!(store.is_empty());
    }

    /// 範囲内の毒性クラスは必ず受理される
    #[test]
    fn class_in_range_is_accepted(class in 1i64..=3, animal in arb_animal()) {
        let mut store = ToxicityRecordStore::new();
        prop_assert!(store.add(record(animal, "Taxus baccata", class)).is_ok());
        prop_assert_eq!(store.get_all()[0].toxicity_class() as i64, class);
    }

    /// 競合のない照合は常に m×n 件を返す
    #[test]
    fn conflict_free_match_returns_cross_product(
        animals in proptest::collection::vec(arb_animal(), 0..6),
        plant_count in 0usize..8,
        toxic in proptest::collection::vec((arb_animal(), 0usize..8, 1i64..=3), 0..10),
    ) {
        let mut toxicity = ToxicityRecordStore::new();
        let mut seen = std::collections::HashSet::new();
        for (animal, plant, class) in toxic {
            // 同一(動物, 種)は1件まで
            if seen.insert((animal, plant)) {
                toxicity.add(record(animal, &format!("plant-{}", plant), class)).unwrap();
            }
        }

        let mut animal_store = AnimalObservationStore::new();
        animal_store.extend(animals.iter().copied());
        let mut plant_store = PlantObservationStore::new();
        for i in 0..plant_count {
            plant_store.add(PlantObservation::new(format!("plant-{}", i), 0.5));
        }

        let results = MatchEngine::new(&toxicity, &animal_store, &plant_store)
            .match_toxic_plants_for_animals()
            .unwrap();
        prop_assert_eq!(results.len(), animals.len() * plant_count);
        prop_assert!(results.iter().all(|r| r.toxicity_class <= 3));
    }
}
