//! Toxic Plants Common Library
//!
//! 毒性照合のコア: 参照データストア、リクエスト単位の観測データ、照合エンジン

pub mod animal;
pub mod dataset;
pub mod error;
pub mod matcher;
pub mod observation;
pub mod parser;
pub mod toxicity;
pub mod types;

pub use animal::{Animal, ANIMAL_NAMES};
pub use dataset::{load_reference_csv, load_reference_csv_str};
pub use error::{ConflictError, Error, RequestError, Result, ValidationError};
pub use matcher::{MatchEngine, PairMatch, Verdict};
pub use observation::{AnimalObservationStore, PlantObservationStore};
pub use parser::parse_plant_response;
pub use toxicity::ToxicityRecordStore;
pub use types::{
    MatchReport, MatchResult, NewToxicityRecord, PlantObservation, ToxicityRecord,
    NO_TOXICITY_INFORMATION,
};
