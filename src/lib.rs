//! 写真から識別した植物と動物の毒性照合ツール
//!
//! 照合コアは toxic_plants_common、このクレートは設定・植物識別API・CLIを担う

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod plant_service;
pub mod request;
pub mod scanner;
