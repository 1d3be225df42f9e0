use clap::{Parser, Subcommand};
use crate::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "toxic-plants")]
#[command(about = "写真の植物が動物にとって有毒かを判定するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真の植物と動物を照合
    Check {
        /// 毒性参照データCSV（省略時は設定値）
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// 動物名（複数指定可）
        #[arg(short, long = "animal")]
        animals: Vec<String>,

        /// 画像ファイルまたはフォルダ（複数指定可）
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,

        /// 撮影部位 (leaf/flower/fruit/bark/auto)
        #[arg(long = "organ")]
        organs: Vec<String>,

        /// 植物名の言語（デフォルト: 設定値）
        #[arg(long)]
        lang: Option<String>,

        /// 植物識別APIのレスポンスJSON（指定時はAPIを呼ばない）
        #[arg(long)]
        plants_json: Option<PathBuf>,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/table)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// 毒性参照データを検証
    Validate {
        /// 毒性参照データCSV（省略時は設定値）
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// 対応している動物の一覧
    Animals,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// PlantNetのURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 毒性参照データCSVの既定パスを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
