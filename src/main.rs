use clap::Parser;
use toxic_plants::{cli, config, error, output, plant_service, request, scanner};
use toxic_plants_common::{load_reference_csv, parse_plant_response, Animal, ToxicityRecordStore};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use request::CheckRequest;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            data,
            animals,
            images,
            organs,
            lang,
            plants_json,
            output: output_path,
            format,
        } => {
            let config = Config::load()?;

            // 動物名は先に検証（APIを無駄に呼ばない）
            let parsed_animals = request::parse_animals(&animals)?;

            // 参照データは照合前に全件読み込み、以降は不変束縛で読み取り専用
            let store: ToxicityRecordStore =
                load_reference_csv(&config.reference_data_path(data)?)?;

            let report = if let Some(path) = plants_json {
                let body = std::fs::read_to_string(&path)?;
                let plants = parse_plant_response(&body)?;
                request::check_plants(&store, &parsed_animals, plants)?
            } else {
                let image_infos = scanner::collect_images(&images)?;
                if image_infos.is_empty() && !config.mock_plant_call() {
                    return Err(error::ToxicPlantsError::NoImagesFound(
                        "--image で画像を指定してください".into(),
                    ));
                }

                let service = plant_service::from_config(&config)?;
                let request = CheckRequest {
                    animals,
                    query: plant_service::PlantQuery {
                        images: image_infos,
                        organs,
                        language: lang.or_else(|| Some(config.language.clone())),
                    },
                };
                request::handle_request(&store, service.as_ref(), &request).await?
            };

            let content = output::render(&report, format)?;
            output::write_output(&content, output_path.as_deref())?;
        }

        Commands::Validate { data } => {
            let config = Config::load()?;
            let path = config.reference_data_path(data)?;
            let store = load_reference_csv(&path)?;

            println!("✔ {}件の毒性レコードを検証: {}", store.len(), path.display());
            for animal in Animal::all() {
                let count = store.get_by_animal(animal).len();
                if count > 0 {
                    println!("  {}: {}件", animal, count);
                }
            }
        }

        Commands::Animals => {
            for animal in Animal::all() {
                println!("{}", animal);
            }
        }

        Commands::Config { set_api_key, set_url, set_data, show } => {
            // 環境変数の上書きを保存しないよう、ファイルの値だけを編集する
            let mut config = Config::load_file()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(url) = set_url {
                config.set_plantnet_url(url)?;
                println!("✔ PlantNetのURLを設定しました");
            }

            if let Some(path) = set_data {
                config.set_reference_data(path)?;
                println!("✔ 毒性参照データを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  PlantNet URL: {}",
                    config.plantnet_url.as_deref().unwrap_or("未設定")
                );
                println!("  言語: {}", config.language);
                println!(
                    "  参照データ: {}",
                    config
                        .reference_data
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  モック: {}", config.mock_plant_call);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                let api_key = if config.api_key.is_some() { "設定済み" } else { "未設定" };
                println!("  APIキー: {}", api_key);
            }
        }
    }

    Ok(())
}
