use anyhow::Context;
use chrono::Local;
use clap::Parser;
use olymate::{chat, cli, config, loader, map, schedule, view, weather};
use cli::{Cli, Commands};
use config::Config;
use loader::Dataset;
use olymate_common::Concert;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// 공연 API 결과까지 합친 데이터
async fn load_with_schedule(config: &Config) -> anyhow::Result<Dataset> {
    let mut dataset = Dataset::load(config)?;
    dataset.concerts = schedule::fetch_concerts(config).await;
    Ok(dataset)
}

/// 제목으로 공연을 고른다 (제목을 줬는데 없으면 경고)
fn pick_concert<'a>(concerts: &'a [Concert], title: Option<&str>) -> Option<&'a Concert> {
    let selected = schedule::select_concert(concerts, title);
    if let (Some(title), None) = (title, selected) {
        println!("⚠ 공연을 찾을 수 없습니다: {}", title);
    }
    selected
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("설정 파일을 읽을 수 없습니다")?;
    let language = cli.lang.unwrap_or(config.language);
    let text = language.text();

    match cli.command {
        Commands::Facility { query } => {
            let dataset = Dataset::load(&config)?;
            let search = dataset.guide.search_facility(&cli::join_query(&query));
            print_lines(&view::facility_lines(text, &search));
        }

        Commands::Recommend { query } => {
            let dataset = Dataset::load(&config)?;
            let places = dataset.guide.recommend(&cli::join_query(&query));
            print_lines(&view::place_lines(text, &places));
        }

        Commands::Concerts { select } => {
            let concerts = schedule::fetch_concerts(&config).await;
            let now = Local::now().naive_local();

            match select {
                Some(title) => match schedule::select_concert(&concerts, Some(&title)) {
                    Some(concert) => print_lines(&view::concert_detail_lines(text, concert, now)),
                    None => println!("⚠ 공연을 찾을 수 없습니다: {}", title),
                },
                None => {
                    println!("{} ({}개)", text.select, concerts.len());
                    print_lines(&view::concert_lines(&concerts, now));
                }
            }
        }

        Commands::Weather => {
            let report = weather::fetch_weather(&config).await;
            print_lines(&view::weather_lines(text, report.as_ref()));
        }

        Commands::Map { layer, concert, json } => {
            let dataset = load_with_schedule(&config).await?;
            let selected = pick_concert(&dataset.concerts, concert.as_deref());

            let mut state = olymate::session::AppState::new(language);
            if let Some(concert) = selected {
                state.select_concert(concert);
            }

            let markers = map::compose_markers(&state, &dataset.guide, selected, &layer);

            if json {
                println!("{}", serde_json::to_string_pretty(&markers)?);
            } else {
                let labels: Vec<&str> = layer.iter().map(|l| l.label()).collect();
                println!("🗺️ 마커 {}개 (필터: {})", markers.len(), labels.join(", "));
                for marker in &markers {
                    println!(
                        "  [{:?}] {} ({:.6}, {:.6})",
                        marker.color, marker.popup, marker.position.0, marker.position.1
                    );
                }
                println!("\n🚗 주차 및 교통 정보");
                for info in olymate::i18n::PARKING_INFO {
                    println!("  - {}", info);
                }
            }
        }

        Commands::Chat { concert } => {
            let dataset = load_with_schedule(&config).await?;
            let selected = pick_concert(&dataset.concerts, concert.as_deref());
            chat::run_chat(&dataset, selected, language)?;
        }

        Commands::Synonyms => {
            let dataset = Dataset::load(&config)?;
            let synonyms = dataset.guide.synonyms();
            println!("동의어 {}개", synonyms.len());
            for (token, keyword) in synonyms.entries() {
                println!("  {} → {}", token, keyword);
            }
        }

        Commands::Config { set_weather_key, set_concert_key, show } => {
            let mut config = config;

            if let Some(key) = set_weather_key {
                config.set_weather_api_key(key)?;
                println!("✔ 기상청 API 키를 설정했습니다");
            }

            if let Some(key) = set_concert_key {
                config.set_concert_api_key(key)?;
                println!("✔ 공연정보 API 키를 설정했습니다");
            }

            if show {
                let state = |set: bool| if set { "설정됨" } else { "미설정" };
                println!("설정:");
                println!("  설정 파일: {}", Config::config_path()?.display());
                println!("  시설 데이터: {}", config.facilities_path.display());
                println!("  기상청 API 키: {}", state(config.weather_api_key().is_ok()));
                println!("  공연정보 API 키: {}", state(config.concert_api_key().is_ok()));
                println!("  언어: {:?}", config.language);
            }
        }
    }

    Ok(())
}
