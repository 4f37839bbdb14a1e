use clap::Parser;
use tasa_calc::core::report::{render, render_variations, OutputFormat};
use tasa_calc::domain::ports::Storage;
use tasa_calc::utils::error::{CalcError, ErrorSeverity};
use tasa_calc::utils::{logger, validation::Validate};
use tasa_calc::{CalculatorEngine, CliConfig, DatasetLoader, LocalStorage, Settings, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting tasa-calc");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> Result<(), CalcError> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => TomlConfig::default(),
    };

    let settings = Settings::resolve(cli.overrides()?, &file_config)?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let input = settings.input;
    let deposit_ranking = settings.deposit_ranking;
    let fund_ranking = settings.fund_ranking;
    let format = settings.format;

    let storage = LocalStorage::new(".");
    let loader = DatasetLoader::new(storage.clone(), settings)?;
    let history = loader.load_history().await?;

    let engine = CalculatorEngine::new(loader);
    let report = engine.run(&input, &deposit_ranking, &fund_ranking).await?;

    let mut rendered = render(&report, format)?;
    if let Some(history) = history {
        let today = chrono::Local::now().date_naive();
        if let Some(latest) = history.latest_variation_pct() {
            tracing::info!("FCI latest daily variation: {:.4}%", latest);
        }
        if format == OutputFormat::Table {
            rendered.push_str(&render_variations(
                &history.month_to_date(today),
                Some(history.estimated_value_today(input.principal)),
            ));
        }
    }

    print!("{}", rendered);

    if let Some(output) = &cli.output {
        storage.write_file(output, rendered.as_bytes()).await?;
        tracing::info!("📁 Report saved to: {}", output);
    }

    Ok(())
}
