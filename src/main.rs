use analytics::{parse_dataset, AnalysisOptions, SalesAnalyzer, SellerResult};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::{load_config, Config};
use policies::{create_bonus_policy, create_revenue_policy};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the sales report tool.
fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration from {}: {}", cli.config.display(), e);
            std::process::exit(2);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("Error initializing logging: {}", e);
    }

    let outcome = match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &config),
        Commands::CheckConfig => handle_check_config(&config),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks sellers by profit and computes their bonuses from purchase records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply if it does not exist.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a JSON dataset of sellers, products and purchase records.
    Analyze(AnalyzeArgs),
    /// Print the effective configuration after defaults and environment overrides.
    CheckConfig,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the dataset JSON file.
    #[arg(long)]
    data: PathBuf,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the analysis options from the configured policies.
fn options_from_config(config: &Config) -> anyhow::Result<AnalysisOptions> {
    let bonus = create_bonus_policy(&config.policies).context("invalid bonus policy parameters")?;
    Ok(AnalysisOptions {
        calculate_revenue: Some(create_revenue_policy(config.policies.revenue)),
        calculate_bonus: Some(bonus),
        top_products_limit: config.analysis.top_products_limit,
        rounding: config.analysis.rounding,
    })
}

fn handle_analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.data)
        .with_context(|| format!("failed to read dataset {}", args.data.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", args.data.display()))?;

    let dataset = parse_dataset(&value)?;
    let options = options_from_config(config)?;
    tracing::debug!(?options, "Running sales analysis.");

    let results = SalesAnalyzer::new().analyze(&dataset, &options)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => println!("{}", render_table(&results)),
    }
    Ok(())
}

fn handle_check_config(config: &Config) -> anyhow::Result<()> {
    // Fail the same way `analyze` would on bad policy parameters.
    options_from_config(config)?;
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn render_table(results: &[SellerResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Rank", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top products",
    ]);

    for (rank, result) in results.iter().enumerate() {
        let top_products = result
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            (rank + 1).to_string(),
            result.seller_id.clone(),
            result.name.clone(),
            result.revenue.to_string(),
            result.profit.to_string(),
            result.sales_count.to_string(),
            result.bonus.to_string(),
            top_products,
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn options_follow_the_configuration() {
        let mut config = Config::default();
        config.analysis.top_products_limit = 3;
        let options = options_from_config(&config).unwrap();

        assert!(options.calculate_revenue.is_some());
        assert!(options.calculate_bonus.is_some());
        assert_eq!(options.top_products_limit, 3);
    }

    #[test]
    fn negative_bonus_tier_is_an_error() {
        let mut config = Config::default();
        config.policies.bonus_by_profit.default_pct = dec!(-5);
        assert!(options_from_config(&config).is_err());
    }

    #[test]
    fn sample_dataset_renders_a_row_per_seller() {
        let raw = include_str!("../demos/sample_dataset.json");
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let dataset = parse_dataset(&value).unwrap();
        let options = options_from_config(&Config::default()).unwrap();

        let results = SalesAnalyzer::new().analyze(&dataset, &options).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].seller_id, "seller_2");

        let rendered = render_table(&results).to_string();
        assert!(rendered.contains("Ivan Smirnov"));
        assert!(rendered.contains("SKU_003 x2"));
    }
}
