use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use wbfx_rs::countries::CountryDirectory;
use wbfx_rs::view::Card;
use wbfx_rs::{Config, Metric, Query, RequestController, Sources, currency};

#[derive(Parser, Debug)]
#[command(
    name = "wbfx",
    version,
    about = "Look up World Bank indicators and exchange rates by country and year"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one indicator or exchange rate and print it as a card.
    Get(GetArgs),
    /// List countries known to the World Bank (aggregates excluded).
    Countries(CountriesArgs),
    /// List countries with a currency mapping for the exchange-rate view.
    Currencies,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// ISO3 country code (e.g., BRA, USA, DEU)
    #[arg(short, long, default_value = "BRA")]
    country: String,
    /// life-expectancy, population, poverty, gdp or exchange-rate (World Bank codes also accepted)
    #[arg(short, long, default_value = "life-expectancy")]
    metric: Metric,
    /// Year (YYYY), 1960 or later
    #[arg(short = 'y', long, default_value_t = 2000, value_parser = clap::value_parser!(i32).range(1960..))]
    year: i32,
    /// Print the card as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Skip the country list request used to label the card.
    #[arg(long, default_value_t = false)]
    no_names: bool,
}

#[derive(Args, Debug)]
struct CountriesArgs {
    /// Only show countries whose name contains this text.
    #[arg(short, long)]
    search: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
        Command::Countries(args) => cmd_countries(args),
        Command::Currencies => {
            for (country, code) in currency::entries() {
                println!("{country}  {code}");
            }
            Ok(())
        }
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let sources = Sources::new(&Config::from_env()?)?;
    let query = Query::new(&args.country, args.metric, args.year)?;

    // The name is only a label; failing to get it must not fail the lookup.
    let directory = if args.no_names {
        CountryDirectory::default()
    } else {
        match sources.world_bank.fetch_countries() {
            Ok(list) => CountryDirectory::new(list),
            Err(err) => {
                log::warn!("country list unavailable: {:#}", err);
                CountryDirectory::default()
            }
        }
    };

    let mut controller = RequestController::new();
    controller.submit(&sources, &query);
    let card = Card::from_state(
        controller.view(),
        controller.state(),
        directory.name(query.country()),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{card}");
    }

    if let Some(err) = controller.state().error() {
        anyhow::bail!("{}", err);
    }
    Ok(())
}

fn cmd_countries(args: CountriesArgs) -> Result<()> {
    let sources = Sources::new(&Config::from_env()?)?;
    let directory = CountryDirectory::new(sources.world_bank.fetch_countries()?);
    let text = args.search.unwrap_or_default();
    let mut n = 0usize;
    for c in directory.search(&text) {
        println!("{}  {}", c.id, c.name);
        n += 1;
    }
    eprintln!("{} countries", n);
    Ok(())
}
