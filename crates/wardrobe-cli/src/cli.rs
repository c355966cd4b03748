use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use wardrobe_core::VERSION;

/// Wardrobe - track what you own, what you wear, and what it costs per wear
#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the wardrobe snapshot (JSON)
    #[arg(short, long, global = true, env = "WARDROBE_SNAPSHOT")]
    pub snapshot: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the snapshot lives (created empty if missing)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum GarmentsSubcommand {
    /// Add a garment to the wardrobe
    Add(GarmentAddArgs),
    /// List garments
    List(GarmentListArgs),
    /// Show one garment with its cost per wear
    Show(ShowArgs),
    /// Log a wear of a garment
    Wear(WearArgs),
    /// Archive a garment (soft delete)
    Archive(ArchiveArgs),
}

/// Arguments for `garments add`
#[derive(Args)]
pub struct GarmentAddArgs {
    /// Garment name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Category or garment type (e.g. tops, jeans, sneakers)
    #[arg(long)]
    pub category: String,

    /// Primary color
    #[arg(long)]
    pub color: String,

    /// Secondary color
    #[arg(long)]
    pub secondary_color: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub material: Option<String>,

    /// Purchase price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Season the garment is worn in (repeatable)
    #[arg(long = "season", value_name = "SEASON")]
    pub seasons: Vec<String>,

    /// Mark as favorite
    #[arg(long)]
    pub favorite: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `garments list`
#[derive(Args)]
pub struct GarmentListArgs {
    /// Filter by category (or garment type, e.g. "jeans")
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by primary or secondary color
    #[arg(long)]
    pub color: Option<String>,

    /// Only favorites
    #[arg(long)]
    pub favorite: bool,

    /// Search name and brand
    #[arg(long)]
    pub search: Option<String>,

    /// Include archived garments
    #[arg(long)]
    pub archived: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum OutfitsSubcommand {
    /// Create an outfit from existing garments
    Create(OutfitCreateArgs),
    /// List outfits with their cost figures
    List(OutfitListArgs),
    /// Show one outfit
    Show(ShowArgs),
    /// Log a wear of an outfit and of every garment in it
    Wear(WearArgs),
}

/// Arguments for `outfits create`
#[derive(Args)]
pub struct OutfitCreateArgs {
    /// Outfit name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Garment ID or prefix (repeatable, in display order)
    #[arg(long = "item", value_name = "ID", required = true)]
    pub items: Vec<String>,

    /// Occasion (repeatable, e.g. work, formal_event)
    #[arg(long = "occasion", value_name = "OCCASION")]
    pub occasions: Vec<String>,

    /// Season (repeatable, e.g. summer, all_year)
    #[arg(long = "season", value_name = "SEASON")]
    pub seasons: Vec<String>,

    /// Mark as favorite
    #[arg(long)]
    pub favorite: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `outfits list`
#[derive(Args)]
pub struct OutfitListArgs {
    /// Filter by occasion (e.g. work, formal_event)
    #[arg(long)]
    pub occasion: Option<String>,

    /// Filter by season (all-year outfits always match)
    #[arg(long)]
    pub season: Option<String>,

    /// Only favorites
    #[arg(long)]
    pub favorite: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `show` subcommands
#[derive(Args)]
pub struct ShowArgs {
    /// ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wear` subcommands
#[derive(Args)]
pub struct WearArgs {
    /// ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Date worn (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `garments archive`
#[derive(Args)]
pub struct ArchiveArgs {
    /// Garment ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `forgotten` command
#[derive(Args)]
pub struct ForgottenArgs {
    /// Number of items to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create an empty snapshot if needed
    Init(InitArgs),

    /// Collection statistics, sustainability score, and a tip
    Stats(StatsArgs),

    /// Work with garments
    #[command(subcommand)]
    Garments(GarmentsSubcommand),

    /// Work with outfits
    #[command(subcommand)]
    Outfits(OutfitsSubcommand),

    /// The least-worn garments
    Forgotten(ForgottenArgs),

    /// Print the compact wardrobe context used for styling requests (JSON)
    Context,

    /// Validate every record and check references between them
    Check(CheckArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_garment_command() {
        let cli = Cli::try_parse_from([
            "wardrobe", "-vv", "garments", "list", "--category", "tops", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Garments(GarmentsSubcommand::List(args))) => {
                assert_eq!(args.category.as_deref(), Some("tops"));
                assert!(args.json);
            }
            _ => panic!("expected garments list"),
        }
    }

    #[test]
    fn test_parses_garment_add_with_negative_price() {
        let cli = Cli::try_parse_from([
            "wardrobe", "garments", "add", "Parka", "--category", "parka", "--color", "olive",
            "--price", "-5", "--season", "winter", "--season", "fall",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Garments(GarmentsSubcommand::Add(args))) => {
                assert_eq!(args.price, Some(-5.0));
                assert_eq!(args.seasons, vec!["winter", "fall"]);
            }
            _ => panic!("expected garments add"),
        }
    }

    #[test]
    fn test_outfit_create_requires_items() {
        assert!(Cli::try_parse_from(["wardrobe", "outfits", "create", "Empty"]).is_err());
        let cli = Cli::try_parse_from([
            "wardrobe", "outfits", "create", "Office", "--item", "1111", "--item", "2222",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Outfits(OutfitsSubcommand::Create(args))) => {
                assert_eq!(args.items, vec!["1111", "2222"]);
            }
            _ => panic!("expected outfits create"),
        }
    }

    #[test]
    fn test_global_snapshot_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["wardrobe", "stats", "--snapshot", "/tmp/w.json"]).unwrap();
        assert_eq!(cli.snapshot.as_deref(), Some("/tmp/w.json"));
    }
}
