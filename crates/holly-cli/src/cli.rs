use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub url: Option<String>,
}

impl GlobalFlags {
    /// Result cap for list commands: the `--limit` flag when given,
    /// otherwise the configured default.
    #[must_use]
    pub fn effective_limit(&self, default_limit: u32) -> usize {
        self.limit.unwrap_or(default_limit) as usize
    }
}

/// Top-level CLI parser for the `holly` binary.
#[derive(Debug, Parser)]
#[command(name = "holly", version, about = "Hollytree - a shared ornament tree in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Post store URL (overrides sheet.url from config)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in the survey, seal the card, and hang an ornament on the tree
    Place(PlaceArgs),
    /// Show one room of the shared tree
    Tree(TreeArgs),
    /// Find an ornament by exact name and rotate its panel to the front
    Search(SearchArgs),
    /// Show the aggregated interest ranking
    Ranking(RankingArgs),
    /// List the cards on the comment board
    Posts,
    /// List comments on one card
    Comments(CommentsArgs),
    /// Leave a comment on a card
    Comment(CommentArgs),
    /// List the ornament catalog patterns
    Designs(DesignsArgs),
}

#[derive(Debug, clap::Args)]
pub struct PlaceArgs {
    /// Your name (anything goes, anonymity included)
    #[arg(long)]
    pub name: String,

    /// Affiliation label (1학년, 2학년, 3학년, 전공심화, 교수님)
    #[arg(long)]
    pub affiliation: String,

    /// Interest, repeatable up to 3 times
    #[arg(long = "interest", required = true)]
    pub interests: Vec<String>,

    /// Writing theme label (올해의 추억, 현재의 고민, 미래를 위한 다짐)
    #[arg(long)]
    pub theme: String,

    /// Card title
    #[arg(long)]
    pub title: String,

    /// Card message
    #[arg(long)]
    pub message: String,

    /// Catalog pattern id (plain, dot, star, snow, stripe1, stripe2)
    #[arg(long, default_value = "plain")]
    pub pattern: String,

    /// Slot to hang at (0-6, top of the tree first)
    #[arg(long)]
    pub slot: u8,
}

#[derive(Debug, clap::Args)]
pub struct TreeArgs {
    /// Room to view (defaults to general.default_room from config)
    #[arg(long)]
    pub room: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    /// Exact name (or record id) to look for
    pub term: String,
}

#[derive(Debug, clap::Args)]
pub struct RankingArgs {
    /// Restrict the ranking to one affiliation (default: all rooms)
    #[arg(long)]
    pub affiliation: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct CommentsArgs {
    /// Card id to list comments for
    pub post_id: String,
}

#[derive(Debug, clap::Args)]
pub struct CommentArgs {
    /// Card id to comment on
    pub post_id: String,

    /// Commenter nickname
    #[arg(long)]
    pub name: String,

    /// Affiliation label
    #[arg(long)]
    pub affiliation: String,

    /// Comment text
    #[arg(long)]
    pub message: String,
}

#[derive(Debug, clap::Args)]
pub struct DesignsArgs {
    /// Theme label to show the palette for (default: all palettes)
    #[arg(long)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["holly", "--format", "json", "--quiet", "posts"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Posts));
    }

    #[test]
    fn limit_flag_wins_over_configured_default() {
        let cli = Cli::try_parse_from(["holly", "--limit", "5", "posts"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.effective_limit(20), 5);

        let cli = Cli::try_parse_from(["holly", "posts"]).expect("cli should parse");
        assert_eq!(cli.global_flags().effective_limit(20), 20);
    }

    #[test]
    fn place_parses_repeated_interests() {
        let cli = Cli::try_parse_from([
            "holly", "place",
            "--name", "민서",
            "--affiliation", "1학년",
            "--interest", "브랜드 디자인",
            "--interest", "타이포그래피",
            "--theme", "올해의 추억",
            "--title", "올해",
            "--message", "수고했어",
            "--slot", "2",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Place(args) => {
                assert_eq!(args.interests.len(), 2);
                assert_eq!(args.pattern, "plain");
                assert_eq!(args.slot, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
