use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wcgw",
    version,
    about = "Deck tools and a table console for the \"What Could Go Wrong?\" card game"
)]
pub struct Cli {
    /// House rules as JSON (hand_size, min_players, max_players, points_to_win, seed)
    #[arg(long, global = true, env = "WCGW_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output; repeat for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to a timestamped file in this directory
    #[arg(long, global = true, env = "WCGW_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load both decks and report data problems
    Validate(ValidateArgs),
    /// Print one deck in the order a seed shuffles it
    Shuffle(ShuffleArgs),
    /// Rewrite both decks in canonical CSV form
    Export(ExportArgs),
    /// List the packs of a pack directory
    Packs(PacksArgs),
    /// Play whole games with random players and judges
    Simulate(SimulateArgs),
    /// Run the table console for a group playing together
    Play(PlayArgs),
}

/// Where the cards come from. Without flags, `prompts.csv` and
/// `responses.csv` in the working directory.
#[derive(Args, Clone, Debug)]
pub struct DeckArgs {
    #[arg(long, requires = "responses", conflicts_with = "pack")]
    pub prompts: Option<PathBuf>,

    #[arg(long, requires = "prompts", conflicts_with = "pack")]
    pub responses: Option<PathBuf>,

    /// Pack to load from the pack directory
    #[arg(long)]
    pub pack: Option<String>,

    #[arg(long, default_value = "packs")]
    pub packs: PathBuf,
}

#[derive(Args, Clone, Debug, Default)]
pub struct TableArgs {
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub hand_size: Option<usize>,

    #[arg(long)]
    pub points_to_win: Option<u32>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Fail when any problem is flagged
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckKind {
    Prompts,
    Responses,
}

#[derive(Args)]
pub struct ShuffleArgs {
    #[command(flatten)]
    pub source: DeckArgs,

    /// Which deck to print
    #[arg(long, value_enum, default_value = "prompts")]
    pub deck: DeckKind,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct PacksArgs {
    #[arg(long, default_value = "packs")]
    pub packs: PathBuf,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    #[command(flatten)]
    pub table: TableArgs,

    /// Number of anonymous players
    #[arg(long, conflicts_with = "player", default_value_t = 4)]
    pub players: usize,

    /// Named player; repeat for each seat
    #[arg(long)]
    pub player: Vec<String>,

    /// Stop after this many scored rounds
    #[arg(long, default_value_t = 10)]
    pub rounds: u32,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    #[command(flatten)]
    pub table: TableArgs,

    /// Player name in seat order; repeat for each seat
    #[arg(long, required = true)]
    pub player: Vec<String>,
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
    fn test_prompts_need_responses() {
        assert!(Cli::try_parse_from(["wcgw", "validate", "--prompts", "p.csv"]).is_err());
        assert!(Cli::try_parse_from([
            "wcgw",
            "validate",
            "--prompts",
            "p.csv",
            "--responses",
            "r.csv"
        ])
        .is_ok());
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["wcgw", "simulate", "--seed", "9"]).unwrap();
        match cli.cmd {
            Command::Simulate(args) => {
                assert_eq!(args.players, 4);
                assert_eq!(args.rounds, 10);
                assert_eq!(args.table.seed, Some(9));
                assert!(args.player.is_empty());
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_shuffle_picks_deck() {
        let cli = Cli::try_parse_from(["wcgw", "shuffle", "--deck", "responses"]).unwrap();
        match cli.cmd {
            Command::Shuffle(args) => {
                assert_eq!(args.deck, DeckKind::Responses);
                assert_eq!(args.source.packs, PathBuf::from("packs"));
            }
            _ => panic!("expected shuffle"),
        }
        assert!(Cli::try_parse_from(["wcgw", "shuffle", "--which", "responses"]).is_err());
    }

    #[test]
    fn test_play_requires_players() {
        assert!(Cli::try_parse_from(["wcgw", "play"]).is_err());
    }
}
