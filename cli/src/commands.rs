use anyhow::{bail, Context};
use common::{
    data::{
        deck_store,
        pack_store::{PackStore, PROMPTS_FILE, RESPONSES_FILE},
        validate::validate,
    },
    round::{simulate, RandomStrategy, SimulationReport},
    Card, Deck, Game, GameConfig, Pack, TableRng,
};
use log::{info, warn};
use std::{fs, path::Path};

use crate::{
    args::{DeckArgs, DeckKind, ExportArgs, PacksArgs, PlayArgs, ShuffleArgs, SimulateArgs, TableArgs, ValidateArgs},
    console::Console,
};

/// Loads the pack named on the command line, or the two loose CSV files.
pub fn load_pack(args: &DeckArgs) -> anyhow::Result<Pack> {
    if let Some(name) = &args.pack {
        let mut store = PackStore::new(&args.packs)?;
        let pack = store.load_pack(name)?;
        return Ok((*pack).clone());
    }

    let prompts_path = args.prompts.clone().unwrap_or_else(|| PROMPTS_FILE.into());
    let responses_path = args.responses.clone().unwrap_or_else(|| RESPONSES_FILE.into());

    let prompts = deck_store::load_prompts(&prompts_path)
        .with_context(|| format!("Error loading prompts from {}", prompts_path.display()))?;
    let responses = deck_store::load_responses(&responses_path)
        .with_context(|| format!("Error loading responses from {}", responses_path.display()))?;

    let name = prompts_path
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("cards")
        .to_owned();
    Ok(Pack::new(name, prompts, responses))
}

/// House rules from the config file with command line overrides applied.
pub fn table_config(config: &GameConfig, table: &TableArgs) -> anyhow::Result<GameConfig> {
    let mut config = config.clone();
    if let Some(hand_size) = table.hand_size {
        config.hand_size = hand_size;
    }
    if let Some(points) = table.points_to_win {
        config.points_to_win = Some(points);
    }
    if let Some(seed) = table.seed {
        config.seed = Some(seed);
    }
    config.check()?;
    Ok(config)
}

pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = TableRng::from_entropy_seed();
            info!("No seed given, using {} (pass --seed {} to replay)", seed, seed);
            seed
        }
    }
}

pub fn validate_cmd(args: ValidateArgs) -> anyhow::Result<()> {
    let pack = load_pack(&args.deck)?;
    let report = validate(&pack);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} prompts, {} responses",
            report.pack, report.prompts, report.responses
        );
        for issue in &report.issues {
            println!("  warning: {}", issue);
        }
        if report.is_clean() {
            println!("  no problems found");
        }
    }

    if args.strict && !report.is_clean() {
        bail!("{} problem(s) flagged in {}", report.issues.len(), report.pack);
    }
    Ok(())
}

pub fn shuffle_cmd(args: ShuffleArgs, config: &GameConfig) -> anyhow::Result<()> {
    let pack = load_pack(&args.source)?;
    let mut rng = TableRng::new(resolve_seed(args.seed.or(config.seed)));

    let texts: Vec<String> = match args.deck {
        DeckKind::Prompts => shuffled(pack.prompts, &mut rng),
        DeckKind::Responses => shuffled(pack.responses, &mut rng),
    };

    for (i, text) in texts.iter().enumerate() {
        println!("{:>4}. {}", i + 1, text);
    }
    Ok(())
}

fn shuffled<C: Card>(cards: Vec<C>, rng: &mut TableRng) -> Vec<String> {
    let mut deck = Deck::new(cards);
    deck.shuffle(rng);
    deck.iter().map(|card| card.text().to_owned()).collect()
}

pub fn export_cmd(args: ExportArgs) -> anyhow::Result<()> {
    let pack = load_pack(&args.deck)?;
    write_pack(&pack, &args.out)?;
    println!(
        "Wrote {} prompts and {} responses to {}",
        pack.prompts.len(),
        pack.responses.len(),
        args.out.display()
    );
    Ok(())
}

fn write_pack(pack: &Pack, out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Error creating {}", out.display()))?;
    deck_store::save(&pack.prompts, out.join(PROMPTS_FILE)).context("Error writing prompts")?;
    deck_store::save(&pack.responses, out.join(RESPONSES_FILE))
        .context("Error writing responses")?;
    Ok(())
}

pub fn packs_cmd(args: PacksArgs) -> anyhow::Result<()> {
    let store = PackStore::new(&args.packs)?;
    let packs = store.possible_packs();

    if args.json {
        println!("{}", serde_json::to_string_pretty(packs)?);
        return Ok(());
    }

    if packs.is_empty() {
        warn!("No packs found in {}", args.packs.display());
    }
    for (name, meta) in packs {
        println!(
            "{:<30} {:>5} prompts {:>5} responses",
            name, meta.num_prompts, meta.num_responses
        );
    }
    Ok(())
}

pub fn simulate_cmd(args: SimulateArgs, config: &GameConfig) -> anyhow::Result<()> {
    let pack = load_pack(&args.deck)?;
    let config = table_config(config, &args.table)?;
    let seed = resolve_seed(config.seed);

    let names = if args.player.is_empty() {
        (1 ..= args.players).map(|seat| format!("Player #{}", seat)).collect()
    } else {
        args.player
    };

    let mut game = Game::new(config, names, pack.prompts, pack.responses, seed)?;
    let report = simulate(&mut game, &mut RandomStrategy::new(seed), args.rounds)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SimulationReport) {
    for round in &report.rounds {
        println!("Round {} (czar: {})", round.round, round.czar);
        println!("  {}", round.prompt);
        println!("  -> {}: {}", round.winner, round.winning_response);
    }
    println!("Game over: {}", report.end_reason);
    for standing in &report.standings {
        println!("{:>4}  {}", standing.score, standing.name);
    }
    println!("Seed: {}", report.seed);
}

pub fn play_cmd(args: PlayArgs, config: &GameConfig) -> anyhow::Result<()> {
    let pack = load_pack(&args.deck)?;
    let config = table_config(config, &args.table)?;
    let seed = resolve_seed(config.seed);

    let game = Game::new(config, args.player, pack.prompts, pack.responses, seed)?;
    Console::new(game).run()
}
