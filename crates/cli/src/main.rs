mod stats_file;

use anyhow::{bail, Context, Result};
use gridiron_core::{Card, CardKind, NoticeBus, RoundEngine, Settlement, Severity};
use stats_file::{default_stats_path, JsonStatsFile};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const FALLBACK_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    stats_path: Option<PathBuf>,
}

fn parse_args() -> Result<CliOptions> {
    let mut seed = None;
    let mut stats_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(value.parse::<u64>().context("--seed must be an integer")?);
            }
            "--stats" => {
                let value = args.next().context("--stats needs a path")?;
                stats_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }
    Ok(CliOptions {
        seed: seed.unwrap_or_else(time_seed),
        stats_path,
    })
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}

fn main() -> Result<()> {
    let options = parse_args()?;
    let path = options
        .stats_path
        .or_else(default_stats_path)
        .context("cannot resolve a stats file path; set GRIDIRON_STATS or HOME")?;
    let store = Box::new(JsonStatsFile::new(path));
    let mut engine = RoundEngine::standard(options.seed, store)?;
    let mut notices = NoticeBus::default();

    println!("gridiron - football scoring card game (seed {})", options.seed);
    println!("type 'help' for commands");
    engine.start_round(&mut notices);
    flush_notices(&mut notices);
    print_hand(&engine);

    let stdin = io::stdin();
    let mut settled = false;
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();

        match command {
            "help" | "?" => print_help(),
            "hand" | "h" => print_hand(&engine),
            "status" | "s" => print_status(&engine),
            "stats" => print_stats(&engine),
            "cards" => print_card_table(&engine),
            "play" | "p" => {
                if settled {
                    println!("round is settled; 'new' deals the next one");
                    continue;
                }
                let Some(index) = parse_index(arg) else {
                    println!("usage: play <index>");
                    continue;
                };
                engine.play_card(index, &mut notices);
                flush_notices(&mut notices);
                if engine.pending_discard().is_none() {
                    print_hand(&engine);
                }
            }
            "pick" => {
                let Some(pending) = engine.pending_discard() else {
                    println!("no discard selection open");
                    continue;
                };
                let Some(target) = parse_index(arg) else {
                    println!("usage: pick <index>");
                    continue;
                };
                engine.select_discard_target(pending, target, &mut notices);
                flush_notices(&mut notices);
                print_hand(&engine);
            }
            "cancel" => {
                engine.cancel_discard(&mut notices);
                flush_notices(&mut notices);
            }
            "undo" | "u" => {
                if settled {
                    println!("round is settled; 'new' deals the next one");
                    continue;
                }
                engine.undo(&mut notices);
                flush_notices(&mut notices);
                print_hand(&engine);
            }
            "end" => {
                if settled {
                    println!("round already settled; 'new' deals the next one");
                    continue;
                }
                let settlement = engine.end_round(&mut notices)?;
                flush_notices(&mut notices);
                print_settlement(&settlement);
                settled = true;
            }
            "new" => {
                engine.start_round(&mut notices);
                settled = false;
                flush_notices(&mut notices);
                print_hand(&engine);
            }
            "quit" | "q" | "exit" | "x" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }
    Ok(())
}

fn parse_index(arg: Option<&str>) -> Option<usize> {
    arg.and_then(|value| value.parse::<usize>().ok())
}

fn flush_notices(notices: &mut NoticeBus) {
    for notice in notices.drain() {
        let tag = match notice.severity() {
            Severity::Info => " . ",
            Severity::Success => " + ",
            Severity::Special => " * ",
        };
        println!("{tag}{notice}");
    }
}

fn card_line(card: &Card) -> String {
    let kind = match card.kind {
        CardKind::Event => "event",
        CardKind::Action(_) => "action",
        CardKind::Defensive => "defensive",
        CardKind::Special => "special",
    };
    if card.points > 0 {
        format!("{} ({kind}, {} pts)", card.name, card.points)
    } else {
        format!("{} ({kind})", card.name)
    }
}

fn print_hand(engine: &RoundEngine) {
    println!(
        "hand ({} cards, deck {}, discard pile {}):",
        engine.hand().len(),
        engine.deck_len(),
        engine.discard_len()
    );
    for (index, card) in engine.hand().iter().enumerate() {
        println!("  {index}: {}", card_line(card));
    }
}

fn print_status(engine: &RoundEngine) {
    let state = engine.state();
    println!(
        "score {} | cards played {} | chain {} ({}x) | combo {}x",
        state.score,
        state.cards_played,
        state.defensive_chain,
        state.chain_multiplier,
        state.combo_multiplier
    );
    println!(
        "deck {} | discard pile {}",
        engine.deck_len(),
        engine.discard_len()
    );
}

fn print_stats(engine: &RoundEngine) {
    let stats = engine.stats();
    println!(
        "personal best {} | games played {} | average {}",
        stats.personal_best, stats.games_played, stats.average_score
    );
}

fn print_card_table(engine: &RoundEngine) {
    for template in engine.card_set().templates() {
        println!(
            "{} x{} ({} pts) - {}",
            template.name, template.count, template.points, template.description
        );
    }
}

fn print_settlement(settlement: &Settlement) {
    println!("round settled:");
    println!("  base score   {}", settlement.base_score);
    for line in &settlement.penalty {
        println!("    -{} {}", line.points, line.name);
    }
    println!("  hand penalty {}", settlement.hand_penalty);
    println!("  final score  {}", settlement.final_score);
    if settlement.new_best {
        println!("  new personal best!");
    }
}

fn print_help() {
    println!("commands:");
    println!("  hand (h)        show your hand");
    println!("  play <i> (p)    play the card at hand index <i>");
    println!("  pick <i>        choose the card a played Discard returns to the deck");
    println!("  cancel          close an open discard selection");
    println!("  undo (u)        take back the most recent scoring play");
    println!("  end             settle the round (hand points count against you)");
    println!("  new             deal the next round");
    println!("  status (s)      score, chain and deck counts");
    println!("  stats           lifetime record");
    println!("  cards           the full card table");
    println!("  quit (q)        leave");
    println!();
    println!("flags: --seed <n> for a reproducible deck, --stats <path> for the record file");
}
