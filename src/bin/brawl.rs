//! Terminal front end.
//!
//! Usage: `brawl [seed] [config.json]`
//!
//! Reads one trigger per line from stdin: `murloc`, `demon`, `fight` (or
//! `m`, `d`, `f`). `quit` exits. Set `RUST_LOG=debug` to see every step.

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use card_brawl::{Arena, BattleStep, BrawlConfig, GameRng, TerminalRenderer, Trigger, WallClock};

const VIEWPORT_ROWS: u16 = 40;
const CARD_ROWS: u16 = 4;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => parse_seed(&raw)?,
        None => GameRng::from_entropy().seed(),
    };
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => BrawlConfig::default(),
    };

    log::info!("Seed {seed}");

    let renderer = TerminalRenderer::new(io::stdout(), VIEWPORT_ROWS, CARD_ROWS);
    let mut arena = Arena::new(config, seed, renderer, WallClock::<BattleStep>::new())
        .context("building arena")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.eq_ignore_ascii_case("quit") {
            break;
        }

        match word.parse::<Trigger>() {
            Ok(trigger) => {
                // Rejections are already logged where they happen.
                if arena.handle(trigger).is_ok() && trigger == Trigger::Fight {
                    arena.run_until_idle();
                }
            }
            Err(err) => log::warn!("{err}"),
        }
    }

    Ok(())
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("seed must be an unsigned integer, got '{raw}'"))
}

fn load_config(path: &str) -> Result<BrawlConfig> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    BrawlConfig::from_json(&json).with_context(|| format!("loading config {path}"))
}
