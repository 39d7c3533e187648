//! Twelve Yard Cup CLI
//!
//! Plays one penalty round from the terminal: configure the shot, pick
//! a target zone, let the remote keeper-dive model decide where the
//! keeper goes, and see whether the ball went in.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use pk_core::{
    Foot, PredictionGateway, RoundMachine, RoundState, ShotOutcome, ShotRequest, TEAMS,
};
use pk_gateway::HttpPredictionGateway;

#[derive(Parser)]
#[command(name = "twelve-yard-cup")]
#[command(about = "Take a penalty against the keeper-dive model", long_about = None)]
struct Cli {
    /// National team code (e.g. FRA, GER, BRA)
    #[arg(long, default_value = "FRA")]
    team: String,

    /// Kicking foot: L or R
    #[arg(long, default_value = "R", value_parser = ["L", "R"])]
    foot: String,

    /// Target zone on the 3x3 board (1-9, left-to-right, top-to-bottom)
    #[arg(long)]
    zone: u8,

    /// Which penalty of the shootout this is (1-12)
    #[arg(long, default_value_t = 1)]
    penalty_number: u8,

    /// Sudden-death elimination kick
    #[arg(long, default_value_t = false)]
    elimination: bool,

    /// Base URL of the prediction service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Fix the keeper RNG for a reproducible round
    #[arg(long)]
    seed: Option<u64>,

    /// List accepted team codes and exit
    #[arg(long, default_value_t = false)]
    list_teams: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_teams {
        for code in TEAMS {
            println!("{code}");
        }
        return Ok(());
    }

    let request = ShotRequest {
        team: cli.team,
        foot: if cli.foot == "L" { Foot::Left } else { Foot::Right },
        target_zone: cli.zone,
        penalty_number: cli.penalty_number,
        elimination: cli.elimination,
    };
    request.validate()?;

    let gateway = HttpPredictionGateway::new(&cli.base_url)
        .with_context(|| format!("cannot build client for {}", cli.base_url))?;

    let mut machine = RoundMachine::new();
    let ticket = machine
        .select_zone(request.target_zone)?
        .ok_or_else(|| anyhow!("round already in progress"))?;

    println!(
        "{} steps up... penalty #{} aimed at zone {}.",
        request.team, request.penalty_number, request.target_zone
    );

    match gateway.predict(&request) {
        Ok(prediction) => {
            let random_unit = match cli.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed).gen::<f64>(),
                None => rand::thread_rng().gen::<f64>(),
            };
            machine.complete(&ticket, &prediction, random_unit);
        }
        Err(error) => {
            machine.fail(&ticket, error);
        }
    }

    match machine.state() {
        RoundState::Resolved { keeper_direction, outcome } => {
            println!(
                "Keeper dives {} (covering zones {:?}).",
                keeper_direction,
                keeper_direction.column()
            );
            match outcome {
                ShotOutcome::Goal => println!("Goal! You avoided the keeper's dive."),
                ShotOutcome::Blocked => println!("Blocked."),
            }
            Ok(())
        }
        RoundState::Failed { error } => {
            println!("Prediction failed - try again.");
            Err(anyhow!(error.clone()))
        }
        // select_zone succeeded and exactly one completion ran, so the
        // machine cannot still be idle or awaiting here.
        other => Err(anyhow!("round ended in unexpected state: {other:?}")),
    }
}
