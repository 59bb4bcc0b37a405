//! Demo driver for the matchmaking engine.
//!
//! Seeds a roster, runs the round loop to exhaustion with random
//! outcomes, schedules catch-up matches for anyone left short, then
//! prints standings and per-track champions. Everything is reproducible
//! from the seed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use arena_core::{
    append_matches, catch_up_match, compute_standings_scores, find_catch_up_volunteer,
    generate_round_pairings, rank_standings, receive_bet, record_outcome, remaining_needs,
    select_track_champion, CompetitionRules, MatchOutcome, RoundLog, TournamentState, Track,
};

#[derive(Parser)]
#[command(name = "arena", about = "Run a demo arena night", version)]
struct Args {
    /// RNG seed; the whole tournament is reproducible from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of competitors in the demo roster (4-12)
    #[arg(long, default_value_t = 8)]
    roster: usize,

    /// Optional JSON file with competition rules overrides
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print the per-round diagnostic log
    #[arg(long)]
    verbose_rounds: bool,
}

const NAMES: [&str; 12] = [
    "Mara", "Oren", "Suki", "Theo", "Ines", "Pavel", "Ruth", "Kofi", "Lena", "Diego", "Aiko",
    "Bram",
];

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rules = load_rules(args.rules.as_deref())?;
    let roster_size = args.roster.clamp(4, NAMES.len());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut state = TournamentState::with_roster(NAMES[..roster_size].iter().copied());

    println!(
        "Arena night: {} competitors, seed {}, started {}",
        roster_size,
        args.seed,
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    // Main schedule: rounds until no track can be filled.
    loop {
        let round = state.round + 1;
        let pairings = generate_round_pairings(
            &state.competitors,
            &state.match_history,
            round,
            &rules,
            &mut rng,
        );
        if pairings.matches.is_empty() {
            info!("round {round}: no track could be filled, main schedule over");
            break;
        }
        if args.verbose_rounds {
            print_round_log(&pairings.log);
        }

        let first_new = state.match_history.len();
        state = append_matches(&state, &pairings);
        for index in first_new..state.match_history.len() {
            let outcome = random_outcome(&state, index, &mut rng);
            state = record_outcome(&state, index, outcome, &rules)?;
        }

        // The crowd places a few bets each round.
        for _ in 0..rng.gen_range(0..3) {
            let fan_pick = state.competitors[rng.gen_range(0..state.competitors.len())]
                .name
                .clone();
            state = receive_bet(&state, &fan_pick)?;
        }
    }

    run_catch_up(&mut state, &rules, &mut rng)?;
    print_report(&state, &rules, &mut rng);
    Ok(())
}

fn load_rules(path: Option<&std::path::Path>) -> Result<CompetitionRules> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading rules file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing rules file {}", path.display()))
        }
        None => Ok(CompetitionRules::default()),
    }
}

/// Schedule one catch-up match per remaining shortfall, never
/// double-booking a volunteer within the cycle.
fn run_catch_up(
    state: &mut TournamentState,
    rules: &CompetitionRules,
    rng: &mut impl Rng,
) -> Result<()> {
    let needs = remaining_needs(state, rules);
    if needs.is_empty() {
        return Ok(());
    }
    println!("\n=== Catch-up matches ===");
    let mut booked: Vec<String> = Vec::new();
    let round = state.round + 1;
    for (shortfall, track) in needs {
        let found =
            find_catch_up_volunteer(&state.competitors, &shortfall, track, &booked, rules, rng);
        let Some(m) = catch_up_match(&shortfall, track, &found, round) else {
            println!("{track}: no volunteer available for {shortfall}");
            continue;
        };
        let volunteer = found.volunteer.clone().unwrap_or_default();
        let tag = match (found.forced, found.exhausted) {
            (true, _) => " (forced draft)",
            (false, true) => " (rematch, pool exhausted)",
            _ => "",
        };
        println!("{track}: {shortfall} vs {volunteer}{tag}");
        booked.push(volunteer);

        let index = state.match_history.len();
        state.match_history.push(m);
        let outcome = random_outcome(state, index, rng);
        *state = record_outcome(state, index, outcome, rules)?;
    }
    Ok(())
}

fn random_outcome(state: &TournamentState, index: usize, rng: &mut impl Rng) -> MatchOutcome {
    let m = &state.match_history[index];
    if rng.gen_ratio(1, 10) {
        return MatchOutcome::Draw;
    }
    let winner = if rng.gen_bool(0.5) {
        m.first.clone()
    } else {
        m.second.clone()
    };
    MatchOutcome::Win {
        winner,
        dominant: rng.gen_ratio(1, 4),
    }
}

fn print_round_log(log: &RoundLog) {
    println!("\n--- Round {} ---", log.round);
    for entry in &log.entries {
        println!(
            "{}: {} [{}] vs {} [{}] :: {}",
            entry.track, entry.first, entry.first_record, entry.second, entry.second_record,
            entry.reason
        );
        for detail in &entry.details {
            println!("    - {detail}");
        }
    }
    for skip in &log.skipped {
        println!("{}: skipped ({})", skip.track, skip.reason);
    }
}

fn print_report(state: &TournamentState, rules: &CompetitionRules, rng: &mut impl Rng) {
    let scored = compute_standings_scores(&state.competitors);
    let ranked = rank_standings(&scored, rng);

    println!("\n=== Final standings ===");
    println!(
        "{:<10} {:>6} {:>9} {:>9} {:>6}",
        "Name", "Pts", "Buchholz", "DomWins", "Bets"
    );
    for c in &ranked {
        println!(
            "{:<10} {:>6} {:>9} {:>9} {:>6}",
            c.name, c.points, c.buchholz, c.dominant_wins, c.bets_received
        );
    }

    println!("\n=== Track champions ===");
    for track in Track::ALL {
        match select_track_champion(&scored, track, &state.match_history, rng) {
            Some(champ) => {
                let rec = champ.track(track);
                println!(
                    "{track}: {} ({})",
                    champ.name,
                    rec.summary(rules.matches_per_track)
                );
            }
            None => println!("{track}: no champion"),
        }
    }
}
