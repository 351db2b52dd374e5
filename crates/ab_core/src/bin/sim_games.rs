// Aggregate outcome distribution check over many seeded games
// Run with: cargo run --bin sim_games --release

use ab_core::api::simulate_game_json;
use anyhow::Context;
use serde_json::Value;

fn create_test_request(seed: u64) -> String {
    let lineup = |prefix: &str| -> String {
        let mut players: Vec<String> = (1..=8)
            .map(|i| {
                format!(
                    r#"{{"name": "{} {}", "role": "BATTER", "attributes": {{"contact": {}, "power": {}, "speed": 50, "pitch_command": 25, "fielding": 55}}}}"#,
                    prefix,
                    i,
                    42 + i * 4,
                    40 + i * 3
                )
            })
            .collect();
        players.push(format!(
            r#"{{"name": "{} P", "role": "PITCHER", "attributes": {{"contact": 20, "power": 20, "speed": 40, "pitch_command": 68, "fielding": 60}}}}"#,
            prefix
        ));
        format!("[{}]", players.join(", "))
    };

    format!(
        r#"{{
        "schema_version": 1,
        "seed": {},
        "home_team": {{
            "name": "Test Home",
            "lineup": {},
            "pitcher": 8
        }},
        "away_team": {{
            "name": "Test Away",
            "lineup": {},
            "pitcher": 8
        }}
    }}"#,
        seed,
        lineup("Home"),
        lineup("Away")
    )
}

/// Per-side counting stats
#[derive(Default, Clone)]
struct SideStats {
    runs: u32,
    singles: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    walks: u32,
    strikeouts: u32,
    in_play_outs: u32,
}

struct GameStats {
    home: SideStats,
    away: SideStats,
    innings_played: u32,
    pitches: u32,
    tie: bool,
    walk_off: bool,
    extra_innings: bool,
}

fn get_game_stats(result_json: &str) -> anyhow::Result<GameStats> {
    let parsed: Value =
        serde_json::from_str(result_json).context("failed to parse simulation result")?;

    let mut home = SideStats::default();
    let mut away = SideStats::default();

    home.runs = parsed["home_score"].as_u64().unwrap_or(0) as u32;
    away.runs = parsed["away_score"].as_u64().unwrap_or(0) as u32;

    let innings_played = parsed["innings_played"].as_u64().unwrap_or(0) as u32;
    let tie = parsed["tie"].as_bool().unwrap_or(false);
    let mut pitches = 0u32;
    let mut walk_off = false;

    if let Some(events) = parsed["events"].as_array() {
        for event in events {
            let event_type = event["type"].as_str().unwrap_or("");
            if event_type == "game_end" {
                walk_off = event["details"]["walk_off"].as_bool().unwrap_or(false);
                continue;
            }
            if event_type != "pitch_result" {
                continue;
            }
            pitches += 1;

            let is_home = event["is_home_batting"].as_bool().unwrap_or(false);
            let side = if is_home { &mut home } else { &mut away };

            let resolution = &event["details"]["resolution"];
            if resolution.is_null() {
                continue;
            }
            if let Some(hit) = resolution["hit"].as_str() {
                match hit {
                    "single" => side.singles += 1,
                    "double" => side.doubles += 1,
                    "triple" => side.triples += 1,
                    "home_run" => side.home_runs += 1,
                    _ => {}
                }
            } else if let Some(kind) = resolution.as_str() {
                match kind {
                    "walk" => side.walks += 1,
                    "strikeout" => side.strikeouts += 1,
                    _ => {}
                }
            } else if !resolution["in_play_out"].is_null() {
                side.in_play_outs += 1;
            }
        }
    }

    Ok(GameStats {
        home,
        away,
        innings_played,
        pitches,
        tie,
        walk_off,
        extra_innings: innings_played > 9,
    })
}

struct AggregatedStats {
    home: SideStats,
    away: SideStats,
    innings: u32,
    pitches: u32,
    ties: u32,
    walk_offs: u32,
    extra_inning_games: u32,
    game_count: u32,
}

impl AggregatedStats {
    fn new() -> Self {
        Self {
            home: SideStats::default(),
            away: SideStats::default(),
            innings: 0,
            pitches: 0,
            ties: 0,
            walk_offs: 0,
            extra_inning_games: 0,
            game_count: 0,
        }
    }

    fn add(&mut self, stats: GameStats) {
        self.game_count += 1;

        self.home.runs += stats.home.runs;
        self.home.singles += stats.home.singles;
        self.home.doubles += stats.home.doubles;
        self.home.triples += stats.home.triples;
        self.home.home_runs += stats.home.home_runs;
        self.home.walks += stats.home.walks;
        self.home.strikeouts += stats.home.strikeouts;
        self.home.in_play_outs += stats.home.in_play_outs;

        self.away.runs += stats.away.runs;
        self.away.singles += stats.away.singles;
        self.away.doubles += stats.away.doubles;
        self.away.triples += stats.away.triples;
        self.away.home_runs += stats.away.home_runs;
        self.away.walks += stats.away.walks;
        self.away.strikeouts += stats.away.strikeouts;
        self.away.in_play_outs += stats.away.in_play_outs;

        self.innings += stats.innings_played;
        self.pitches += stats.pitches;
        if stats.tie {
            self.ties += 1;
        }
        if stats.walk_off {
            self.walk_offs += 1;
        }
        if stats.extra_innings {
            self.extra_inning_games += 1;
        }
    }

    fn avg(&self, val: u32) -> f64 {
        if self.game_count == 0 {
            0.0
        } else {
            val as f64 / self.game_count as f64
        }
    }
}

fn main() -> anyhow::Result<()> {
    println!();
    println!("=== Aggregate Game Outcome Distributions ===");
    println!();

    let num_games = 200;
    let mut agg = AggregatedStats::new();
    let mut failures = 0u32;

    println!("Running {} games...", num_games);

    for i in 0..num_games {
        let seed = 1000 + i as u64;
        let request = create_test_request(seed);

        match simulate_game_json(&request) {
            Ok(result) => {
                agg.add(get_game_stats(&result)?);
                if (i + 1) % 50 == 0 {
                    print!(".");
                    use std::io::Write;
                    std::io::stdout().flush()?;
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("\nGame {} failed: {:?}", i, e);
            }
        }
    }

    println!("\n");

    if agg.game_count == 0 {
        anyhow::bail!("no successful games out of {}", num_games);
    }

    let row = |label: &str, h: f64, a: f64| {
        println!("  {:<24} {:>8.2}  {:>8.2}  {:>8.2}", label, h, a, h + a);
    };

    println!("-----------------------------------------------------------");
    println!(
        "Per-game averages ({} games)      HOME      AWAY     TOTAL",
        agg.game_count
    );
    println!("-----------------------------------------------------------");
    row("Runs", agg.avg(agg.home.runs), agg.avg(agg.away.runs));
    row("Singles", agg.avg(agg.home.singles), agg.avg(agg.away.singles));
    row("Doubles", agg.avg(agg.home.doubles), agg.avg(agg.away.doubles));
    row("Triples", agg.avg(agg.home.triples), agg.avg(agg.away.triples));
    row("Home Runs", agg.avg(agg.home.home_runs), agg.avg(agg.away.home_runs));
    row("Walks", agg.avg(agg.home.walks), agg.avg(agg.away.walks));
    row("Strikeouts", agg.avg(agg.home.strikeouts), agg.avg(agg.away.strikeouts));
    row("In-Play Outs", agg.avg(agg.home.in_play_outs), agg.avg(agg.away.in_play_outs));
    println!("-----------------------------------------------------------");
    println!("  {:<24} {:>8.2}", "Innings / game", agg.avg(agg.innings));
    println!("  {:<24} {:>8.2}", "Pitches / game", agg.avg(agg.pitches));
    println!("  {:<24} {:>8}", "Walk-off wins", agg.walk_offs);
    println!("  {:<24} {:>8}", "Extra-inning games", agg.extra_inning_games);
    println!("  {:<24} {:>8}", "Ties", agg.ties);
    println!("  {:<24} {:>8}", "Failures", failures);
    println!("-----------------------------------------------------------");

    // Sanity bands for the default tuning
    println!("\nTarget validation:");
    let total_runs = agg.avg(agg.home.runs) + agg.avg(agg.away.runs);
    let total_hits = agg.avg(
        agg.home.singles
            + agg.home.doubles
            + agg.home.triples
            + agg.home.home_runs
            + agg.away.singles
            + agg.away.doubles
            + agg.away.triples
            + agg.away.home_runs,
    );
    let total_ks = agg.avg(agg.home.strikeouts + agg.away.strikeouts);
    let avg_innings = agg.avg(agg.innings);

    let runs_ok = (4.0..=16.0).contains(&total_runs);
    let hits_ok = (8.0..=30.0).contains(&total_hits);
    let ks_ok = (6.0..=30.0).contains(&total_ks);
    let innings_ok = avg_innings >= 9.0;

    let mark = |ok: bool| if ok { "OK  " } else { "WARN" };
    println!("  Runs/game:    {} ({:.2}, target 4-16)", mark(runs_ok), total_runs);
    println!("  Hits/game:    {} ({:.2}, target 8-30)", mark(hits_ok), total_hits);
    println!("  K/game:       {} ({:.2}, target 6-30)", mark(ks_ok), total_ks);
    println!("  Avg innings:  {} ({:.2}, target >= 9)", mark(innings_ok), avg_innings);

    if runs_ok && hits_ok && ks_ok && innings_ok {
        println!("\n  All targets met.");
    }

    println!();
    Ok(())
}
