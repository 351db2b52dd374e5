use ab_core::models::default_team;
use ab_core::{GameConfig, GameEngine, GamePlan};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn plan(seed: u64) -> GamePlan {
    GamePlan {
        home_team: default_team("Home"),
        away_team: default_team("Away"),
        seed,
        config: GameConfig::default(),
    }
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("simulate_full_game", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(plan(black_box(42))).unwrap();
            engine.simulate().unwrap()
        })
    });
}

fn bench_engine_setup(c: &mut Criterion) {
    c.bench_function("engine_new", |b| {
        b.iter(|| GameEngine::new(plan(black_box(7))).unwrap())
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let home = serde_json::to_string(&default_team("Home")).unwrap();
    let away = serde_json::to_string(&default_team("Away")).unwrap();
    let request = format!(
        r#"{{"schema_version":1,"seed":42,"home_team":{},"away_team":{}}}"#,
        home, away
    );

    c.bench_function("simulate_game_json", |b| {
        b.iter(|| ab_core::simulate_game_json(black_box(&request)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_full_game,
    bench_engine_setup,
    bench_json_round_trip
);
criterion_main!(benches);
