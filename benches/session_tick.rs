use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparty_session::config::SessionConfig;
use sparty_session::core::{compute_power_level, GameSession, ScriptedController};
use sparty_session::demo::DemoBuilder;
use sparty_session::display::HeadlessView;
use sparty_session::stores::MemoryStore;
use glam::Vec3;

/// Benchmark: pure power level computation
fn bench_compute_power_level(c: &mut Criterion) {
    c.bench_function("compute_power_level", |b| {
        b.iter(|| black_box(compute_power_level(black_box(17.25))))
    });
}

/// Benchmark: one frame update with HUD refresh, varying enemy counts
fn bench_session_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_update");

    for enemies in [0usize, 100, 10000].iter() {
        let world = DemoBuilder::new("bench")
            .player_at(Vec3::ZERO)
            .add_enemies(*enemies, true)
            .build();
        let mut session = GameSession::new(
            SessionConfig::default(),
            MemoryStore::new(),
            HeadlessView::new(9, 10),
            world,
        );
        let input = ScriptedController::new();

        group.bench_with_input(BenchmarkId::from_parameter(enemies), enemies, |b, _| {
            b.iter(|| {
                session.update(black_box(1.0 / 60.0), &input);
                black_box(session.power_level())
            })
        });
    }

    group.finish();
}

/// Benchmark: full-power stun across all enemies
fn bench_stun_all_enemies(c: &mut Criterion) {
    let world = DemoBuilder::new("bench")
        .player_at(Vec3::ZERO)
        .add_enemies(1000, true)
        .add_enemies(1000, false)
        .build();
    let mut session = GameSession::new(
        SessionConfig::default(),
        MemoryStore::new(),
        HeadlessView::new(9, 10),
        world,
    );
    let input = ScriptedController::new();

    c.bench_function("stun_all_enemies_2000", |b| {
        b.iter(|| {
            // Refill the meter, then spend it
            session.update(30.0, &input);
            black_box(session.stun_all_enemies())
        })
    });
}

criterion_group!(
    benches,
    bench_compute_power_level,
    bench_session_update,
    bench_stun_all_enemies
);
criterion_main!(benches);
