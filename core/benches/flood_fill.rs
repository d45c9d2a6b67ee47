use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;

fn open_board(c: &mut Criterion) {
    // mines packed into the last row, so one click floods the rest
    let mines: Vec<Coord2> = (0..COLS).map(|col| (ROWS - 1, col)).collect();
    let template = Board::from_mine_coords((ROWS, COLS), &mines).unwrap();

    c.bench_function("flood fill classic board", |b| {
        b.iter(|| {
            let mut board = template.clone();
            let mut sink: Vec<Notification> = Vec::with_capacity(100);
            black_box(engine::reveal(&mut board, black_box((0, 0)), &mut sink))
        })
    });
}

fn play_random_games(c: &mut Criterion) {
    let mut generator = RandomMineGenerator::new(0xdead_beef);
    let mut board = Board::new((ROWS, COLS)).unwrap();

    c.bench_function("reset and reveal centre", |b| {
        b.iter(|| {
            generator.place_mines(&mut board, MINES).unwrap();
            let mut sink: Vec<Notification> = Vec::new();
            black_box(engine::reveal(&mut board, (ROWS / 2, COLS / 2), &mut sink))
        })
    });
}

criterion_group!(benches, open_board, play_random_games);
criterion_main!(benches);
