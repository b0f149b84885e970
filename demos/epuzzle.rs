//! Solve a 3×3 sliding-tile instance and print every step.

use strider_puzzle::{Board, is_solvable};
use strider_search::Astar;

fn main() {
    let initial = Board::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    let goal = Board::from_rows([[8, 3, 2], [4, 7, 1], [0, 5, 6]]);

    if !initial.is_valid() || !goal.is_valid() || !initial.same_tile_set(&goal) {
        println!("Invalid configuration");
        return;
    }
    if !is_solvable(&initial, &goal) {
        println!("Not solvable");
        return;
    }
    println!("Solvable");

    let mut astar = Astar::new();
    match astar.solve(&initial, &goal) {
        Some(path) => {
            for step in &path {
                match step.action {
                    Some(dir) => println!("{dir}"),
                    None => println!("Start"),
                }
                println!("{}", step.state);
            }
            println!("Solved in {} steps.", path.len() - 1);
        }
        None => println!("No path found"),
    }
}
