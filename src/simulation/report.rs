use crate::simulation::game::{AntGame, GameStatus};
use crate::world::{InsectId, PlaceId};
use colored::Colorize;

/// Board as text: one row per tunnel, queen on the left, hive on the right.
/// A cell shows its ant initials (guard first) and its bee count.
pub fn render_board(game: &AntGame) -> String {
    let world = game.colony().world();
    let mut out = String::with_capacity(256);

    out.push_str(&format!(
        "{} {} {} {} {}\n",
        format!("turn={}", game.turn()).cyan(),
        format!("food={}", game.food()).green(),
        format!("hive={}", game.hive_bees_count()).yellow(),
        "boosts:".dimmed(),
        game.boost_names().join(","),
    ));

    for (t, tunnel) in game.places().iter().enumerate() {
        out.push_str(&format!("{} ", format!("{t}").dimmed()));
        out.push_str(&"Q".magenta().bold().to_string());
        for &cell in tunnel {
            let text = cell_text(game, cell);
            let text = if world.place(cell).is_water() { text.on_blue().to_string() } else { text };
            out.push('[');
            out.push_str(&text);
            out.push(']');
        }
        out.push_str(&"<H".yellow().to_string());
        out.push('\n');
    }
    out
}

fn cell_text(game: &AntGame, cell: PlaceId) -> String {
    let world = game.colony().world();
    let place = world.place(cell);
    let initial = |ant: Option<InsectId>| {
        ant.map_or(' ', |id| world.insect(id).name().chars().next().unwrap_or('?'))
    };
    let bees = match place.bees().len() {
        0 => "  ".to_string(),
        n => format!("{n}b"),
    };
    format!("{}{}{}", initial(place.guard()), initial(place.guarded_ant()), bees)
}

pub fn print_board(game: &AntGame) {
    print!("{}", render_board(game));
}

/// Print the final result line
pub fn print_summary(game: &AntGame) {
    let result = match game.status() {
        GameStatus::Won => format!("result={}", game.status().as_str()).green().bold(),
        GameStatus::Lost => format!("result={}", game.status().as_str()).red().bold(),
        GameStatus::InProgress => format!("result={}", game.status().as_str()).yellow().bold(),
    };
    println!(
        "\n{}\n{} {} {} {} {}",
        "===".bright_blue().bold(),
        result,
        "|".dimmed(),
        format!("turn={}", game.turn()).cyan(),
        format!("food={}", game.food()).cyan(),
        format!("bees_left={}", game.colony().all_bees().len() + game.hive_bees_count()).cyan(),
    );
}
