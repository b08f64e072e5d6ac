mod play;

use clap::{arg, command, Command};
use othello_rules::test_utils::run_perft;
use othello_rules::{Board, Color, Game, Player};
use std::io;
use std::process;

fn main() -> io::Result<()> {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(-b --black <NAME> "Name of the black player").default_value("Black"))
        .arg(arg!(-w --white <NAME> "Name of the white player").default_value("White"))
        .arg(arg!(--board <BOARD> "Starting position: 64 squares of X, O or -"))
        .subcommand(
            Command::new("perft")
                .about("Count move paths from the starting position")
                .arg(
                    arg!(-d --depth <DEPTH> "Plies to search")
                        .default_value("6")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    if let Some(("perft", perft_matches)) = matches.subcommand() {
        let depth = perft_matches.get_one::<u64>("depth").copied().unwrap_or(6);
        for d in 1..=depth {
            println!("perft({}) = {}", d, run_perft(d));
        }
        return Ok(());
    }

    let board = match matches.get_one::<String>("board") {
        Some(compact) => compact.parse::<Board>().unwrap_or_else(|err| {
            eprintln!("Cannot parse board: {}", err);
            process::exit(2);
        }),
        None => Board::new(),
    };

    let name = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    let players = vec![
        Player::new(name("black"), Color::Black),
        Player::new(name("white"), Color::White),
    ];
    let game = Game::new(board, players).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(2);
    });

    let stdin = io::stdin();
    play::play_interactive(game, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}
