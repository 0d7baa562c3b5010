// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches, SubCommand};
use xiangqi::{perft, Board, Color, Console};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("perft")
                .about("Count move paths from the opening position")
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("d")
                        .long("depth")
                        .default_value("3")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a game on the console")
                .arg(
                    Arg::with_name("json")
                        .help("Print the game state as JSON after every move")
                        .long("json"),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("perft") {
        run_perft(matches);
    }

    let json = matches
        .subcommand_matches("play")
        .map(|matches| matches.is_present("json"))
        .unwrap_or(false);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = Console::new(json).run(stdin.lock(), stdout.lock()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run_perft(matches: &ArgMatches) -> ! {
    let depth = value_t_or_exit!(matches, "depth", u32);
    let board = Board::opening();

    println!("depth: {}", depth);
    println!();
    println!("{}", board);
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&board, Color::Red, i);
        let duration = start.elapsed();
        let ms = duration.as_secs() * 1000 + u64::from(duration.subsec_millis());
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }

    process::exit(0);
}
