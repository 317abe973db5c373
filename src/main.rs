use std::{env, io, process};

use slate_lang::{slate, Command};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: slate <tokenize|parse|interpret> [filename]");
        process::exit(64);
    }

    let Some(command) = Command::from_name(&args[1]) else {
        eprintln!("Unknown command: {}", args[1]);
        process::exit(64);
    };

    let mut stdout = io::stdout();
    let mut slate = slate::new(&mut stdout);

    match args.get(2) {
        Some(path) => slate.run_file(command, path.clone()),
        None => slate.run_prompt(command),
    };
}
