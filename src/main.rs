use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::Path,
    process::exit,
    rc::Rc,
    time::Instant,
};

use lark::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_source},
};
use log::LevelFilter;

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    // RUST_LOG applies as usual; `--trace` overrides it
    let mut logger = env_logger::Builder::from_default_env();
    if let Some(index) = args.iter().position(|arg| arg == "--trace") {
        args.remove(index);
        logger.filter_level(LevelFilter::Trace);
    }
    logger.init();

    match args.as_slice() {
        [] => repl(),
        [file_path] => run_file(file_path),
        _ => {
            eprintln!("Usage: lark [--trace] [file]");
            exit(2);
        }
    }
}

fn run_file(file_path: &str) {
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let start = Instant::now();

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();

    let expr = match parse(tokens, Rc::new(file_name)) {
        Ok(expr) => expr,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("{}", expr);
}

fn repl() {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Failed to read input: {}", error);
                return;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        match parse_source(&line, "shell") {
            Ok(expr) => println!("{}", expr),
            Err(error) => display_error(&error, &line),
        }
    }
}
