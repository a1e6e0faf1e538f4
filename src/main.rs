use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use sable::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let mut path_buf_string = env::current_dir().unwrap().into_os_string();
    path_buf_string.push("/");
    path_buf_string.push(file_path);
    let file_contents = read_to_string(path_buf_string.clone()).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(path_buf_string));
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let parsed = parse(tokens.unwrap());

    println!("Parsed in {:?}", parse_start.elapsed());

    if parsed.is_err() {
        display_error(parsed.err().unwrap(), PathBuf::from(path_buf_string));
        panic!()
    }

    let program = parsed.unwrap();
    println!("Parsed {} top-level expression(s)", program.len());

    for expression in &program {
        println!("{:#?}", expression);
        println!("-> {}", expression);
    }

    println!("Total time: {:?}", start.elapsed());
}
