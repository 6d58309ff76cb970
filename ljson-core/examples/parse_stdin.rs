//! Parse JSON from stdin and pretty-print it (or the error).

use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).expect("read stdin");

    match ljson_core::parse(&input) {
        Ok(node) => {
            node.dump_to_stdout();
            println!();
        }
        Err(err) => {
            eprintln!("parse failed: {err}");
            std::process::exit(1);
        }
    }
}
