use iri_descent::Iri;
use std::io;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match Iri::parse(line) {
            Ok(iri) => println!("{iri:#?}"),
            Err(e) => println!("Error: {e}"),
        };
    }
}
