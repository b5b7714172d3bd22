use std::env;

use anyhow::{Result, bail};
use fluency_plural::{estimate_overlap, pluralize};

fn main() -> Result<()> {
    let words: Vec<String> = env::args().skip(1).collect();
    let words = if words.is_empty() {
        bail!("usage: cargo run -p fluency-plural --example pluralize -- <word> [<word> ...] | --demo");
    } else if words == ["--demo"] {
        vec![
            "cat".into(),
            "cats".into(),
            "pony".into(),
            "wolf".into(),
            "fox".into(),
            "mouse".into(),
            "mice".into(),
            "octopus".into(),
        ]
    } else {
        words
    };

    for word in &words {
        println!("{:<12} -> {}", word, pluralize(word));
    }

    println!("\nPlural overlap in this set: {}", estimate_overlap(&words));
    Ok(())
}
