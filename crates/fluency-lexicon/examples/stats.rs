use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fluency_lexicon::Lexicon;

fn main() -> Result<()> {
    let usage = "usage: cargo run -p fluency-lexicon --example stats -- <size-words.csv> <animals.csv>";
    let mut args = env::args().skip(1);
    let size_path = args.next().map(PathBuf::from).context(usage)?;
    let animal_path = args.next().map(PathBuf::from).context(usage)?;

    let lexicon = Lexicon::load(&size_path, &animal_path).with_context(|| {
        format!(
            "loading lexicon from {} and {}",
            size_path.display(),
            animal_path.display()
        )
    })?;

    println!("Size adjectives: {}", lexicon.size_adjectives.len());
    println!("Animal names   : {}", lexicon.animals.len());

    println!("\nFirst animal entries (list order is the match order):");
    for entry in lexicon.animals.entries().iter().take(10) {
        println!("  {entry}");
    }

    Ok(())
}
