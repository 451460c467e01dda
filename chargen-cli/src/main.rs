use std::env;
use std::process::exit;

use chargen_core::io::read_corpus;
use chargen_core::model::window_model::WindowModel;

/// Seed used for reproducible (non-random) generation runs.
const FIXED_SEED: u64 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() != 5 {
        eprintln!("Usage: chargen <windowLength> <initialText> <generatedTextLength> <random/fixed> <fileName>");
        exit(2);
    }

    let window_length: usize = args[0]
        .parse()
        .map_err(|_| format!("Invalid window length: {}", args[0]))?;
    let initial_text = &args[1];
    let target_length: usize = args[2]
        .parse()
        .map_err(|_| format!("Invalid generated text length: {}", args[2]))?;

    // 'random' selects a non-deterministic source; anything else selects
    // the fixed seed, so identical runs produce identical texts
    let seed = if args[3] == "random" { None } else { Some(FIXED_SEED) };

    // Read the corpus before training so an unreadable file leaves the
    // model untrained rather than partially populated
    let corpus = read_corpus(&args[4])?;

    let mut model = WindowModel::new(window_length, seed)?;
    model.train(corpus.chars());

    println!("{}", model.generate(initial_text, target_length));

    Ok(())
}
