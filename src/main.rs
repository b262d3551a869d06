use std::io::{self, Read};
use std::process::exit;
use std::time::{Duration, Instant};

use joinery::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alien_alphabet::{infer, words, AlphabetError};

#[inline(always)]
fn solve(input: &str) -> Result<String, AlphabetError> {
    let inference = infer(&words(input))?;

    for &(earlier, later) in &inference.contradictions {
        warn!(%earlier, %later, "input contradicts itself; ordering breaks this constraint");
    }

    Ok(inference.ordering.iter().join_with(", ").to_string())
}

#[inline(always)]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

trait ReadString: Read {
    fn read_string(&mut self) -> io::Result<String> {
        let mut data = String::new();
        self.read_to_string(&mut data).map(|_| data)
    }
}

impl<T: Read> ReadString for T {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let ((), total_duration) = timed(move || {
        let input = io::stdin().read_string().unwrap_or_else(|err| {
            eprintln!("Error reading input: {}", err);
            exit(1);
        });

        let (solution, duration) = timed(move || solve(input.trim()));
        match solution {
            Ok(solution) => println!("{}", solution),
            Err(err) => {
                eprintln!("Error: {}", err);
                exit(1);
            }
        }

        info!(?duration, "algorithm duration");
    });
    info!(?total_duration, "total duration");
}
