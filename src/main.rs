use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use minirel::Catalog;

/// Interactive shell for the minirel engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Most verbose engine log level to print
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Print how long each statement took
    #[arg(long)]
    timing: bool,
}

fn prompt(catalog: &Catalog) -> String {
    match catalog.current_database_name() {
        Ok(name) => format!("minirel:{name}> "),
        Err(_) => "minirel> ".to_string(),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut catalog = Catalog::new();
    println!("minirel shell (type 'quit' to stop)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", prompt(&catalog));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let started = Instant::now();
        match catalog.run(input) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                tracing::warn!(statement = input, "rejected: {err}");
                println!("error: {err}");
            }
        }
        if args.timing {
            println!("({:.3} ms)", started.elapsed().as_secs_f64() * 1000.0);
        }
    }
    Ok(())
}
