use std::fs::File;
use std::io::{BufWriter, Write};

use crossterm::style::{Attribute, Color, Stylize};

use hamcycle::{GenerateError, generate, render};

struct Args {
    width: Option<u16>,
    height: Option<u16>,
    order: bool,
    verbose: bool,
    seed: Option<u64>,
}

fn parse_args() -> Args {
    let mut args = Args {
        width: None,
        height: None,
        order: false,
        verbose: false,
        seed: None,
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--order" | "-O" => args.order = true,
            "--verbose" | "-v" => args.verbose = true,
            "--seed" => args.seed = raw.next().and_then(|s| s.parse().ok()),
            _ => {
                // Positional dimensions, width first. Anything unparsable is
                // left unset and asked for interactively.
                let parsed = arg.parse::<u16>().ok();
                if args.width.is_none() {
                    args.width = parsed;
                } else if args.height.is_none() {
                    args.height = parsed;
                }
            }
        }
    }
    args
}

/// Prompt until the user enters a positive integer.
fn prompt_dimension(label: &str) -> std::io::Result<u16> {
    loop {
        print!("Enter {label}: ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        match input.trim().parse::<u16>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => println!("{}", "Please enter a positive whole number.".with(Color::Red)),
        }
    }
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "hamcycle.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _log_guard = init_tracing();

    let args = parse_args();
    let width = match args.width {
        Some(w) => w,
        None => prompt_dimension("width")?,
    };
    let height = match args.height {
        Some(h) => h,
        None => prompt_dimension("height")?,
    };

    println!("{}", "Drawing pathway...".with(Color::Cyan));
    let generation = match generate(height, width, args.seed) {
        Ok(generation) => generation,
        Err(error @ GenerateError::InvalidDimension { .. }) => {
            eprintln!("{}", format!("{error}").with(Color::Red));
            std::process::exit(2);
        }
        Err(error @ GenerateError::CycleConstruction { .. }) => {
            tracing::error!("generation failed: {error}");
            eprintln!("{}", format!("{error}").with(Color::Red));
            std::process::exit(1);
        }
    };

    if args.verbose {
        println!("Hamiltonian guide:");
        print!("{}", render::render_guide(&generation.guide));
    }

    let path = format!("{}x{}.txt", width, height);
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    if args.order {
        writer.write_all(render::render_order(&generation.order).as_bytes())?;
    } else {
        writer.write_all(render::render_numbered(&generation.numbered).as_bytes())?;
    }
    writer.flush()?;

    println!(
        "{}",
        format!("Hamiltonian cycle found! Created {path}")
            .with(Color::Green)
            .attribute(Attribute::Bold)
    );
    Ok(())
}
