//! Multimethod compiler CLI.

use mmc::commands::{
    explain, identify, intersection, lattice, match_discriminant, normalize, subset, CommandResult,
};

fn main() {
    mmc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let rest = &args[2..];
    let result = match args[1].as_str() {
        "normalize" => with_args::<1, _>(rest, "normalize <predicate>", |[p]| normalize(p)),
        "identify" => with_args::<1, _>(rest, "identify <predicate>", |[p]| identify(p)),
        "match" => with_args::<2, _>(rest, "match <predicate> <discriminant>", |[p, d]| {
            match_discriminant(p, d)
        }),
        "subset" => with_args::<2, _>(rest, "subset <sub> <sup>", |[a, b]| subset(a, b)),
        "intersect" => with_args::<2, _>(rest, "intersect <a> <b>", |[a, b]| intersection(a, b)),
        "lattice" => {
            if rest.is_empty() {
                usage_error("lattice <predicate>...");
            }
            lattice(rest)
        }
        "explain" => with_args::<1, _>(rest, "explain <code>", |[code]| explain(code)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("mmc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprint!("{}", err.render());
            std::process::exit(1);
        }
    }
}

/// Run `command` when exactly `N` arguments were given.
fn with_args<const N: usize, F>(args: &[String], usage: &str, command: F) -> CommandResult
where
    F: FnOnce([&str; N]) -> CommandResult,
{
    let Ok(args) = <&[String; N]>::try_from(args) else {
        usage_error(usage);
    };
    command(args.each_ref().map(String::as_str))
}

fn usage_error(usage: &str) -> ! {
    eprintln!("Usage: mmc {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("mmc - multimethod predicate tooling");
    println!();
    println!("Usage: mmc <command> [args]");
    println!();
    println!("Commands:");
    println!("  normalize <p>          Print the normalized form of a predicate");
    println!("  identify <p>           Print the identifier spelling of a predicate");
    println!("  match <p> <d>          Match a discriminant and print its captures");
    println!("  subset <a> <b>         Print whether a is a subset of b");
    println!("  intersect <a> <b>      Print the normalized intersection");
    println!("  lattice <p>...         Print the Euler diagram ([synthetic] nodes)");
    println!("  explain <code>         Explain an error code (e.g. E2003)");
    println!("  help                   Show this message");
    println!("  version                Show version information");
    println!();
    println!("Set MM_LOG (or RUST_LOG) to enable tracing, e.g. MM_LOG=mm_lattice=debug");
}
