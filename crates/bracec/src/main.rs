//! `bracec` command-line entry point.

use bracec::commands::Command;
use bracec::Args;

fn main() {
    bracec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let name = args[1].as_str();
    match name {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("bracec {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let Some(command) = Command::parse(name) else {
        eprintln!("Unknown command: {name}");
        eprintln!();
        print_usage();
        std::process::exit(1);
    };

    let result = Args::parse(&args[2..])
        .and_then(|parsed| command.run(&parsed, &mut std::io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("error: {e}");
        eprintln!("usage: {}", command.usage());
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("bracec: bracket and tag matching");
    println!();
    println!("Usage: bracec <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>            Print the token stream of a file");
    println!("  match <file> <offset>    Find the partner of the bracket at <offset>");
    println!("  scope <file> <offset>    Find the structural bracket enclosing <offset>");
    println!("  args <file> <offset>     Find the outermost parentheses around <offset>");
    println!("  nav <file> <offset>      Show where go-to-matching-brace moves the caret");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --type=<ext>     Treat the file as having extension <ext>");
    println!("  --backward, -b   Scan toward the start of the file (match)");
    println!("  --strict         Require tag names to agree");
    println!("  --lenient        Skip tags whose name differs from the start tag");
    println!("  --limit=N        Give up after N scan steps");
    println!();
    println!("Offsets are byte offsets into the file.");
    println!("Set RUST_LOG=brace_match=trace to trace every scan.");
}
