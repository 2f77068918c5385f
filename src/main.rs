use std::env;
use std::path::Path;
use std::process;

use alaias::errors::errors::Error;
use alaias::lexer::tokens::Token;
use alaias::report::report::{render, statistics};
use alaias::{analyze, load_source};

const DEMO_AGE: &str = "als

intn idade -- age of the user
idade <= 20

cdt [ idade ge 18 ]
    wrt \"Of legal age\"
!cdt
    wrt \"Under age\"

wrt \"Your age is: idade\"
";

const DEMO_REPEAT: &str = "als

intn i

repeat i in 5
    wrt \"Running i times\"
brkln
";

const DEMO_HELLO: &str = "als
wrt \"Hello, World\"
";

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_demos(),
        2 => match args[1].as_str() {
            "--help" | "-h" => print_usage(),
            path => {
                if let Err(error) = run_file(Path::new(path)) {
                    eprintln!("{}", error);
                    process::exit(1);
                }
            }
        },
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn run_file(path: &Path) -> Result<(), Error> {
    let source = load_source(path)?;
    let tokens = analyze(&source);

    print!("{}", render(&tokens));
    print_statistics(&tokens);

    Ok(())
}

fn run_demos() {
    let demos = [
        ("age check", DEMO_AGE),
        ("counted repetition", DEMO_REPEAT),
        ("hello world", DEMO_HELLO),
    ];

    for (name, source) in demos {
        println!("=== {} ===", name);
        println!("{}", source);

        let tokens = analyze(source);
        print!("{}", render(&tokens));
        print_statistics(&tokens);
        println!();
    }

    println!("{}", "=".repeat(80));
    println!("To analyze a file: alaias <path.als>");
}

fn print_statistics(tokens: &[Token]) {
    let stats = statistics(tokens);
    println!();
    println!(
        "Tokens: {}  Errors: {}  Valid: {}",
        stats.total_tokens, stats.total_errors, stats.tokens_valid
    );
}

fn print_usage() {
    println!("ALAIAS lexical analyzer");
    println!();
    println!("Usage:");
    println!("  alaias              run the built-in example programs");
    println!("  alaias <file.als>   analyze a source file");
}
