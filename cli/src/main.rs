
use clap::{Arg, App};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use lalr::grammar::{Grammar, SymbolId};
use lalr::lexer::lexicate;
use lalr::parser::PDA;
use lalr::reading::{read_grammar, read_table};

struct Options<'a> {
    grammar: &'a str,
    table: &'a str,
    input: &'a str,
    steps: bool,
    dump: bool,
}

fn read_file(name: &str) -> Result<String, String> {
    let path = Path::new(name);
    let display = path.display();

    let mut file = match File::open(&path) {
        Err(why) => return Err(format!("Couldn't open {}: {}", display, why)),
        Ok(file) => file,
    };

    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| e.to_string())?;

    Ok(s)
}

fn numbers(productions: &[usize]) -> String {
    productions.iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn spell(grammar: &Grammar, form: &[SymbolId]) -> String {
    form.iter()
        .filter_map(|id| grammar.symbol(*id))
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(options: &Options) -> Result<(), String> {
    let grammar_src = read_file(options.grammar)?;
    let grammar = read_grammar(options.grammar, &grammar_src).map_err(|e| e.to_string())?;

    let table_src = read_file(options.table)?;
    let table = read_table(options.table, &table_src, &grammar).map_err(|e| e.to_string())?;

    if options.dump {
        println!("{}", grammar);
        println!("{}", table.display(&grammar));
        println!();
    }

    let tokens = lexicate(options.input, &grammar).map_err(|e| e.to_string())?;
    let pda = PDA::new(&grammar, &table).map_err(|e| e.to_string())?;
    let derivation = pda.parse(&tokens).map_err(|e| e.to_string())?;

    println!("Reverse Rightmost Derivation: {}", derivation);
    println!("        Rightmost Derivation: {}", numbers(&derivation.rightmost()));

    if options.steps {
        let forms = derivation.sentential_forms(&grammar).map_err(|e| e.to_string())?;
        for (i, form) in forms.iter().enumerate() {
            if i == 0 {
                println!("    {}", spell(&grammar, form));
            } else {
                println!("  => {}", spell(&grammar, form));
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("lalr")
        .version("0.1")
        .author("Julien Marquet")
        .about("Parses a string with a precomputed LALR table")
        .arg(Arg::with_name("grammar")
            .short("g")
            .long("grammar")
            .value_name("FILE")
            .help("The grammar description")
            .default_value("grammar.txt"))
        .arg(Arg::with_name("table")
            .short("t")
            .long("table")
            .value_name("FILE")
            .help("The ACTION and GOTO tables")
            .default_value("parser.txt"))
        .arg(Arg::with_name("steps")
            .long("steps")
            .help("Prints every sentential form of the rightmost derivation"))
        .arg(Arg::with_name("dump")
            .long("dump")
            .help("Prints the grammar and the tables before parsing"))
        .arg(Arg::with_name("input")
            .help("The string to parse")
            .multiple(true)
            .index(1))
        .get_matches();

    let inputs = matches.values_of("input").map(|v| v.collect::<Vec<_>>()).unwrap_or_default();
    let input = match inputs.as_slice() {
        [input] => *input,
        _ => {
            println!("{}", matches.usage());
            return
        },
    };

    let options = Options {
        grammar: matches.value_of("grammar").unwrap_or("grammar.txt"),
        table: matches.value_of("table").unwrap_or("parser.txt"),
        input,
        steps: matches.is_present("steps"),
        dump: matches.is_present("dump"),
    };

    if let Err(e) = run(&options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
