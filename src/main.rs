/*!
Main binary for jpexpr.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_verbosity_flag::Verbosity;
use std::io::{self, IsTerminal, Read};

use jpexpr::{build_rpn, tokenize, utils};

/// Tokenize a JSONPath expression or compile it into Reverse Polish Notation.
#[derive(Parser)]
#[command(name = "jpx", version, about, long_about = None)]
struct Args {
    /// Expression (e.g., "@.price * 2 > 10"). If omitted, reads from STDIN
    expression: Option<String>,
    /// Print the postfix (RPN) sequence instead of the flat token list
    #[arg(long, action = ArgAction::SetTrue)]
    rpn: bool,
    /// Do not pretty-print the JSON output, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    /// Display count of number of tokens
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    #[command(flatten)]
    verbosity: Verbosity,
}

/// Entry point for main binary.
///
/// Reads the expression from the command line or STDIN, runs the selected
/// pass and prints the tokens as JSON to STDOUT. Tokenizer errors are
/// rendered against the input on STDERR and exit with status 1.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let input = match args.expression {
        Some(expression) => expression,
        None => {
            if io::stdin().is_terminal() {
                // No piped input and no expression given
                let mut cmd = Args::command();
                return Ok(cmd.print_help()?);
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read expression from STDIN")?;
            buffer.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    log::debug!("input expression: {input:?}");

    let result = if args.rpn {
        build_rpn(&input)
    } else {
        tokenize(&input)
    };

    let tokens = match result {
        Ok(tokens) => tokens,
        Err(err) => {
            utils::write_diagnostic(&mut io::stderr().lock(), &input, &err)
                .context("Failed to write diagnostic")?;
            let context = if args.rpn {
                "Failed to compile expression"
            } else {
                "Failed to tokenize expression"
            };
            return Err(anyhow::Error::new(err).context(context));
        }
    };

    if args.count {
        println!("Found tokens: {}", tokens.len());
    }

    utils::write_tokens(&mut io::stdout().lock(), &tokens, !args.compact)
}
