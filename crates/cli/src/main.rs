use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use swissslip_slip::{group_into_blocks, modulo10};

mod slip_file;

use slip_file::{Rendered, SlipFile, Variant};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Code line only, plus reference/IBAN with `--formatted-reference`.
    #[default]
    Text,
    /// All rendered values as one JSON object.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "swissslip", version, about = "Swiss payment slip code lines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode the code line of a slip described in JSON.
    Encode {
        /// Slip description (default: stdin).
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Slip type, overrides the one in the file.
        #[arg(long = "variant", value_enum)]
        variant: Option<Variant>,

        /// Leave numeric segments at their natural width.
        #[arg(long = "no-fill-zeros")]
        no_fill_zeros: bool,

        /// Also print the block-formatted reference number or IBAN.
        #[arg(long = "formatted-reference")]
        formatted_reference: bool,

        #[arg(long = "output", value_enum, default_value_t = Output::Text)]
        output: Output,
    },

    /// Print the modulo-10 recursive check digit of a digit string.
    CheckDigit { digits: String },

    /// Group a string into blocks for display.
    Blocks {
        text: String,

        #[arg(long = "size", default_value_t = swissslip_slip::DEFAULT_BLOCK_SIZE)]
        size: usize,

        /// Build blocks from the left instead of the right.
        #[arg(long = "from-left")]
        from_left: bool,
    },
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_rendered(out: &mut impl Write, rendered: &Rendered, output: Output, formatted: bool) -> Result<()> {
    match output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut *out, rendered)?;
            writeln!(out)?;
        }
        Output::Text => {
            if formatted {
                if let Some(reference) = &rendered.reference {
                    writeln!(out, "{reference}")?;
                }
                if let Some(iban) = &rendered.iban {
                    writeln!(out, "{iban}")?;
                }
            }
            writeln!(out, "{}", rendered.code_line)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    swissslip_observability::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Encode {
            input,
            variant,
            no_fill_zeros,
            formatted_reference,
            output,
        } => {
            let text = read_input(input)?;
            let slip = SlipFile::from_json(&text)?.build(variant)?;
            let rendered = slip.render(!no_fill_zeros)?;
            tracing::info!(slip_type = rendered.slip_type, "code line encoded");
            write_rendered(&mut out, &rendered, output, formatted_reference)?;
        }
        Command::CheckDigit { digits } => {
            let digit = modulo10(&digits)?;
            writeln!(out, "{digit}")?;
        }
        Command::Blocks {
            text,
            size,
            from_left,
        } => {
            writeln!(out, "{}", group_into_blocks(&text, size, !from_left))?;
        }
    }

    out.flush().context("failed to flush stdout")
}
