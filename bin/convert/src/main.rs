use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Convert color strings between hex, rgb() and hsl() notations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Colors to convert, e.g. "#ff0000", "rgb(255, 0, 0)" or "hsl(0, 100%, 50%)"
    #[arg(required = true)]
    colors: Vec<String>,

    /// Notation to print the colors in
    #[arg(long, value_enum, default_value_t = Target::Hex)]
    to: Target,

    /// Prefix hex output with '#'
    #[arg(long)]
    hash: bool,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    Hex,
    Rgb,
    Hsl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    for line in run(&cli)? {
        println!("{line}");
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    cli.colors
        .iter()
        .map(|color| {
            convert(color, cli.to, cli.hash).with_context(|| format!("converting {color:?}"))
        })
        .collect()
}

fn convert(color: &str, to: Target, hash: bool) -> Result<String> {
    let hex = tinct::parse_to_hex(color)?;
    log::debug!("{color:?} reads as hex {hex}");

    Ok(match to {
        Target::Hex if hash => format!("#{hex}"),
        Target::Hex => hex,
        Target::Rgb => tinct::hex_to_rgb(&hex)?.to_string(),
        Target::Hsl => tinct::hex_to_hsl(&hex)?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_command(arg_vec: Vec<&str>) -> Result<Vec<String>> {
        let cli = Cli::try_parse_from(arg_vec)?;
        run(&cli)
    }

    #[test]
    fn requires_a_color() {
        let err = run_command(vec!["tinct-convert"]).unwrap_err().to_string();
        assert!(err.contains("<COLORS>..."));
    }

    #[test]
    fn defaults_to_hex() {
        let lines = run_command(vec!["tinct-convert", "rgb(255, 0, 0)", "#00ff00"]).unwrap();
        assert_eq!(lines, ["FF0000", "00FF00"]);
    }

    #[test]
    fn hex_with_hash() {
        let lines =
            run_command(vec!["tinct-convert", "--hash", "hsl(240, 100%, 50%)"]).unwrap();
        assert_eq!(lines, ["#0000FF"]);
    }

    #[test]
    fn to_rgb_and_hsl() {
        let lines = run_command(vec!["tinct-convert", "--to", "rgb", "#008080"]).unwrap();
        assert_eq!(lines, ["rgb(0, 128, 128)"]);

        let lines =
            run_command(vec!["tinct-convert", "--to", "hsl", "rgb(128, 0, 128)"]).unwrap();
        assert_eq!(lines, ["hsl(300, 100%, 25%)"]);
    }

    #[test]
    fn names_the_failing_input() {
        let err = run_command(vec!["tinct-convert", "#000000", "FF00FF00"]).unwrap_err();
        assert_eq!(err.to_string(), "converting \"FF00FF00\"");
        assert_eq!(err.root_cause().to_string(), "invalid hex string");
    }

    #[test]
    fn short_hex_can_not_become_rgb() {
        let err = run_command(vec!["tinct-convert", "--to", "rgb", "#abc"]).unwrap_err();
        assert_eq!(err.to_string(), "converting \"#abc\"");
    }
}
