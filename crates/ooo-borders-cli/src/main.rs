//! ooo-borders CLI - border line calculator

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ooo_borders_core::style::color;
use ooo_borders_core::units::{UnitConvert, UnitLength};
use ooo_borders_core::{border_widths, BorderLine2, BorderLineStyle, Borders, LineSize, Side};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ooo-borders")]
#[command(
    author,
    version,
    about = "Compute LibreOffice BorderLine2 records from style, color and width"
)]
struct Cli {
    /// Log computed widths to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the BorderLine2 record for one border side
    #[command(alias = "side")]
    Compute {
        /// Line style (e.g. solid, double, thin_thick_small_gap)
        #[arg(short, long, default_value = "solid")]
        style: String,

        /// Width in points or a named size (hairline, thin, medium, ...)
        #[arg(short, long, default_value = "thin")]
        width: String,

        /// Color as hex RGB (e.g. FF0000)
        #[arg(short, long, default_value = "000000")]
        color: String,

        /// Emit the four outer border properties instead of one record
        #[arg(long)]
        outline: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every line style with its widths at the given width
    Styles {
        /// Width in points or a named size
        #[arg(short, long, default_value = "thin")]
        width: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Convert a length between units
    Convert {
        /// Value to convert
        value: f64,

        /// Source unit (pt, twip, mm100, mm, in, ...)
        #[arg(long, default_value = "pt")]
        from: String,

        /// Target unit
        #[arg(long, default_value = "mm100")]
        to: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One row of the `styles` listing
#[derive(Debug, Serialize)]
struct StyleRow {
    style: BorderLineStyle,
    line_style: i16,
    outer_twips: i64,
    inner_twips: i64,
    gap_twips: i64,
    record: BorderLine2,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            style,
            width,
            color,
            outline,
            format,
        } => compute(&style, &width, &color, outline, format),
        Commands::Styles { width, format } => list_styles(&width, format),
        Commands::Convert { value, from, to } => convert(value, &from, &to),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "ooo_borders_core=debug,ooo_borders=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse a width given in points or as a named [`LineSize`]
fn parse_width(width: &str) -> Result<f64> {
    if let Ok(pt) = width.trim().parse::<f64>() {
        return Ok(pt);
    }
    let size: LineSize = width
        .parse()
        .with_context(|| format!("Invalid width '{}'", width))?;
    Ok(size.pt())
}

fn parse_color(value: &str) -> Result<i32> {
    match color::from_hex(value) {
        Some(c) => Ok(c),
        None => bail!("Invalid color '{}': expected hex RGB such as FF0000", value),
    }
}

fn build_side(style: &str, width: &str, color: &str) -> Result<Side> {
    let style: BorderLineStyle = style.parse().context("Failed to parse line style")?;
    let width = parse_width(width)?;
    let color = parse_color(color)?;
    Side::new(style, color, width).context("Failed to build border side")
}

fn compute(style: &str, width: &str, color: &str, outline: bool, format: OutputFormat) -> Result<()> {
    let side = build_side(style, width, color)?;
    tracing::info!("Computed {}", side);

    if outline {
        let props = Borders::all(side).properties();
        match format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = props
                    .into_iter()
                    .map(|(name, line)| serde_json::to_value(line).map(|v| (name.to_string(), v)))
                    .collect::<Result<_, serde_json::Error>>()?;
                println!("{}", serde_json::to_string_pretty(&map)?);
            }
            OutputFormat::Text => {
                for (name, line) in props {
                    println!("{}", name);
                    print_record(&line, "  ");
                }
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&side.border_line2())?),
        OutputFormat::Text => {
            println!("Side: {}", side);
            print_record(&side.border_line2(), "  ");
        }
    }
    Ok(())
}

fn print_record(line: &BorderLine2, indent: &str) {
    for (field, value) in line.fields() {
        println!("{}{:<16}{}", indent, field, value);
    }
}

fn style_rows(width_pt: f64) -> Result<Vec<StyleRow>> {
    let twips = UnitConvert::to_twips(width_pt, UnitLength::Pt).round() as i64;
    BorderLineStyle::ALL
        .iter()
        .map(|&style| -> ooo_borders_core::Result<StyleRow> {
            let widths = border_widths(twips, style)?;
            let side = Side::new(style, 0, width_pt)?;
            Ok(StyleRow {
                style,
                line_style: style.to_uno(),
                outer_twips: widths.outer,
                inner_twips: widths.inner,
                gap_twips: widths.gap,
                record: side.border_line2(),
            })
        })
        .collect::<ooo_borders_core::Result<Vec<_>>>()
        .context("Failed to compute style widths")
}

fn list_styles(width: &str, format: OutputFormat) -> Result<()> {
    let width_pt = parse_width(width)?;
    let rows = style_rows(width_pt)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            println!("Widths at {}pt (twips / mm100)", width_pt);
            println!(
                "{:<24}{:>6}  {:>12}{:>12}{:>12}",
                "style", "value", "outer", "inner", "gap"
            );
            for row in &rows {
                println!(
                    "{:<24}{:>6}  {:>12}{:>12}{:>12}",
                    row.style.name(),
                    row.line_style,
                    format!("{} / {}", row.outer_twips, row.record.outer_line_width),
                    format!("{} / {}", row.inner_twips, row.record.inner_line_width),
                    format!("{} / {}", row.gap_twips, row.record.line_distance),
                );
            }
        }
    }
    Ok(())
}

fn convert(value: f64, from: &str, to: &str) -> Result<()> {
    let from: UnitLength = from.parse().context("Failed to parse source unit")?;
    let to: UnitLength = to.parse().context("Failed to parse target unit")?;
    let result = UnitConvert::convert(value, from, to);
    println!("{} {} = {} {}", value, from, result, to);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("0.75").unwrap(), 0.75);
        assert_eq!(parse_width("thin").unwrap(), 0.75);
        assert_eq!(parse_width("Extra Thick").unwrap(), 4.5);
        assert!(parse_width("wide").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("FF0000").unwrap(), 0xFF0000);
        assert_eq!(parse_color("#00ff00").unwrap(), 0x00FF00);
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_build_side() {
        let side = build_side("double", "3", "FF0000").unwrap();
        assert_eq!(side.style(), BorderLineStyle::Double);
        assert_eq!(side.outer_line_width(), 35);
        assert!(build_side("double", "12", "FF0000").is_err());
        assert!(build_side("wavy", "1", "000000").is_err());
    }

    #[test]
    fn test_style_rows() {
        let rows = style_rows(3.0).unwrap();
        assert_eq!(rows.len(), BorderLineStyle::ALL.len());
        let double = rows
            .iter()
            .find(|r| r.style == BorderLineStyle::Double)
            .unwrap();
        assert_eq!(
            (double.outer_twips, double.inner_twips, double.gap_twips),
            (20, 20, 20)
        );
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "ooo-borders",
            "compute",
            "--style",
            "double",
            "--width",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Compute { style, format, .. } => {
                assert_eq!(style, "double");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Compute"),
        }

        let cli = Cli::try_parse_from(["ooo-borders", "-v", "convert", "1", "--to", "twip"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Convert { value, .. } if value == 1.0));
    }
}
