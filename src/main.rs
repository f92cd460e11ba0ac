//! # Eanbar CLI
//!
//! Command-line interface for generating UPC/EAN barcode images.
//!
//! ## Usage
//!
//! ```bash
//! # Render an EAN-13 barcode to PNG
//! eanbar render 4006381333931 -o barcode.png
//!
//! # Larger bars, border, plain PBM output
//! eanbar render 036000291452 --unit-width 3 --height 150 --border 20 -o upc.pbm
//!
//! # Fix the check digit of an 11-digit UPC prefix (last digit is a placeholder)
//! eanbar render 036000291450 --correct
//!
//! # Print the scan-line bitstring
//! eanbar bits 96385074
//!
//! # Validate a code
//! eanbar check 96385075 --correct --json
//!
//! # Render many codes in parallel, one per line
//! eanbar batch codes.txt --out-dir out/ --format pbm
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use eanbar::{
    Barcode, BarcodeOptions, EanbarError, Symbology,
    preview::{self, OutputFormat},
    symbology::checksum,
};

/// Eanbar - UPC-A / EAN-13 / EAN-8 barcode generator
#[derive(Parser, Debug)]
#[command(name = "eanbar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a barcode image
    Render {
        /// 8, 12 or 13 digit code
        code: String,

        /// Output file; the extension selects the format (.png, .pbm, ...)
        #[arg(short, long, value_name = "FILE", default_value = "barcode.png")]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the scan-line bitstring ('1' = bar)
    Bits {
        code: String,

        /// Replace the check digit instead of rejecting a wrong one
        #[arg(long)]
        correct: bool,
    },

    /// Validate a code and print its symbology
    Check {
        code: String,

        /// Replace the check digit instead of rejecting a wrong one
        #[arg(long)]
        correct: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render every code in a file (one per line) into a directory
    Batch {
        /// Text file with one code per line; blank lines and '#' comments are skipped
        file: PathBuf,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Image format
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Image format for `batch`.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Png,
    Pbm,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Pbm => OutputFormat::Pbm,
        }
    }
}

/// Rendering flags shared by `render` and `batch`.
#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON options file; flags given on the command line take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pixels per unit (narrowest bar)
    #[arg(long)]
    unit_width: Option<u32>,

    /// Bar height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Guard extension below the bars (defaults to half the text height)
    #[arg(long)]
    notch: Option<u32>,

    /// Border on every edge
    #[arg(long)]
    border: Option<u32>,

    #[arg(long)]
    border_left: Option<u32>,

    #[arg(long)]
    border_right: Option<u32>,

    #[arg(long)]
    border_top: Option<u32>,

    #[arg(long)]
    border_bottom: Option<u32>,

    /// Replace the check digit instead of rejecting a wrong one
    #[arg(long)]
    correct: bool,

    /// Skip the human-readable digits
    #[arg(long)]
    no_text: bool,
}

impl RenderArgs {
    /// Defaults, then the JSON file, then command-line flags.
    fn options(&self) -> Result<BarcodeOptions, EanbarError> {
        let mut options = match &self.config {
            Some(path) => BarcodeOptions::from_json_file(path)?,
            None => BarcodeOptions::default(),
        };

        if let Some(v) = self.unit_width {
            options.unit_width = v;
        }
        if let Some(v) = self.height {
            options.height = v;
        }
        if self.notch.is_some() {
            options.notch_size = self.notch;
        }
        if let Some(v) = self.border {
            options.borders.all = v;
        }
        if self.border_left.is_some() {
            options.borders.left = self.border_left;
        }
        if self.border_right.is_some() {
            options.borders.right = self.border_right;
        }
        if self.border_top.is_some() {
            options.borders.top = self.border_top;
        }
        if self.border_bottom.is_some() {
            options.borders.bottom = self.border_bottom;
        }
        if self.correct {
            options.correct = true;
        }
        if self.no_text {
            options.text = false;
        }

        options.validate()?;
        Ok(options)
    }
}

#[derive(Serialize)]
struct CheckReport {
    code: String,
    symbology: Symbology,
    corrected: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EanbarError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            code,
            output,
            render,
        } => {
            let options = render.options()?;
            let barcode = Barcode::new(&code, options.correct)?;
            let raster = barcode.render(&options)?;
            preview::save(&raster, &output)?;
            println!(
                "{} {} ({}x{}) saved to {}",
                barcode.symbology(),
                barcode.code(),
                raster.width(),
                raster.height(),
                output.display()
            );
        }

        Commands::Bits { code, correct } => {
            let barcode = Barcode::new(&code, correct)?;
            println!("{}", barcode.symbology());
            println!("{}", barcode.bits());
        }

        Commands::Check {
            code,
            correct,
            json,
        } => {
            let input: eanbar::symbology::NumericCode = code.parse()?;
            let barcode = Barcode::from_code(&input, correct)?;
            let report = CheckReport {
                code: barcode.code().to_string(),
                symbology: barcode.symbology(),
                corrected: !checksum::is_valid(&input),
            };
            if json {
                let out = serde_json::to_string_pretty(&report)
                    .map_err(|e| EanbarError::InvalidInput(e.to_string()))?;
                println!("{}", out);
            } else if report.corrected {
                println!("{} {} (corrected from {})", report.symbology, report.code, input);
            } else {
                println!("{} {} OK", report.symbology, report.code);
            }
        }

        Commands::Batch {
            file,
            out_dir,
            format,
            render,
        } => {
            let options = render.options()?;
            let format = OutputFormat::from(format);
            let text = std::fs::read_to_string(&file)?;
            let codes: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .collect();

            std::fs::create_dir_all(&out_dir)?;
            println!("Rendering {} codes into {}...", codes.len(), out_dir.display());

            let results: Vec<(&str, Result<PathBuf, EanbarError>)> = codes
                .par_iter()
                .map(|&code| (code, render_to_dir(code, &options, &out_dir, format)))
                .collect();

            let mut failed = 0;
            for (code, result) in &results {
                match result {
                    Ok(path) => println!("  {} -> {}", code, path.display()),
                    Err(e) => {
                        failed += 1;
                        eprintln!("  {}: {}", code, e);
                    }
                }
            }

            if failed > 0 {
                return Err(EanbarError::InvalidInput(format!(
                    "{} of {} codes failed",
                    failed,
                    results.len()
                )));
            }
            println!("Done!");
        }
    }

    Ok(())
}

/// Render one code into `dir`, named after the encoded code.
fn render_to_dir(
    code: &str,
    options: &BarcodeOptions,
    dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, EanbarError> {
    let barcode = Barcode::new(code, options.correct)?;
    let raster = barcode.render(options)?;
    let path = dir.join(format!("{}.{}", barcode.code(), format.extension()));
    preview::save(&raster, &path)?;
    Ok(path)
}
