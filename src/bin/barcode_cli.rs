//! Barcode CLI - Bridge interface for the web backend
//!
//! Commands: generate, payload, check-digit, presets
//! Outputs JSON (or raw SVG) to stdout, logs to stderr
//! Returns 2 when the input is rejected

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use barcode_core::encoding::code128;
use barcode_core::{
    normalize, BarcodeRequest, BarcodeResponse, BarcodeService, MediaAsset, PresetRegistry,
    RenderOverrides, Symbology,
};

#[derive(Parser)]
#[command(name = "barcode-cli")]
#[command(about = "Barcode CLI - UPC-A, EAN-13 and Code-128 to SVG")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of extra render presets (*.json)
    #[arg(long, global = true)]
    presets_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a code and render it
    Generate {
        /// Symbology: upc-a, ean-13, code-128
        #[arg(short = 't', long = "type")]
        symbology: String,

        /// Code to encode
        #[arg(short, long)]
        code: String,

        /// Render preset to start from
        #[arg(long)]
        preset: Option<String>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        margin: Option<f64>,

        #[arg(long)]
        font_size: Option<f64>,

        /// Background colour (#rgb, #rrggbb or transparent)
        #[arg(long)]
        background: Option<String>,

        /// Bar and text colour (#rgb or #rrggbb)
        #[arg(long)]
        line_color: Option<String>,

        /// Do not print the code under the bars
        #[arg(long)]
        hide_text: bool,

        /// What to write
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write the SVG to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Handle a JSON request ({"code", "type", "options"?, "preset"?})
    Payload {
        #[arg(short, long)]
        payload: String,
    },

    /// Normalize a code and show its check digit
    CheckDigit {
        #[arg(short = 't', long = "type")]
        symbology: String,

        #[arg(short, long)]
        code: String,
    },

    /// List available render presets
    Presets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Response JSON with svg and svg_base64
    Json,
    /// Raw SVG markup
    Svg,
    /// Media asset record for the media library
    Asset,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `value` as pretty JSON; `rejected` marks an in-band input failure
fn emit<T: Serialize>(value: &T, rejected: bool) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            if rejected {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!(error = %e, "failed to serialize output");
            ExitCode::FAILURE
        }
    }
}

fn emit_response(response: &BarcodeResponse) -> ExitCode {
    emit(response, !response.success)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = match &cli.presets_dir {
        Some(dir) => match PresetRegistry::load_from_dir(dir) {
            Ok(r) => r,
            Err(e) => {
                error!(dir = %dir.display(), error = %e, "failed to load presets");
                return ExitCode::FAILURE;
            }
        },
        None => PresetRegistry::new(),
    };

    let service = BarcodeService::new(registry);

    match cli.command {
        Commands::Presets => emit(&service.list_presets(), false),

        Commands::Payload { payload } => emit_response(&service.respond_json(&payload)),

        Commands::CheckDigit { symbology, code } => {
            let normalized = symbology
                .parse::<Symbology>()
                .and_then(|s| normalize(&code, s));

            match normalized {
                Ok(normalized) => {
                    let check = match normalized.symbology().checksummed() {
                        Some(_) => normalized.as_str().chars().last().map(String::from),
                        None => {
                            let values: Vec<u8> =
                                normalized.as_str().chars().filter_map(code128::value_of).collect();
                            Some(code128::checksum(&values).to_string())
                        }
                    };
                    emit(&serde_json::json!({
                        "success": true,
                        "type": normalized.symbology(),
                        "code": normalized.as_str(),
                        "check": check,
                    }), false)
                }
                Err(e) => emit(
                    &serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                        "error_kind": e.kind(),
                    }),
                    true,
                ),
            }
        }

        Commands::Generate {
            symbology,
            code,
            preset,
            width,
            height,
            margin,
            font_size,
            background,
            line_color,
            hide_text,
            format,
            output,
        } => {
            let request = BarcodeRequest {
                code,
                symbology,
                preset,
                options: Some(RenderOverrides {
                    width,
                    height,
                    margin,
                    display_value: hide_text.then_some(false),
                    font_size,
                    background,
                    line_color,
                }),
            };

            let generated = match service.generate(&request) {
                Ok(g) => g,
                Err(e) => {
                    return emit_response(&BarcodeResponse::from_error(&request.symbology, &e));
                }
            };

            if let Some(path) = &output {
                if let Err(e) = fs::write(path, &generated.image.svg) {
                    error!(path = %path.display(), error = %e, "failed to write svg");
                    return ExitCode::FAILURE;
                }
                info!(path = %path.display(), "svg written");
            }

            match format {
                OutputFormat::Json => emit_response(&BarcodeResponse::from_generated(&generated)),
                OutputFormat::Svg => {
                    if output.is_none() {
                        println!("{}", generated.image.svg);
                    }
                    ExitCode::SUCCESS
                }
                OutputFormat::Asset => match MediaAsset::from_barcode(&generated) {
                    Ok(asset) => emit(&asset, false),
                    Err(e) => {
                        error!(error = %e, "failed to build media asset");
                        ExitCode::FAILURE
                    }
                },
            }
        }
    }
}
