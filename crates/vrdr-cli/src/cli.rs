//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vrdr_ije::{CodecOptions, FieldOrder};
use vrdr_messaging::MessageKind;

#[derive(Parser)]
#[command(
    name = "vrdr",
    version,
    about = "Convert death records between documents, IJE lines and messages",
    long_about = "Convert death certificate records between JSON documents and the\n\
                  fixed-width IJE layout (with its TRX and MRE coding responses),\n\
                  and wrap or acknowledge exchange messages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode IJE lines into JSON record documents.
    IjeToJson(ConvertArgs),

    /// Encode JSON record documents (one or an array) into IJE lines.
    JsonToIje(ConvertArgs),

    /// Cut TRX coding responses out of IJE lines.
    IjeToTrx(IoArgs),

    /// Expand TRX coding responses into IJE lines.
    TrxToIje(IoArgs),

    /// Cut MRE coding responses out of IJE lines.
    IjeToMre(IoArgs),

    /// Expand MRE coding responses into IJE lines.
    MreToIje(IoArgs),

    /// List the IJE field catalog.
    Fields(FieldsArgs),

    /// Show the non-blank fields of an IJE line.
    Inspect(InspectArgs),

    /// Wrap a JSON record document in a message.
    Wrap(WrapArgs),

    /// Acknowledge a message, or answer it with an extraction error.
    Ack(IoArgs),
}

#[derive(Args)]
pub struct IoArgs {
    /// Input file ("-" for stdin).
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Leave values without a fixed-width rendition blank instead of failing.
    #[arg(long = "lenient")]
    pub lenient: bool,
}

impl ConvertArgs {
    pub fn options(&self) -> CodecOptions {
        if self.lenient {
            CodecOptions::lenient()
        } else {
            CodecOptions::strict()
        }
    }
}

#[derive(Args)]
pub struct FieldsArgs {
    #[arg(long = "order", value_enum, default_value = "position")]
    pub order: OrderArg,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoArgs,

    #[arg(long = "order", value_enum, default_value = "position")]
    pub order: OrderArg,
}

#[derive(Args)]
pub struct WrapArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Message kind, by name (e.g. submission, void) or event URI.
    #[arg(long = "kind", default_value = "submission")]
    pub kind: MessageKind,

    /// Sender endpoint.
    #[arg(long = "source", value_name = "URL")]
    pub source: Option<String>,

    /// Receiver endpoint.
    #[arg(long = "destination", value_name = "URL")]
    pub destination: Option<String>,

    /// Number of consecutive certificates voided (void messages only).
    #[arg(long = "block-count", value_name = "N")]
    pub block_count: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    /// By start column.
    Position,
    /// By content priority.
    Priority,
}

impl From<OrderArg> for FieldOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Position => Self::Position,
            OrderArg::Priority => Self::Priority,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
