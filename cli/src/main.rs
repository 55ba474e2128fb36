mod error;
mod report;

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use http_head::{HeadParser, MalformedHeaderPolicy, MessageKind, NameMatching, ParserConfig};
use shared::LogFormat;

use crate::{error::CliError, report::build_report};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Decide from the first bytes of the message
    #[default]
    Auto,
    Request,
    Response,
}

/// Split a raw HTTP/1.x message and print its parsed head as JSON.
#[derive(Debug, Parser)]
#[command(name = "http-head", version)]
struct Cli {
    /// File holding the raw message; stdin when omitted
    #[arg(env = "HTTP_HEAD_INPUT")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Kind::Auto, env = "HTTP_HEAD_KIND")]
    kind: Kind,

    /// How Host, Content-Length and Cache-Control names are matched
    #[arg(long, default_value_t = NameMatching::default(), env = "HTTP_HEAD_NAME_MATCHING")]
    name_matching: NameMatching,

    /// What to do with a header line that cannot be parsed
    #[arg(
        long,
        default_value_t = MalformedHeaderPolicy::default(),
        env = "HTTP_HEAD_ON_MALFORMED_HEADER"
    )]
    on_malformed_header: MalformedHeaderPolicy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", env = "HTTP_HEAD_LOG")]
    log: String,

    #[arg(long, default_value_t = LogFormat::Text, env = "HTTP_HEAD_LOG_FORMAT")]
    log_format: LogFormat,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig::default()
            .with_name_matching(self.name_matching)
            .with_malformed_header_policy(self.on_malformed_header)
    }

    fn message_kind(&self, buffer: &[u8]) -> MessageKind {
        match self.kind {
            Kind::Auto => MessageKind::sniff(buffer),
            Kind::Request => MessageKind::Request,
            Kind::Response => MessageKind::Response,
        }
    }

    fn read_input(&self) -> io::Result<Vec<u8>> {
        match &self.input {
            Some(path) => fs::read(path),
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let buffer = cli.read_input()?;
    let kind = cli.message_kind(&buffer);
    tracing::info!(bytes = buffer.len(), kind = ?kind, "inspecting message");

    let parser = HeadParser::new(cli.parser_config());
    let report = build_report(&buffer, kind, &parser)?;

    let mut stdout = io::stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    } else {
        serde_json::to_writer(&mut stdout, &report)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(err) = shared::init_logging(&cli.log, cli.log_format) {
        eprintln!("{}", CliError::from(err));
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_incomplete() => {
            tracing::error!(error = %err, "message head is not complete");
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to inspect message");
            ExitCode::FAILURE
        }
    }
}
