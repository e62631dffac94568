use calclex::{
    config::{CliConfig, OutputFormat},
    format_tokens, CalcLexResult, Tokenizer,
};
use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expressions to tokenize; reads stdin line by line when omitted
    expressions: Vec<String>,

    /// Path to config file
    #[arg(short, long, default_value = "calclex.json")]
    config: PathBuf,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the source location of every token
    #[arg(short, long)]
    spans: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_expression(
    out: &mut impl Write,
    tokenizer: &mut Tokenizer,
    config: &CliConfig,
    input: &str,
) -> CalcLexResult<()> {
    let spans = tokenizer.tokenize(input);
    debug!(
        "{} tokens, {} characters skipped",
        spans.len(),
        tokenizer.skipped()
    );

    match (config.format, config.show_spans) {
        (OutputFormat::Text, false) => {
            let tokens: Vec<_> = spans.into_iter().map(|s| s.token).collect();
            writeln!(out, "{}", format_tokens(&tokens))?;
        }
        (OutputFormat::Text, true) => {
            let items: Vec<_> = spans
                .iter()
                .map(|s| format!("{}@{}..{}", s.token, s.span.start, s.span.end))
                .collect();
            writeln!(out, "{}", items.join(" "))?;
        }
        (OutputFormat::Json, false) => {
            let tokens: Vec<_> = spans.into_iter().map(|s| s.token).collect();
            writeln!(out, "{}", serde_json::to_string(&tokens)?)?;
        }
        (OutputFormat::Json, true) => {
            writeln!(out, "{}", serde_json::to_string(&spans)?)?;
        }
    }
    Ok(())
}

fn run(cli: &Cli, mut config: CliConfig) -> CalcLexResult<()> {
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.show_spans |= cli.spans;
    debug!("config: {:?}", config);

    let mut tokenizer = Tokenizer::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.expressions.is_empty() {
        info!("reading expressions from stdin");
        for line in io::stdin().lock().lines() {
            write_expression(&mut out, &mut tokenizer, &config, &line?)?;
        }
    } else {
        for expression in &cli.expressions {
            write_expression(&mut out, &mut tokenizer, &config, expression)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config, cli.verbose);

    if let Err(e) = run(&cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
