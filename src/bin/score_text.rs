use anyhow::Context;
use clap::Parser;
use cognitive_journal::core::seed::default_seed;
use cognitive_journal::domain::ports::ConfigProvider;
use cognitive_journal::utils::{logger, validation::Validate};
use cognitive_journal::{LexiconStore, TextAnalyzer, TomlConfig};
use std::io::Read;
use std::sync::Arc;

/// Score a piece of text against the category lexicons and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "score-text")]
struct Args {
    /// Text to score; read from stdin when omitted
    text: Option<String>,

    /// TOML file whose `[[lexicon.category]]` tables replace the built-in lexicon
    #[arg(short, long)]
    config: Option<String>,

    /// Also print the tokens the text was split into
    #[arg(long)]
    tokens: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let seeds = match &args.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path))?;
            config.validate().context("invalid configuration")?;
            config.lexicon_seed()
        }
        None => default_seed(),
    };
    let lexicon = LexiconStore::from_seeds(&seeds).context("failed to load lexicon")?;
    let analyzer = TextAnalyzer::new(Arc::new(lexicon));

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let result = analyzer.analyze(&text);
    let output = if args.tokens {
        serde_json::json!({ "tokens": analyzer.tokenize(&text), "score": result })
    } else {
        serde_json::to_value(&result)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
