use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use faq_match_core::{
    builtin_intents, evaluate_cases, load_faq_or_empty, load_intents_or,
    load_presentation_or_builtin, EvalCase, KnowledgeBase, MatchResult, Matcher, MatcherConfig,
    Presentation, DEFAULT_GREETING_TOKEN_LIMIT, DEFAULT_MAX_RELATED, DEFAULT_REQUIRED_PASS_RATE,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "faq-match")]
#[command(version, about = "Keyword-overlap FAQ matcher for chat assistants")]
struct Cli {
    /// FAQ file (.json array, .json object keyed by id, or .jsonl). Missing file means an empty FAQ.
    #[arg(long, global = true, env = "FAQ_MATCH_FAQ")]
    faq: Option<PathBuf>,

    /// Intent table (.json array). Missing file means the built-in table.
    #[arg(long, global = true, env = "FAQ_MATCH_INTENTS")]
    intents: Option<PathBuf>,

    /// Welcome text and quick replies. Missing file means the built-in presentation.
    #[arg(long, global = true, env = "FAQ_MATCH_PRESENTATION")]
    presentation: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = DEFAULT_GREETING_TOKEN_LIMIT)]
    greeting_token_limit: usize,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RELATED)]
    max_related: usize,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve one utterance into an answer and/or suggestions.
    Resolve { text: String },
    /// Show normalized tokens and the stopword-filtered scoring set.
    Tokens { text: String },
    /// Print the welcome text and quick-reply options.
    Welcome,
    /// Print the fixed answer for a quick-reply key.
    #[command(name = "option")]
    QuickReply { key: String },
    /// Load and validate the datasets.
    Check,
    /// Run regression cases against the datasets.
    Eval {
        #[arg(long)]
        cases: PathBuf,
        #[arg(long, default_value_t = DEFAULT_REQUIRED_PASS_RATE)]
        min_pass_rate: f32,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn build_matcher(cli: &Cli) -> Result<Matcher> {
    let faqs = match &cli.faq {
        Some(path) => load_faq_or_empty(path)?,
        None => Vec::new(),
    };
    let intents = match &cli.intents {
        Some(path) => load_intents_or(path, builtin_intents())?,
        None => builtin_intents(),
    };
    let config = MatcherConfig {
        greeting_token_limit: cli.greeting_token_limit,
        max_related: cli.max_related,
    };

    let kb = KnowledgeBase::builtin(faqs).with_intents(intents);
    let matcher = Matcher::with_config(kb, config).context("invalid dataset")?;
    info!(
        faqs = matcher.faq_count(),
        intents = matcher.intent_count(),
        "matcher ready"
    );
    Ok(matcher)
}

fn load_presentation(cli: &Cli) -> Result<Presentation> {
    match &cli.presentation {
        Some(path) => load_presentation_or_builtin(path),
        None => Ok(Presentation::builtin()),
    }
}

fn read_eval_cases_json(path: &Path) -> Result<Vec<EvalCase>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let cases: Vec<EvalCase> = serde_json::from_reader(file).context("parse eval cases json")?;
    Ok(cases)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize output")?
    );
    Ok(())
}

fn print_result(result: &MatchResult) {
    match result {
        MatchResult::Answer {
            entry_id,
            score,
            answer,
            ..
        } => {
            println!("kind=answer entry_id={entry_id} score={score}");
            println!("answer={answer}");
        }
        MatchResult::Intent { trigger, .. } => println!("kind=intent trigger={trigger}"),
        MatchResult::Fallback { .. } => println!("kind=fallback"),
    }
    for suggestion in result.suggestions() {
        println!("suggestion={suggestion}");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match &cli.command {
        Commands::Resolve { text } => {
            let matcher = build_matcher(&cli)?;
            let result = matcher.resolve(text.as_str());
            match cli.format {
                OutputFormat::Text => print_result(&result),
                OutputFormat::Json => print_json(&result)?,
            }
        }
        Commands::Tokens { text } => {
            let matcher = build_matcher(&cli)?;
            let tokens = matcher.query_tokens(text.as_str());
            match cli.format {
                OutputFormat::Text => {
                    println!("tokens={}", tokens.tokens.join(" "));
                    println!("scoring={}", tokens.scoring.join(" "));
                }
                OutputFormat::Json => print_json(&tokens)?,
            }
        }
        Commands::Welcome => {
            let presentation = load_presentation(&cli)?;
            match cli.format {
                OutputFormat::Text => {
                    println!("{}", presentation.introduction());
                    for option in presentation.options() {
                        println!("option={} label={}", option.key, option.label);
                    }
                }
                OutputFormat::Json => print_json(&presentation)?,
            }
        }
        Commands::QuickReply { key } => {
            let presentation = load_presentation(&cli)?;
            let Some(answer) = presentation.answer_for(key) else {
                bail!("unknown quick-reply option: {key}");
            };
            match cli.format {
                OutputFormat::Text => println!("{answer}"),
                OutputFormat::Json => {
                    print_json(&serde_json::json!({ "key": key, "answer": answer }))?
                }
            }
        }
        Commands::Check => {
            let matcher = build_matcher(&cli)?;
            let presentation = load_presentation(&cli)?;
            println!(
                "faqs={} intents={} stopwords={} quick_replies={}",
                matcher.faq_count(),
                matcher.intent_count(),
                matcher.stopwords().len(),
                presentation.options().len()
            );
        }
        Commands::Eval {
            cases,
            min_pass_rate,
        } => {
            let matcher = build_matcher(&cli)?;
            let cases = read_eval_cases_json(cases)?;
            let summary = evaluate_cases(&matcher, &cases);
            let run_id = format!("eval-{}", summary.started_at.timestamp_millis());

            match cli.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Text => {
                    println!(
                        "run_id={} total={} passed={} failed={} pass_rate={:.4} required={:.4}",
                        run_id,
                        summary.total,
                        summary.passed,
                        summary.failed,
                        summary.pass_rate,
                        min_pass_rate
                    );
                    for o in &summary.outcomes {
                        println!(
                            "case={} passed={} kind={:?} faq_id={} latency={:.3}ms",
                            o.case_id,
                            o.passed,
                            o.actual_kind,
                            o.actual_entry_id.as_deref().unwrap_or("null"),
                            o.latency_ms
                        );
                    }
                }
            }

            if !summary.meets(*min_pass_rate) {
                bail!(
                    "pass rate {:.4} below required {:.4}",
                    summary.pass_rate,
                    min_pass_rate
                );
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
