//! Generator binary entry point

use std::path::PathBuf;
use clap::Parser;

use generator::{GeneratorConfig, TitleExporter, TitleGenerator, XlsxTitleExporter};
use shared::{
    logging, Component, GenerationRequest, SearchIntent, TitleType, DEFAULT_LANGUAGE, DEFAULT_TITLE_COUNT,
};

#[derive(Parser)]
#[command(name = "generator")]
#[command(about = "Generate SEO-optimized blog titles with Gemini")]
struct Args {
    /// Main keywords, e.g. "AI tools, digital marketing"
    #[arg(long, default_value = "")]
    keywords: String,

    /// Blog content to base the titles on
    #[arg(long)]
    content: Option<String>,

    /// Blog type (General, How-to Guides, Tutorials, Listicles, Newsworthy Posts, FAQs, Checklists)
    #[arg(long, default_value = "General")]
    title_type: TitleType,

    /// Search intent (Informational, Commercial, Transactional, Navigational)
    #[arg(long, default_value = "Informational Intent")]
    intent: SearchIntent,

    /// Output language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Number of titles (1-10)
    #[arg(long, default_value_t = DEFAULT_TITLE_COUNT)]
    count: u8,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Write the titles to this .xlsx file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing(Component::Generator, Some(&args.log_level))?;

    let config = GeneratorConfig::from_env()?;
    let title_generator = TitleGenerator::from_config(&config);

    let request = GenerationRequest {
        keywords: args.keywords,
        content: args.content,
        title_type: args.title_type,
        search_intent: args.intent,
        language: args.language,
        audience: args.audience,
        count: args.count,
    };

    let outcome = match title_generator.generate(&request, args.api_key.as_deref()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            logging::log_error(Component::Generator, "Title generation", &e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("✨ Generated Titles");
    for (i, title) in outcome.titles.iter().enumerate() {
        println!("{}. {}", i + 1, title);
    }

    if let Some(path) = args.export {
        let exporter = XlsxTitleExporter::new();
        let bytes = exporter.export(&outcome.titles)?;
        std::fs::write(&path, bytes)?;
        logging::log_success(Component::Generator, &format!("Wrote {} titles to {}", outcome.titles.len(), path.display()));
        println!("📥 Saved titles to {}", path.display());
    }

    Ok(())
}
