//! Placard - styled text banners
//!
//! Usage: placard <COMMAND> [OPTIONS]

mod cli;

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{debug, info};

use placard_assist::{AnyAssistant, ApiKey, Assistant, ClientConfig};
use placard_render::{encode_png, render_placeholder, FontLocator};
use placard_studio::{
    analysis_prompt, families, pick_scheme, random_text, resolve_family, DesignSession, DesignSettings, Template,
    DEFAULT_FONT,
};

use cli::{Cli, Commands, FontsArgs, PlaceholderArgs, RenderArgs, SuggestArgs};

type CliResult = Result<(), Box<dyn Error>>;

/// Size the `fonts` listing loads each family at
const PROBE_FONT_SIZE: f32 = 32.0;

/// Size the placeholder rows are drawn at
const PLACEHOLDER_FONT_SIZE: f32 = 48.0;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let assistant = AnyAssistant::from_credentials(api_key(cli.api_key), client_config());

    let result = match cli.command {
        Commands::Render(args) => run_render(*args, &assistant).await,
        Commands::Suggest(args) => run_suggest(args, &assistant).await,
        Commands::Fonts(args) => run_fonts(args),
        Commands::Templates => run_templates(),
        Commands::Placeholder(args) => run_placeholder(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Key from the flag, then the environment
fn api_key(flag: Option<String>) -> Option<ApiKey> {
    flag.or_else(|| env::var("PLACARD_API_KEY").ok())
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .and_then(ApiKey::new)
}

fn client_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Ok(base) = env::var("PLACARD_API_BASE") {
        config.api_base = base;
    }
    if let Ok(model) = env::var("PLACARD_MODEL") {
        config.model = model;
    }
    config
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

async fn run_render(args: RenderArgs, assistant: &AnyAssistant) -> CliResult {
    let seed = args.seed.unwrap_or_else(clock_seed);
    debug!("Random seed {}", seed);

    let mut settings = match &args.design {
        Some(path) => DesignSettings::load(path)?,
        None => DesignSettings::default(),
    };

    if let Some(template) = args.template {
        template.apply(&mut settings);
    }
    if let Some(kind) = args.scheme {
        let scheme = pick_scheme(kind.into(), seed);
        settings.background = scheme.background;
        settings.foreground = scheme.foreground;
    }

    if let Some(text) = read_text(&args)? {
        settings.text = text;
    } else if args.random_text {
        settings.text = random_text(seed).to_string();
    }
    if let Some(font) = args.font {
        settings.font = font;
    }
    if let Some(size) = args.size {
        settings.font_size = size;
    }
    if let Some(background) = args.background {
        settings.background = background;
    }
    if let Some(foreground) = args.foreground {
        settings.foreground = foreground;
    }
    if let Some(align) = args.align {
        settings.align = align;
    }
    if let Some(padding) = args.padding {
        settings.padding = padding;
    }
    if let Some(spacing) = args.line_spacing {
        settings.line_spacing = spacing;
    }
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }

    let locator = FontLocator::with_extra_dirs(args.font_dirs);
    let mut session = DesignSession::resume(&args.out_dir, locator)?;
    let design = session.render(&settings)?;

    let path = match &args.out {
        Some(out) => {
            design.save_as(out)?;
            out.clone()
        }
        None => design.save_in(&args.out_dir)?,
    };

    println!("Wrote {}", path.display());
    if let Some(warning) = &design.warning {
        eprintln!("Warning: {}", warning);
    }
    println!("{}", design.advice);

    if assistant.is_remote() && !args.no_feedback {
        let feedback = assistant.feedback(&analysis_prompt(&settings)).await;
        println!("\nFeedback: {}", feedback);
    }

    Ok(())
}

/// Text from the positional argument or a file; `-` reads stdin
fn read_text(args: &RenderArgs) -> io::Result<Option<String>> {
    if let Some(text) = &args.text {
        // Shells pass a typed `\n` literally
        return Ok(Some(text.replace("\\n", "\n")));
    }
    let Some(path) = &args.text_file else {
        return Ok(None);
    };
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
}

async fn run_suggest(args: SuggestArgs, assistant: &AnyAssistant) -> CliResult {
    let prompt = args.prompt.join(" ");
    info!(
        "Suggestions for '{}' from the {} provider",
        prompt,
        if assistant.is_remote() { "remote" } else { "offline" }
    );

    for (i, suggestion) in assistant.suggestions(&prompt).await.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion);
    }
    Ok(())
}

fn run_fonts(args: FontsArgs) -> CliResult {
    let mut locator = FontLocator::with_extra_dirs(args.font_dirs);

    for family in families(args.category) {
        let resolved = resolve_family(&mut locator, family.name, PROBE_FONT_SIZE);
        let status = if resolved.is_fallback() { "built-in fallback" } else { "found" };
        println!(
            "{:<18} {:<11} {:<5} {}",
            family.name,
            family.category.to_string(),
            if family.bold { "bold" } else { "" },
            status
        );
    }
    Ok(())
}

fn run_templates() -> CliResult {
    for template in Template::ALL {
        match template.preset() {
            Some(preset) => println!(
                "{:<16} {} on {}, {} {}px",
                template.name(),
                preset.foreground,
                preset.background,
                preset.font,
                preset.font_size
            ),
            None => println!("{:<16} keeps the current settings", template.name()),
        }
    }
    Ok(())
}

fn run_placeholder(args: PlaceholderArgs) -> CliResult {
    let family = args.font.unwrap_or_else(|| DEFAULT_FONT.to_string());
    let mut locator = FontLocator::system();
    let mut resolved = resolve_family(&mut locator, &family, PLACEHOLDER_FONT_SIZE);

    let png = encode_png(render_placeholder(&family, &mut resolved.font))?;
    fs::write(&args.out, png)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
