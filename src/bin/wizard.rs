//! Interactive terminal wizard for creating a flashpage.
//!
//! Walks the four creation steps against a running flashpage server,
//! mirroring the web wizard: per-step validation, live slug availability
//! checks, and GIF search with pagination.
//!
//! # Usage
//!
//! ```bash
//! # Against a local server
//! cargo run --bin wizard
//!
//! # Against another instance
//! cargo run --bin wizard -- --server https://flashpage.example.com
//!
//! # Skip straight to a named step for a prefilled form
//! cargo run --bin wizard -- --slug my-party --title "Launch party"
//! ```
//!
//! # Environment Variables
//!
//! - `KLIPY_API_KEY` (optional): search real GIFs instead of demo results

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Select};

use flashpage::application::services::GifSearchService;
use flashpage::domain::wizard::{STEPS, WizardSession};
use flashpage::domain::entities::Theme;
use flashpage::infrastructure::gif::KlipyClient;
use flashpage::infrastructure::http::HttpCreationGateway;

/// Interactive flashpage creation wizard.
#[derive(Parser)]
#[command(name = "wizard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the flashpage server
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,

    /// Prefill the subdomain
    #[arg(long)]
    slug: Option<String>,

    /// Prefill the title
    #[arg(long)]
    title: Option<String>,

    /// GIF provider base URL
    #[arg(long, default_value = "https://api.klipy.co")]
    klipy_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let gateway = Arc::new(HttpCreationGateway::new(cli.server.clone()));
    let mut session = WizardSession::new(gateway);

    let api_key = std::env::var("KLIPY_API_KEY").ok();
    if api_key.is_none() {
        println!(
            "{}",
            "KLIPY_API_KEY not set, GIF search will show demo results".yellow()
        );
    }
    let gifs = GifSearchService::new(Arc::new(KlipyClient::new(cli.klipy_url.clone(), api_key)));

    session.form_mut().slug = cli.slug.unwrap_or_default();
    session.form_mut().title = cli.title.unwrap_or_default();

    println!("{}", "⚡ Create a flashpage".bright_blue().bold());
    println!("  Server: {}", cli.server.cyan());
    println!();

    loop {
        let step = &STEPS[session.current_step()];
        println!(
            "{} {}",
            format!("Step {}/{}:", session.current_step() + 1, STEPS.len()).bright_black(),
            step.title.bright_white().bold()
        );
        println!("  {}", step.description.bright_black());
        println!();

        match session.current_step() {
            0 => fill_basic(&mut session).await?,
            1 => fill_content(&mut session)?,
            2 => fill_visuals(&mut session, &gifs).await?,
            _ => {
                if preview_and_submit(&mut session).await? {
                    break;
                }
                // Declined: jump back to the start for edits.
                session.jump_to(0);
                continue;
            }
        }

        if !session.advance() {
            println!("{}", "  Step incomplete, let's go over it again".yellow());
            println!();
        }
    }

    Ok(())
}

/// Step 1: subdomain and title, with a live availability check.
async fn fill_basic(session: &mut WizardSession) -> Result<()> {
    loop {
        let slug: String = Input::new()
            .with_prompt("Subdomain (lowercase letters, numbers, hyphens)")
            .with_initial_text(session.form().slug.clone())
            .interact_text()?;
        let slug = slug.to_lowercase();

        if session.check_slug_availability(&slug).await {
            println!("  {} {}.yourdomain is free", "✔".green(), slug.cyan());
            session.form_mut().slug = slug;
            break;
        }
        println!("  {} {} is taken or invalid, try another", "✘".red(), slug);
    }

    let title: String = Input::new()
        .with_prompt("Title")
        .with_initial_text(session.form().title.clone())
        .interact_text()?;
    session.form_mut().title = title;

    Ok(())
}

/// Step 2: the page message.
fn fill_content(session: &mut WizardSession) -> Result<()> {
    let content: String = Input::new()
        .with_prompt("What should your page say?")
        .with_initial_text(session.form().content.clone())
        .interact_text()?;
    session.form_mut().content = content;

    Ok(())
}

/// Step 3: GIF, theme, and dark mode.
async fn fill_visuals(session: &mut WizardSession, gifs: &GifSearchService) -> Result<()> {
    session.form_mut().gif_url = pick_gif(gifs).await?;

    let theme_index = Select::new()
        .with_prompt("Theme")
        .items(&Theme::ALL.map(|t| t.display_name()))
        .default(0)
        .interact()?;
    session.form_mut().theme = Theme::ALL[theme_index];

    session.form_mut().is_dark_mode = Confirm::new()
        .with_prompt("Dark mode?")
        .default(false)
        .interact()?;

    Ok(())
}

/// Runs a GIF search loop until the user picks a result.
async fn pick_gif(gifs: &GifSearchService) -> Result<String> {
    loop {
        let query: String = Input::new().with_prompt("Search GIFs").interact_text()?;
        gifs.search(&query, 1).await;

        if let Some(error) = gifs.error() {
            println!("  {} {}", "✘".red(), error);
            continue;
        }

        loop {
            let results = gifs.results();
            if results.is_empty() {
                println!("  {}", "No results, try another search".yellow());
                break;
            }

            let mut items: Vec<String> = results
                .iter()
                .map(|gif| format!("{} ({}x{})", gif.title, gif.width, gif.height))
                .collect();
            if gifs.has_next() {
                items.push("→ Load more".to_string());
            }
            items.push("↻ New search".to_string());

            let choice = Select::new()
                .with_prompt("Pick a GIF")
                .items(&items)
                .default(0)
                .interact()?;

            if choice < results.len() {
                return Ok(results[choice].gif_url.clone());
            }
            if gifs.has_next() && choice == results.len() {
                gifs.load_more().await;
                continue;
            }
            break;
        }
    }
}

/// Step 4: show the summary and submit on confirmation.
///
/// Returns `true` when the page was created.
async fn preview_and_submit(session: &mut WizardSession) -> Result<bool> {
    let form = session.form();
    println!("{}", "Preview:".bright_white().bold());
    println!("  Subdomain: {}", form.slug.cyan());
    println!("  Title:     {}", form.title.cyan());
    println!("  Message:   {}", form.content);
    println!("  GIF:       {}", form.gif_url.bright_black());
    println!(
        "  Theme:     {}{}",
        form.theme.display_name(),
        if form.is_dark_mode { " (dark)" } else { "" }
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Create this flashpage?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(false);
    }

    match session.submit().await {
        Ok(page) => {
            println!();
            println!("{}", "✅ Flashpage created!".green().bold());
            println!("  Visit: {}", format!("https://{}.yourdomain", page.slug).cyan());
            Ok(true)
        }
        Err(_) => {
            if let Some(error) = session.last_error() {
                println!("  {} {}", "✘".red(), error);
            }
            Ok(false)
        }
    }
}
