use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watchme_client::api::{ShowsApi, DEFAULT_BASE_URL};
use watchme_client::view::card::{genre_chips, rating_stars};
use watchme_client::view::form::ShowForm;
use watchme_client::view::{
    genre_icon, type_icon, CreateForm, LoadState, ShowCard, ShowFilter, ShowList,
};
use watchme_core::payload::WATCHED_AT_FORMAT;
use watchme_core::show::{ShowStatus, ShowType};
use watchme_core::types::DbId;

/// Track the movies and series you have watched.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shows collection URL of the WatchMe API.
    #[arg(long, env = "WATCHME_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shows with summary statistics.
    List(ListArgs),
    /// Add a new show.
    Add(AddArgs),
    /// Edit an existing show; omitted fields keep their current value.
    Edit {
        id: DbId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a show.
    Delete { id: DbId },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive title search.
    #[arg(long)]
    search: Option<String>,
    /// e.g. "Finished", "Plan to Watch".
    #[arg(long)]
    status: Option<ShowStatus>,
    /// e.g. "Movie", "TV Show".
    #[arg(long = "type")]
    show_type: Option<ShowType>,
    /// Case-insensitive genre search.
    #[arg(long)]
    genre: Option<String>,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long = "type", default_value = "Movie")]
    show_type: String,
    #[arg(long, default_value = "Finished")]
    status: String,
    /// 1 to 10.
    #[arg(long)]
    rating: String,
    /// Comma-separated genres.
    #[arg(long)]
    genre: String,
    /// YYYY-MM-DD; defaults to today.
    #[arg(long)]
    watched_at: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    notes: String,
    #[arg(long, default_value = "")]
    poster_url: String,
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long = "type")]
    show_type: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    rating: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    watched_at: Option<NaiveDate>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    poster_url: Option<String>,
}

impl FieldArgs {
    fn apply(self, form: &mut ShowForm) {
        let FieldArgs {
            title,
            show_type,
            status,
            rating,
            genre,
            watched_at,
            notes,
            poster_url,
        } = self;

        if let Some(v) = title {
            form.title = v;
        }
        if let Some(v) = show_type {
            form.show_type = v;
        }
        if let Some(v) = status {
            form.status = v;
        }
        if let Some(v) = rating {
            form.rating = v;
        }
        if let Some(v) = genre {
            form.genre = v;
        }
        if let Some(v) = watched_at {
            form.watched_at = v.format(WATCHED_AT_FORMAT).to_string();
        }
        if let Some(v) = notes {
            form.notes = v;
        }
        if let Some(v) = poster_url {
            form.poster_url = v;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchme_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api = ShowsApi::new(cli.api_url);

    match cli.command {
        Commands::List(args) => handle_list(&api, args).await,
        Commands::Add(args) => handle_add(&api, args).await,
        Commands::Edit { id, fields } => handle_edit(&api, id, fields).await,
        Commands::Delete { id } => handle_delete(&api, id).await,
    }
}

async fn load_list(api: &ShowsApi) -> anyhow::Result<ShowList> {
    let mut list = ShowList::new();
    list.load(api).await;
    if let LoadState::Failed(message) = list.state() {
        bail!("{message}");
    }
    Ok(list)
}

async fn handle_list(api: &ShowsApi, args: ListArgs) -> anyhow::Result<()> {
    let mut list = load_list(api).await?;
    list.set_filter(ShowFilter {
        search: args.search.unwrap_or_default(),
        status: args.status,
        show_type: args.show_type,
        genre: args.genre.unwrap_or_default(),
    });

    let stats = list.stats();
    println!(
        "Total: {}  Finished: {}  Avg rating: {:.1}",
        stats.total, stats.finished, stats.average_rating
    );
    println!("{}", list.summary());
    println!();

    for show in list.visible() {
        let chips: Vec<String> = genre_chips(show)
            .into_iter()
            .map(|g| format!("{} {}", genre_icon(g), g))
            .collect();
        println!(
            "#{:<4} {} {}  [{}]  {}  {}",
            show.id,
            type_icon(show.show_type),
            show.title,
            show.status,
            rating_stars(show.rating),
            show.watched_at.format(WATCHED_AT_FORMAT),
        );
        if !chips.is_empty() {
            println!("      {}", chips.join("  "));
        }
    }
    Ok(())
}

async fn handle_add(api: &ShowsApi, args: AddArgs) -> anyhow::Result<()> {
    let watched_at = args.watched_at.unwrap_or_else(|| Local::now().date_naive());

    let mut create = CreateForm::new();
    create.form = ShowForm {
        title: args.title,
        show_type: args.show_type,
        status: args.status,
        rating: args.rating,
        notes: args.notes,
        watched_at: watched_at.format(WATCHED_AT_FORMAT).to_string(),
        genre: args.genre,
        poster_url: args.poster_url,
    };

    match create.submit(api).await {
        Some(show) => {
            println!("Added #{}: {}", show.id, show.title);
            Ok(())
        }
        None => bail!("{}", create.error().unwrap_or("Failed to add show.")),
    }
}

async fn handle_edit(api: &ShowsApi, id: DbId, fields: FieldArgs) -> anyhow::Result<()> {
    let mut list = load_list(api).await?;
    let mut card = ShowCard::new(id);
    if !card.begin_edit(&list) {
        bail!("Show {id} not found");
    }
    let form = card.form_mut().context("Edit form unavailable")?;
    fields.apply(form);

    if !card.save(api, &mut list).await {
        bail!("{}", card.error().unwrap_or("Failed to update show."));
    }
    if let Some(show) = list.get(id) {
        println!("Updated #{}: {}", show.id, show.title);
    }
    Ok(())
}

async fn handle_delete(api: &ShowsApi, id: DbId) -> anyhow::Result<()> {
    let mut list = ShowList::new();
    let mut card = ShowCard::new(id);
    if !card.delete(api, &mut list).await {
        bail!("{}", card.error().unwrap_or("Failed to delete show."));
    }
    println!("Deleted #{id}");
    Ok(())
}
