//! Inventory Console
//!
//! A terminal front end for the equipment inventory: a filterable, paginated
//! listing plus create/edit/delete against the remote store.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use eyre::{eyre, Result};
use tracing::info;

use domain_inventory::{
    Condition, EquipmentForm, FormState, HttpInventoryApi, InventoryError, InventoryScreen,
    LoadState, RowView,
};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "inventory-cli")]
#[command(about = "Manage the equipment inventory from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the equipment table
    List {
        /// Free-text search over item names
        #[arg(short, long)]
        search: Option<String>,

        /// Only show items in this category id
        #[arg(short, long)]
        category: Option<i64>,

        /// 0-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Rows per page (defaults to INVENTORY_PAGE_SIZE)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Create an equipment item
    Create {
        #[arg(long)]
        name: Option<String>,

        /// new, used, or refurbished
        #[arg(long)]
        condition: Option<Condition>,

        #[arg(long, default_value_t = 1)]
        quantity: i64,

        /// Category id (see `categories`)
        #[arg(long)]
        category: Option<i64>,
    },

    /// Edit an existing equipment item
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// new, used, or refurbished
        #[arg(long)]
        condition: Option<Condition>,

        #[arg(long)]
        quantity: Option<i64>,

        #[arg(long)]
        category: Option<i64>,
    },

    /// Delete an equipment item (asks for confirmation)
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the available categories
    Categories,
}

type Screen = InventoryScreen<HttpInventoryApi, HttpInventoryApi>;

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    let api = Arc::new(
        HttpInventoryApi::with_timeout(config.api.base_url.clone(), config.api.timeout)
            .map_err(|e| eyre!("Failed to build store client: {e}"))?,
    );
    let mut screen: Screen = InventoryScreen::new(Arc::clone(&api), api);
    screen.set_page_size(config.page_size);

    info!(base_url = %config.api.base_url, "Connecting to inventory store");

    match cli.command {
        Commands::List {
            search,
            category,
            page,
            page_size,
        } => {
            mount_or_warn(&mut screen).await;

            if let Some(size) = page_size {
                screen.set_page_size(size);
            }
            if let Some(text) = search {
                screen.search(text);
            }
            screen.filter_by_category(category);
            // Page last: search and filter changes reset the index
            screen.go_to_page(page);

            let (rows, total) = screen.visible_rows();
            print_table(&rows);

            let pages = total.div_ceil(screen.query().page_size()).max(1);
            println!("{} item(s), page {} of {}", total, page + 1, pages);
        }

        Commands::Create {
            name,
            condition,
            quantity,
            category,
        } => {
            mount_or_bail(&mut screen).await?;

            let mut form = EquipmentForm::create();
            {
                let draft = form.draft_mut();
                if let Some(name) = name {
                    draft.name = name;
                }
                draft.condition = condition;
                draft.quantity = quantity;
                draft.category_id = category;
            }

            submit_form(&mut screen, &mut form).await?;
            println!("Created \"{}\"", form.draft().name);
        }

        Commands::Update {
            id,
            name,
            condition,
            quantity,
            category,
        } => {
            mount_or_bail(&mut screen).await?;

            let existing = screen
                .find(id)
                .cloned()
                .ok_or_else(|| eyre!("No equipment with id {id}; run `list` to refresh"))?;

            let mut form = EquipmentForm::edit(&existing);
            {
                let draft = form.draft_mut();
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(condition) = condition {
                    draft.condition = Some(condition);
                }
                if let Some(quantity) = quantity {
                    draft.quantity = quantity;
                }
                if let Some(category) = category {
                    draft.category_id = Some(category);
                }
            }

            submit_form(&mut screen, &mut form).await?;
            println!("Updated \"{}\"", form.draft().name);
        }

        Commands::Delete { id, yes } => {
            mount_or_bail(&mut screen).await?;

            let name = screen
                .find(id)
                .map(|row| row.name.clone())
                .ok_or_else(|| eyre!("No equipment with id {id}; run `list` to refresh"))?;

            if !yes && !confirm(&format!("Delete \"{name}\"? [y/N] "))? {
                println!("Aborted");
                return Ok(());
            }

            match screen.delete(id).await {
                Ok(true) => println!("Deleted \"{name}\""),
                Ok(false) => println!("Nothing deleted"),
                Err(InventoryError::NotFound(_)) => {
                    return Err(eyre!("Equipment {id} no longer exists; run `list` to refresh"));
                }
                Err(err) => return Err(eyre!("Delete failed: {err}")),
            }
        }

        Commands::Categories => {
            mount_or_warn(&mut screen).await;

            println!("{:<6} NAME", "ID");
            for category in screen.categories() {
                println!("{:<6} {}", category.id, category.name);
            }
        }
    }

    Ok(())
}

/// Mount for read-only views: a failed load renders an empty table with a
/// warning instead of aborting.
async fn mount_or_warn(screen: &mut Screen) {
    if let LoadState::Failed(message) = screen.mount().await {
        eprintln!("warning: initial load failed: {message}");
    }
}

/// Mount for mutations: without both loads the form cannot validate, so bail.
async fn mount_or_bail(screen: &mut Screen) -> Result<()> {
    if let LoadState::Failed(message) = screen.mount().await {
        return Err(eyre!("Initial load failed: {message}"));
    }
    Ok(())
}

/// Submit a form, reporting every invalid field at once
async fn submit_form(screen: &mut Screen, form: &mut EquipmentForm) -> Result<()> {
    if screen.submit(form).await {
        return Ok(());
    }

    if !form.issues().is_empty() {
        for issue in form.issues() {
            eprintln!("  {}: {}", issue.field, issue.message);
        }
        return Err(eyre!("Validation failed"));
    }

    match form.state() {
        FormState::Failed(message) => Err(eyre!("Store rejected the mutation: {message}")),
        _ => Err(eyre!("Submit did not complete")),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_table(rows: &[RowView]) {
    println!(
        "{:<6} {:<24} {:<12} {:>8}  CATEGORY",
        "ID", "NAME", "CONDITION", "QUANTITY"
    );
    for row in rows {
        println!(
            "{:<6} {:<24} {:<12} {:>8}  {}",
            row.equipment.id,
            row.equipment.name,
            row.equipment.condition,
            row.equipment.quantity,
            row.category_name
        );
    }
}
