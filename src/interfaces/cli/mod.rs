pub mod render;
pub mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use crate::application::{export_products, export_template, CatalogImporter, Storefront};
use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};
use session::Session;

#[derive(Debug, Parser)]
#[command(name = "pharmashop")]
#[command(about = "Import pharmacy catalogs from CSV or Excel files and browse them")]
#[command(version)]
pub struct Cli {
    /// Configuration file, defaults to pharmashop.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import a catalog and print the normalized products
    Import {
        file: PathBuf,

        /// Print the products as JSON
        #[arg(long)]
        json: bool,
    },
    /// Import a catalog, then filter it by search query and category
    Browse {
        file: PathBuf,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },
    /// Write the sample import template
    Template {
        /// .csv or .xlsx output, defaults to the configured template file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import a catalog and write it back in template layout
    Export {
        file: PathBuf,

        #[arg(long, short)]
        output: PathBuf,
    },
    /// Start an interactive shopping session
    Shop { file: Option<PathBuf> },
}

pub async fn execute(command: Command, config: &AppConfig) -> Result<()> {
    let importer = CatalogImporter::new(config.import.clone())?;

    match command {
        Command::Import { file, json } => {
            let batch = importer.import_path(&file).await?;
            let mut out = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &batch.products)
                    .map_err(|e| AppError::Internal(format!("Failed to encode products: {}", e)))?;
                writeln!(out)?;
            } else {
                render::import_summary(&mut out, &batch)?;
                let products: Vec<_> = batch.products.iter().collect();
                render::product_table(&mut out, &products, &config.currency)?;
            }
        }
        Command::Browse { file, search, category } => {
            let batch = importer.import_path(&file).await?;
            let mut store = Storefront::default();
            store.apply_import(batch);
            store.set_search(search.unwrap_or_default());
            store.set_category(category);

            let mut out = io::stdout().lock();
            writeln!(out, "Categories:")?;
            render::category_list(&mut out, &store.categories(), store.category())?;
            writeln!(out)?;
            render::product_table(&mut out, &store.filtered_products(), &config.currency)?;
        }
        Command::Template { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&config.template_file));
            let rows = export_template(&path)?;
            println!("Template with {} products written to {}", rows, path.display());
        }
        Command::Export { file, output } => {
            let batch = importer.import_path(&file).await?;
            let rows = export_products(&batch.products, &output)?;
            println!("{} products written to {}", rows, output.display());
        }
        Command::Shop { file } => {
            let mut session = Session::new(importer, config);
            let mut out = io::stdout();
            if let Some(file) = file {
                if let Err(err) = session.load(&file, &mut out).await {
                    writeln!(out, "{}", err)?;
                }
            }
            session
                .run(BufReader::new(tokio::io::stdin()), &mut out)
                .await?;
        }
    }

    Ok(())
}
