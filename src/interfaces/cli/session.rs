// ============================================================
// INTERACTIVE SHOP SESSION
// ============================================================
// Line-oriented commands over one Storefront

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use super::render;
use crate::application::{export_products, export_template, CatalogImporter, Storefront};
use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};

const HELP: &str = "\
Commands:
  load <file>        import a .csv, .xlsx or .xls catalog
  search [query]     filter by name, active ingredient or company
  category [name]    filter by category (no name clears it)
  list               show the filtered products
  categories         show the available categories
  add <id>           add one unit to the cart
  inc <id>           increase a cart quantity
  dec <id>           decrease a cart quantity (never below 1)
  remove <id>        remove an item from the cart
  cart               show the cart and its total
  checkout           proceed to checkout
  template [path]    write the sample import template
  export <path>      write the current catalog
  reset              clear the catalog, cart and search
  help               show this help
  quit               leave the shop";

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: Storefront,
    importer: CatalogImporter,
    currency: String,
    template_file: PathBuf,
}

impl Session {
    pub fn new(importer: CatalogImporter, config: &AppConfig) -> Self {
        Self {
            store: Storefront::default(),
            importer,
            currency: config.currency.clone(),
            template_file: PathBuf::from(&config.template_file),
        }
    }

    pub fn storefront(&self) -> &Storefront {
        &self.store
    }

    /// Read commands from `input` until it ends or `quit` is entered
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Type `help` for the list of commands")?;
        let mut lines = input.lines();

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle(&line, out).await? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute one command line. Command failures are printed, not returned.
    pub async fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match self.execute(command, arg, out).await {
            Ok(flow) => Ok(flow),
            Err(AppError::ImportError(err)) => {
                warn!(error = %err, "Import failed");
                writeln!(out, "{}", err)?;
                Ok(Flow::Continue)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn execute<W: Write>(&mut self, command: &str, arg: &str, out: &mut W) -> Result<Flow> {
        match command {
            "load" => {
                let path = required(arg, "load <file>")?;
                self.load(Path::new(path), out).await?;
            }
            "search" => {
                self.store.set_search(arg);
                self.list(out)?;
            }
            "category" => {
                self.store
                    .set_category((!arg.is_empty()).then(|| arg.to_string()));
                self.list(out)?;
            }
            "list" => self.list(out)?,
            "categories" => {
                render::category_list(out, &self.store.categories(), self.store.category())?;
            }
            "add" => {
                let id = required(arg, "add <id>")?;
                self.store.add_to_cart(id)?;
                writeln!(out, "Added to cart ({} items)", self.store.cart_total_items())?;
            }
            "inc" => {
                self.store.update_quantity(required(arg, "inc <id>")?, 1)?;
                render::cart_summary(out, self.store.cart(), &self.currency)?;
            }
            "dec" => {
                self.store.update_quantity(required(arg, "dec <id>")?, -1)?;
                render::cart_summary(out, self.store.cart(), &self.currency)?;
            }
            "remove" => {
                self.store.remove_from_cart(required(arg, "remove <id>")?)?;
                render::cart_summary(out, self.store.cart(), &self.currency)?;
            }
            "cart" => render::cart_summary(out, self.store.cart(), &self.currency)?,
            "checkout" => writeln!(out, "{}", self.store.checkout())?,
            "template" => {
                let path = if arg.is_empty() {
                    self.template_file.clone()
                } else {
                    PathBuf::from(arg)
                };
                let rows = export_template(&path)?;
                writeln!(out, "Template with {} products written to {}", rows, path.display())?;
            }
            "export" => {
                let path = PathBuf::from(required(arg, "export <path>")?);
                let rows = export_products(self.store.products(), &path)?;
                writeln!(out, "{} products written to {}", rows, path.display())?;
            }
            "reset" => {
                self.store.reset();
                writeln!(out, "Catalog cleared. Load a file to start again")?;
            }
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                return Err(AppError::ValidationError(format!(
                    "Unknown command `{}`, type `help` for the list",
                    other
                )))
            }
        }

        Ok(Flow::Continue)
    }

    /// Import `path`; on failure the current catalog is left untouched
    pub async fn load<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        let batch = self.importer.import_path(path).await?;
        render::import_summary(out, &batch)?;
        self.store.apply_import(batch);
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.store.is_loaded() {
            writeln!(out, "No catalog loaded. Use `load <file>` to import one")?;
            return Ok(());
        }
        render::product_table(out, &self.store.filtered_products(), &self.currency)?;
        Ok(())
    }
}

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(AppError::ValidationError(format!("Usage: {}", usage)))
    } else {
        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(ext: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shop-{}.{}", uuid::Uuid::new_v4(), ext));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn session() -> Session {
        Session::new(CatalogImporter::default(), &AppConfig::default())
    }

    async fn send(session: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        session.handle(line, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_load_search_and_cart() {
        let path = temp_file(
            "csv",
            "Name,Active Ingredient,Company,Price\nPanadol,Paracetamol,GSK,46\nBrufen,Ibuprofen,Abbott,78\n",
        );
        let mut session = session();

        let text = send(&mut session, &format!("load {}", path.display())).await;
        assert!(text.contains("Successfully loaded 2 products"));

        let text = send(&mut session, "search ibuprofen").await;
        assert!(text.contains("Brufen"));
        assert!(!text.contains("Panadol"));

        let id = session.storefront().products()[0].id.clone();
        send(&mut session, &format!("add {}", id)).await;
        send(&mut session, &format!("inc {}", id)).await;
        let text = send(&mut session, "cart").await;
        assert!(text.contains("Total (2 items): 92.00 EGP"));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_failed_import_keeps_catalog() {
        let good = temp_file("csv", "Name,Price\nPanadol,46\n");
        let bad = temp_file("csv", "Title,Qty\nPanadol,3\n");
        let mut session = session();

        send(&mut session, &format!("load {}", good.display())).await;
        let text = send(&mut session, &format!("load {}", bad.display())).await;

        assert_eq!(text, "Could not find required columns: Name and Price\n");
        assert_eq!(session.storefront().products().len(), 1);

        let text = send(&mut session, "load catalog.pdf").await;
        assert!(text.starts_with("Unsupported file format"));

        std::fs::remove_file(&good).unwrap();
        std::fs::remove_file(&bad).unwrap();
    }

    #[tokio::test]
    async fn test_unknown_product_and_command() {
        let mut session = session();
        let text = send(&mut session, "add 42").await;
        assert!(text.contains("Not found"));

        let text = send(&mut session, "fly").await;
        assert!(text.contains("Unknown command `fly`"));

        let text = send(&mut session, "list").await;
        assert!(text.contains("No catalog loaded"));
    }

    #[tokio::test]
    async fn test_run_stops_at_quit() {
        let mut session = session();
        let input: &[u8] = b"help\nquit\ncart\n";
        let mut out = Vec::new();

        session.run(input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("template [path]"));
        assert!(!text.contains("Your cart is empty"));
    }

    #[tokio::test]
    async fn test_template_command_writes_file() {
        let path = std::env::temp_dir().join(format!("shop-template-{}.csv", uuid::Uuid::new_v4()));
        let mut session = session();

        let text = send(&mut session, &format!("template {}", path.display())).await;
        assert!(text.contains("Template with 30 products"));
        assert!(path.exists());

        std::fs::remove_file(&path).unwrap();
    }
}
