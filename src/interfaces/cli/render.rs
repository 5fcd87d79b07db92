// ============================================================
// TERMINAL RENDERING
// ============================================================

use std::io::{self, Write};

use crate::domain::catalog::{Cart, ImportBatch, Product};

/// Shown for products that carry no category
const DEFAULT_CATEGORY: &str = "Medicine";

/// Price with two decimals and the currency label, e.g. "46.00 EGP"
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{:.2} {}", value, currency)
}

pub fn import_summary<W: Write>(out: &mut W, batch: &ImportBatch) -> io::Result<()> {
    writeln!(
        out,
        "Successfully loaded {} products from {}",
        batch.count, batch.source
    )?;
    if batch.dropped > 0 {
        writeln!(out, "Skipped {} rows without a name or price", batch.dropped)?;
    }
    Ok(())
}

pub fn product_table<W: Write>(out: &mut W, products: &[&Product], currency: &str) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found");
    }

    writeln!(
        out,
        "{:<28} {:<30} {:<22} {:>14}  ID",
        "NAME", "ACTIVE INGREDIENT", "COMPANY", "PRICE"
    )?;
    for product in products {
        writeln!(
            out,
            "{:<28} {:<30} {:<22} {:>14}  {}",
            clip(&product.name, 28),
            clip(&product.active_ingredient, 30),
            clip(&product.company, 22),
            format_money(product.price, currency),
            product.id
        )?;
        writeln!(
            out,
            "    {} | {}",
            clip(&product.description, 80),
            product.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
        )?;
    }
    writeln!(out, "{} products", products.len())
}

pub fn category_list<W: Write>(out: &mut W, categories: &[&str], active: Option<&str>) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "No categories");
    }
    for category in categories {
        let marker = if Some(*category) == active { "*" } else { " " };
        writeln!(out, "{} {}", marker, category)?;
    }
    Ok(())
}

pub fn cart_summary<W: Write>(out: &mut W, cart: &Cart, currency: &str) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty");
    }

    for item in cart.items() {
        writeln!(
            out,
            "{:<28} x{:<4} {:>14}  {}",
            clip(&item.product.name, 28),
            item.quantity,
            format_money(item.line_total(), currency),
            item.product.id
        )?;
    }
    writeln!(
        out,
        "Total ({} items): {}",
        cart.total_items(),
        format_money(cart.total_price(), currency)
    )
}

/// Shorten to `width` characters, marking the cut with "…"
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_products;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(46.0, "EGP"), "46.00 EGP");
        assert_eq!(format_money(1287.5, "EGP"), "1287.50 EGP");
    }

    #[test]
    fn test_product_table() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().take(2).collect();
        let text = render(|out| product_table(out, &refs, "EGP"));

        assert!(text.starts_with("NAME"));
        assert!(text.contains("19.00 EGP"));
        assert!(text.contains("Nutricia Cuijk B.V."));
        assert!(text.ends_with("2 products\n"));

        let text = render(|out| product_table(out, &[], "EGP"));
        assert_eq!(text, "No products found\n");
    }

    #[test]
    fn test_product_table_shows_description_and_category() {
        let mut products = sample_products();
        products.truncate(2);
        products[1].category = None;
        let refs: Vec<&Product> = products.iter().collect();

        let text = render(|out| product_table(out, &refs, "EGP"));
        let detail_lines: Vec<&str> = text.lines().filter(|line| line.starts_with("    ")).collect();

        assert_eq!(detail_lines.len(), 2);
        assert_eq!(detail_lines[0], "    20 Capsules - Vitamin A supplement | Vitamins");
        assert_eq!(detail_lines[1], "    400gm - Infant milk formula | Medicine");
    }

    #[test]
    fn test_cart_summary() {
        let products = sample_products();
        let mut cart = Cart::new();
        cart.add(&products[3]);
        cart.add(&products[3]);

        let text = render(|out| cart_summary(out, &cart, "EGP"));
        assert!(text.contains("x2"));
        assert!(text.contains("Total (2 items): 48.00 EGP"));

        let text = render(|out| cart_summary(out, &Cart::new(), "EGP"));
        assert_eq!(text, "Your cart is empty\n");
    }

    #[test]
    fn test_category_list_marks_active() {
        let text = render(|out| category_list(out, &["Vitamins", "Allergy"], Some("Allergy")));
        assert_eq!(text, "  Vitamins\n* Allergy\n");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("Abimol", 10), "Abimol");
        assert_eq!(clip("Paracetamol + Pseudoephedrine", 10), "Paracetam…");
    }
}
