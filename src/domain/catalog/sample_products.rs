// ============================================================
// SAMPLE CATALOG
// ============================================================
// Built-in products used for the downloadable import template

use super::Product;

// (name, active ingredient, company, price, description, category)
const SAMPLE_ROWS: &[(&str, &str, &str, f64, &str, &str)] = &[
    ("A-Viton 50000 I.U.", "Vitamin A", "Kahira", 19.0, "20 Capsules - Vitamin A supplement", "Vitamins"),
    ("Aptamil 1 Advance Premium", "Milk Formula Stage 1", "Nutricia Cuijk B.V.", 370.0, "400gm - Infant milk formula", "Baby Care"),
    ("Aptamil 2 Advance Premium", "Milk Formula Stage 2", "Nutricia Cuijk B.V.", 370.0, "400gm - Follow-on milk formula", "Baby Care"),
    ("Abimol 500mg", "Paracetamol", "GlaxoSmithKline", 24.0, "20 Tablets - Analgesic and Antipyretic", "Pain Relief"),
    ("Abimol Extra", "Paracetamol + Caffeine", "GlaxoSmithKline", 28.0, "20 Tablets - For strong pain relief", "Pain Relief"),
    ("Adrenaline", "Adrenaline", "Misr", 350.0, "1mg/ml 100 Ampoules - Emergency medication", "Injection"),
    ("Atacand 16mg", "Candesartan Cilexetil", "AstraZeneca", 116.0, "14 Tablets - Antihypertensive", "Cardiovascular"),
    ("Ator 10mg", "Atorvastatin", "EIPICO", 33.0, "7 Tablets - Lipid lowering agent", "Cardiovascular"),
    ("Augmentin 1g", "Amoxicillin + Clavulanic Acid", "MUP", 99.0, "14 Tablets - Broad spectrum antibiotic", "Antibiotics"),
    ("Betadine Solution", "Povidone Iodine", "Mundipharma", 475.0, "1 Liter - Antiseptic solution", "Antiseptics"),
    ("Brufen 400mg", "Ibuprofen", "Abbott", 78.0, "30 Tablets - Anti-inflammatory", "Pain Relief"),
    ("Cataflam 50mg", "Diclofenac Potassium", "Novartis", 86.0, "20 Tablets - Pain relief", "Pain Relief"),
    ("Concor 5mg", "Bisoprolol", "Merck", 63.0, "30 Tablets - Beta blocker", "Cardiovascular"),
    ("Controloc 40mg", "Pantoprazole", "Takeda", 100.0, "14 Tablets - Proton pump inhibitor", "Gastrointestinal"),
    ("Dolphin 50mg", "Diclofenac Sodium", "Delta Pharma", 48.0, "10 Suppositories - Anti-inflammatory", "Pain Relief"),
    ("Flagyl 500mg", "Metronidazole", "Sanofi", 23.0, "20 Tablets - Antiprotozoal/Antibacterial", "Antibiotics"),
    ("Genuphil", "Glucosamine + Chondroitin", "Eva Pharma", 260.0, "50 Tablets - Joint care", "Supplements"),
    ("Hibiotic 1g", "Amoxicillin + Clavulanic Acid", "Amoun", 91.0, "14 Tablets - Antibiotic", "Antibiotics"),
    ("Ketolgin 50mg", "Ketoprofen", "Amriya", 11.0, "20 Capsules - Pain relief", "Pain Relief"),
    ("Lantus SoloStar", "Insulin Glargine", "Sanofi", 1287.0, "5 Pens - Long acting insulin", "Diabetes"),
    ("Milga", "Benfotiamine + Vit B6 + B12", "Eva Pharma", 68.0, "40 Tablets - Nerve tonic", "Vitamins"),
    ("Neurimax", "Vitamin B Complex", "Chemipharm", 54.0, "30 Capsules - Vitamin supplement", "Vitamins"),
    ("Omega 3 Plus", "Fish Oil + Wheat Germ Oil", "Sedico", 135.0, "30 Capsules - Dietary supplement", "Supplements"),
    ("Panadol Advance", "Paracetamol", "Alexandria/GSK", 46.0, "24 Tablets - Pain reliever", "Pain Relief"),
    ("Royal Jelly 1000mg", "Royal Jelly", "Pharco", 88.0, "12 Capsules - Dietary supplement", "Supplements"),
    ("Telfast 180mg", "Fexofenadine", "Sanofi", 144.0, "20 Tablets - Antihistamine", "Allergy"),
    ("Voltaren 100mg", "Diclofenac Sodium", "Novartis", 105.0, "10 Suppositories - Anti-inflammatory", "Pain Relief"),
    ("Zithromax 500mg", "Azithromycin", "Pfizer", 160.0, "3 Tablets - Antibiotic", "Antibiotics"),
    ("Zyrtec 10mg", "Cetirizine", "GSK", 100.0, "20 Tablets - Antihistamine", "Allergy"),
    ("1,2,3", "Paracetamol + Pseudoephedrine", "Hikma", 24.0, "20 Tablets - Cold & Flu", "Cold & Flu"),
];

/// The sample catalog, ids numbered from 1
pub fn sample_products() -> Vec<Product> {
    SAMPLE_ROWS
        .iter()
        .enumerate()
        .map(
            |(idx, (name, ingredient, company, price, description, category))| Product {
                id: (idx + 1).to_string(),
                name: name.to_string(),
                active_ingredient: ingredient.to_string(),
                company: company.to_string(),
                price: *price,
                description: description.to_string(),
                category: Some(category.to_string()),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_is_valid() {
        let products = sample_products();
        assert_eq!(products.len(), 30);
        assert!(products.iter().all(|p| !p.name.is_empty() && p.price > 0.0));

        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(products[0].id, "1");
        assert_eq!(products[29].name, "1,2,3");
    }
}
