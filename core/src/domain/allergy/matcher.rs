//! Keyword based allergy detection.
//!
//! For each allergy of a user the ingredient names of a recipe are scanned
//! in three passes and the first hit wins:
//! 1. the allergy label and the ingredient name contain one another,
//! 2. a keyword of the stored allergy record with the same label is found,
//! 3. a synonym from the built-in French allergen dictionary is found.

use crate::domain::allergy::entities::Allergy;

/// Allergen labels (all spellings that select the entry) and the ingredient
/// fragments that reveal them.
const FALLBACK_SYNONYMS: &[(&[&str], &[&str])] = &[
    (
        &["gluten", "blé", "ble"],
        &[
            "blé", "ble", "farine", "orge", "seigle", "avoine", "épeautre", "pain", "pâtes",
            "pates", "semoule", "chapelure", "biscuit", "couscous", "boulgour",
        ],
    ),
    (
        &["lactose", "lait", "produits laitiers", "laitiers"],
        &[
            "lait", "beurre", "crème", "creme", "fromage", "yaourt", "yogourt", "mozzarella",
            "parmesan", "emmental", "gruyère", "ricotta", "mascarpone",
        ],
    ),
    (
        &["arachides", "arachide", "cacahuètes", "cacahuete"],
        &["arachide", "cacahuète", "cacahuete", "beurre de cacahuète"],
    ),
    (
        &["fruits à coque", "fruits a coque", "noix"],
        &[
            "noix", "amande", "noisette", "cajou", "pistache", "pécan", "pecan", "macadamia",
            "praliné",
        ],
    ),
    (
        &["oeufs", "œufs", "oeuf", "œuf"],
        &["oeuf", "œuf", "mayonnaise", "meringue"],
    ),
    (
        &["poisson", "poissons"],
        &[
            "poisson", "saumon", "thon", "cabillaud", "sardine", "anchois", "truite", "colin",
            "merlu", "maquereau",
        ],
    ),
    (
        &["crustacés", "crustaces", "fruits de mer"],
        &["crevette", "crabe", "homard", "langoustine", "écrevisse", "ecrevisse"],
    ),
    (
        &["mollusques"],
        &["moule", "huître", "huitre", "calamar", "seiche", "poulpe", "escargot", "coquille"],
    ),
    (&["soja"], &["soja", "tofu", "tempeh", "edamame", "miso"]),
    (&["sésame", "sesame"], &["sésame", "sesame", "tahini", "tahin"]),
    (&["céleri", "celeri"], &["céleri", "celeri"]),
    (&["moutarde"], &["moutarde"]),
    (&["lupin"], &["lupin"]),
    (&["sulfites"], &["vin", "vinaigre", "fruits secs"]),
];

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn fallback_synonyms(allergy: &str) -> &'static [&'static str] {
    FALLBACK_SYNONYMS
        .iter()
        .find(|(labels, _)| labels.contains(&allergy))
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

fn matches_allergy(allergy: &str, ingredients: &[String], records: &[Allergy]) -> bool {
    if ingredients
        .iter()
        .any(|ingredient| ingredient.contains(allergy) || allergy.contains(ingredient.as_str()))
    {
        return true;
    }

    let keywords = records
        .iter()
        .filter(|record| normalize(&record.name) == allergy)
        .flat_map(|record| record.keywords.iter().map(|k| normalize(k)))
        .filter(|keyword| !keyword.is_empty());
    for keyword in keywords {
        if ingredients.iter().any(|ingredient| ingredient.contains(&keyword)) {
            return true;
        }
    }

    fallback_synonyms(allergy)
        .iter()
        .any(|synonym| ingredients.iter().any(|ingredient| ingredient.contains(synonym)))
}

/// Returns the user allergies (as the user spelled them) that one of the
/// ingredient names triggers, in the user's order and without duplicates.
pub fn find_matching_allergies(
    user_allergies: &[String],
    ingredient_names: &[String],
    records: &[Allergy],
) -> Vec<String> {
    let ingredients: Vec<String> = ingredient_names
        .iter()
        .map(|name| normalize(name))
        .filter(|name| !name.is_empty())
        .collect();

    let mut seen: Vec<String> = Vec::new();
    let mut matches = Vec::new();

    for user_allergy in user_allergies {
        let allergy = normalize(user_allergy);
        if allergy.is_empty() || seen.contains(&allergy) {
            continue;
        }
        seen.push(allergy.clone());

        if matches_allergy(&allergy, &ingredients, records) {
            matches.push(user_allergy.trim().to_string());
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_flour_triggers_gluten() {
        assert_eq!(
            find_matching_allergies(&strings(&["gluten"]), &strings(&["farine"]), &[]),
            strings(&["gluten"])
        );
    }

    #[test]
    fn test_direct_substring_both_ways() {
        assert_eq!(
            find_matching_allergies(&strings(&["Moutarde"]), &strings(&["Moutarde de Dijon"]), &[]),
            strings(&["Moutarde"])
        );
        assert_eq!(
            find_matching_allergies(&strings(&["noix de coco"]), &strings(&["coco"]), &[]),
            strings(&["noix de coco"])
        );
    }

    #[test]
    fn test_record_keywords_are_used() {
        let records = vec![Allergy {
            id: "recAllergy0000001".to_string(),
            name: "Kiwi".to_string(),
            description: "Allergie au kiwi".to_string(),
            keywords: strings(&["actinidia", "kiwaï"]),
        }];

        assert_eq!(
            find_matching_allergies(&strings(&["kiwi"]), &strings(&["Kiwaï en dés"]), &records),
            strings(&["kiwi"])
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(
            find_matching_allergies(
                &strings(&["lactose", "poisson"]),
                &strings(&["tomate", "courgette", "huile d'olive"]),
                &[]
            )
            .is_empty()
        );
    }

    #[test]
    fn test_order_and_duplicates() {
        let found = find_matching_allergies(
            &strings(&["lactose", "gluten", " Gluten ", "soja"]),
            &strings(&["Pâtes fraîches", "Crème fraîche", "Tofu"]),
            &[],
        );

        assert_eq!(found, strings(&["lactose", "gluten", "soja"]));
    }

    #[test]
    fn test_blank_values_never_match() {
        assert!(
            find_matching_allergies(&strings(&["", "  "]), &strings(&["farine", ""]), &[])
                .is_empty()
        );
        assert!(find_matching_allergies(&strings(&["gluten"]), &strings(&["  "]), &[]).is_empty());
    }
}
