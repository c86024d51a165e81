use crate::domain::recipe::entities::RecipeIngredient;

/// Chef persona and the recipe layout the parser understands.
pub const SYSTEM_PROMPT: &str = r#"Tu es Chef AirCook, un chef cuisinier français chaleureux et passionné.
Tu réponds toujours en français, avec des conseils précis et bienveillants.
Tu peux discuter de cuisine, de techniques, d'accords mets et vins et de nutrition.

Quand tu proposes une recette, respecte EXACTEMENT ce format markdown :

## 🎯 **Nom de la recette**

📖 **Description :** Une phrase qui donne envie.

⏱️ **Temps de préparation :** 15 minutes
🔥 **Temps de cuisson :** 30 minutes
👥 **Portions :** 4
📊 **Difficulté :** Facile | Moyen | Difficile
🍽️ **Catégorie :** Entrée | Plat principal | Dessert | Accompagnement | Boisson

🥘 **Ingrédients :**
| Ingrédient | Quantité |
|---|---|
| Farine | 200 g |

📝 **Instructions :**
1. Première étape.
2. Deuxième étape.

💡 **Conseils du chef :** Une astuce facultative.

N'utilise ce format que pour une recette complète."#;

pub const NUTRITION_SYSTEM_PROMPT: &str = r#"Tu es un nutritionniste diplômé. Tu réponds en français.
Tu estimes les apports nutritionnels d'un plat pour l'ensemble des quantités indiquées."#;

fn bullet_list<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    items
        .into_iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipe_generation_prompt(
    ingredients: &[String],
    preferences: Option<&str>,
    servings: u32,
    allergies: &[String],
) -> String {
    let mut prompt = format!(
        "Crée une recette savoureuse pour {servings} personnes avec les ingrédients suivants :\n{}\n",
        bullet_list(ingredients.iter().map(|i| i.trim().to_string()))
    );

    if let Some(preferences) = preferences.map(str::trim).filter(|p| !p.is_empty()) {
        prompt.push_str(&format!("\nPréférences : {preferences}\n"));
    }

    if !allergies.is_empty() {
        prompt.push_str(&format!(
            "\nLa personne est allergique à : {}. N'utilise aucun ingrédient qui en contient.\n",
            allergies.join(", ")
        ));
    }

    prompt.push_str(
        "\nTu peux ajouter des ingrédients de base (sel, poivre, huile). \
         Réponds uniquement avec la recette au format demandé.",
    );

    prompt
}

pub fn nutrition_prompt(ingredients: &[RecipeIngredient]) -> String {
    let lines = ingredients.iter().map(|i| {
        format!("{} {} {}", i.quantity, i.unit, i.name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    });

    format!(
        "Analyse la valeur nutritionnelle de ces ingrédients :\n{}\n\n\
         Réponds avec un tableau markdown à deux colonnes, exactement ces lignes :\n\
         | Nutriment | Valeur |\n\
         |---|---|\n\
         | Calories | ... kcal |\n\
         | Protéines | ... g |\n\
         | Glucides | ... g |\n\
         | Lipides | ... g |\n\
         | Vitamines | liste séparée par des virgules |\n\
         | Minéraux | liste séparée par des virgules |\n\n\
         Ajoute ensuite un court commentaire sur l'équilibre du plat.",
        bullet_list(lines)
    )
}
