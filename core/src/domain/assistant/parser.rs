//! Extraction of structured data from the assistant's markdown answers.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::recipe::entities::{
    Difficulty, NutritionalAnalysis, RecipeDraft, RecipeIngredient,
};

pub const DEFAULT_SERVINGS: u32 = 4;
pub const DEFAULT_CATEGORY: &str = "Plat principal";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*##\s*🎯\s*\*\*(.+?)\*\*").unwrap());

static INGREDIENTS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"🥘\s*\*\*\s*Ingrédients\s*:?\s*\*\*[ \t]*:?").unwrap());

static INSTRUCTIONS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"📝\s*\*\*\s*Instructions\s*:?\s*\*\*[ \t]*:?").unwrap());

// A heading, or an emoji followed by a bold label.
static SECTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:#{1,6}\s|[^\w\s|*\-•][^\s]{0,3}\s*\*\*)").unwrap());

static DESCRIPTION_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Description"));
static PREP_TIME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| field_regex("Temps de préparation|Préparation"));
static COOK_TIME_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Temps de cuisson|Cuisson"));
static SERVINGS_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Portions|Personnes"));
static DIFFICULTY_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Difficulté"));
static CATEGORY_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Catégorie"));

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:h|heures?)\s*(\d+)?|(\d+)").unwrap()
});

static INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").unwrap());

static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:[.,/]\d+)?|½|¼|¾)\s*(.*)$").unwrap()
});

static STEP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d+\s*[.)]|[-*•])\s*").unwrap());

fn field_regex(labels: &str) -> Regex {
    Regex::new(&format!(
        r"(?mi)\*\*[ \t]*(?:{labels})[ \t]*:?[ \t]*\*\*[ \t]*:?[ \t]*(.*)$"
    ))
    .unwrap()
}

fn field<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

fn strip_bold(value: &str) -> String {
    value.replace("**", "").trim().to_string()
}

/// Minutes from values such as `25 minutes`, `1 h 30` or `2 heures`.
fn parse_minutes(value: &str) -> u32 {
    let Some(captures) = DURATION_REGEX.captures(value) else {
        return 0;
    };

    let number = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    match number(1) {
        Some(hours) => hours
            .checked_mul(60)
            .and_then(|minutes| minutes.checked_add(number(2).unwrap_or(0)))
            .unwrap_or(0),
        None => number(3).unwrap_or(0),
    }
}

fn parse_difficulty(value: &str) -> Difficulty {
    let value = value.to_lowercase();
    if value.contains("difficile") {
        Difficulty::Difficile
    } else if value.contains("facile") {
        Difficulty::Facile
    } else {
        Difficulty::Moyen
    }
}

/// Lines following `start` up to the next section heading.
fn section_lines(text: &str, start: usize) -> impl Iterator<Item = &str> {
    text[start..]
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !SECTION_LINE.is_match(line))
}

fn table_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(strip_bold)
        .collect()
}

fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

fn is_header_row(cells: &[String]) -> bool {
    cells.first().is_some_and(|cell| {
        matches!(
            cell.to_lowercase().as_str(),
            "ingrédient" | "ingrédients" | "ingredient" | "ingredients" | "nom" | "nutriment"
        )
    })
}

fn split_quantity(cell: &str) -> (String, String) {
    match QUANTITY_REGEX.captures(cell.trim()) {
        Some(captures) => (
            captures[1].to_string(),
            captures[2].trim().to_string(),
        ),
        None => (cell.trim().to_string(), String::new()),
    }
}

fn parse_ingredient_line(line: &str) -> Option<RecipeIngredient> {
    let line = line.trim();

    if line.starts_with('|') {
        let cells = table_cells(line);
        if is_separator_row(&cells) || is_header_row(&cells) {
            return None;
        }

        let name = cells.first().filter(|name| !name.is_empty())?;
        return Some(match cells.len() {
            1 => RecipeIngredient::new(name.as_str(), "", ""),
            2 => {
                let (quantity, unit) = split_quantity(&cells[1]);
                RecipeIngredient::new(name.as_str(), quantity, unit)
            }
            _ => RecipeIngredient::new(name.as_str(), cells[1].as_str(), cells[2].as_str()),
        });
    }

    let name = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('•'))?;
    let name = strip_bold(name);

    name.chars()
        .any(char::is_alphanumeric)
        .then(|| RecipeIngredient::new(name, "", ""))
}

/// Parse a recipe written in the assistant's markdown layout.
///
/// Returns `None` unless the title, ingredients and instructions markers are
/// all present. Missing optional fields take their defaults.
pub fn parse_recipe_markdown(text: &str) -> Option<RecipeDraft> {
    let name = NAME_REGEX
        .captures(text)
        .map(|c| strip_bold(&c[1]))
        .filter(|name| !name.is_empty())?;
    let ingredients_marker = INGREDIENTS_MARKER.find(text)?;
    let instructions_marker = INSTRUCTIONS_MARKER.find(text)?;

    let ingredients = section_lines(text, ingredients_marker.end())
        .filter_map(parse_ingredient_line)
        .collect();

    let instructions = section_lines(text, instructions_marker.end())
        .map(|line| STEP_PREFIX.replace(line, "").trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();

    let servings = field(&SERVINGS_FIELD, text)
        .and_then(|value| INTEGER_REGEX.find(value))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|servings| *servings > 0)
        .unwrap_or(DEFAULT_SERVINGS);

    Some(RecipeDraft {
        name,
        description: field(&DESCRIPTION_FIELD, text)
            .map(strip_bold)
            .unwrap_or_default(),
        ingredients,
        instructions,
        servings,
        prep_time: field(&PREP_TIME_FIELD, text).map_or(0, parse_minutes),
        cook_time: field(&COOK_TIME_FIELD, text).map_or(0, parse_minutes),
        difficulty: field(&DIFFICULTY_FIELD, text).map_or(Difficulty::default(), parse_difficulty),
        category: field(&CATEGORY_FIELD, text)
            .map(strip_bold)
            .filter(|category| !category.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        image_url: None,
        is_public: true,
    })
}

fn parse_decimal(value: &str) -> Option<f64> {
    DECIMAL_REGEX
        .find(value)
        .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .flat_map(|part| part.split(" et "))
        .map(|item| item.trim().trim_end_matches('.').trim().to_string())
        .filter(|item| !item.is_empty() && item != "-")
        .collect()
}

/// Parse the two-column nutrition table of an analysis answer.
///
/// Returns `None` when no calorie row carries a number.
pub fn parse_nutrition_table(text: &str) -> Option<NutritionalAnalysis> {
    let mut analysis = NutritionalAnalysis::default();
    let mut has_calories = false;

    for line in text.lines().filter(|line| line.trim().starts_with('|')) {
        let cells = table_cells(line);
        if cells.len() < 2 || is_separator_row(&cells) {
            continue;
        }

        let label = cells[0].to_lowercase();
        let value = cells[1].as_str();

        if label.starts_with("calories") {
            if let Some(calories) = parse_decimal(value) {
                analysis.calories = calories;
                has_calories = true;
            }
        } else if label.starts_with("protéines") || label.starts_with("proteines") {
            analysis.proteins = parse_decimal(value).unwrap_or_default();
        } else if label.starts_with("glucides") {
            analysis.carbs = parse_decimal(value).unwrap_or_default();
        } else if label.starts_with("lipides") {
            analysis.fats = parse_decimal(value).unwrap_or_default();
        } else if label.starts_with("vitamines") {
            analysis.vitamins = parse_list(value);
        } else if label.starts_with("minéraux") || label.starts_with("mineraux") {
            analysis.minerals = parse_list(value);
        }
    }

    has_calories.then_some(analysis)
}
