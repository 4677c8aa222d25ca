//! Tool implementations
//!
//! Each tool takes its JSON arguments and returns a JSON result with a
//! human-readable `content` block plus structured fields. Failures are
//! `LarderError`s; the server turns them into `isError` results.

use serde_json::{json, Value as JsonValue};
use larder_core::{LarderError, Number};
use larder_kitchen::{Recipe, ShoppingList};
use larder_units::{Kind, Quantity, System, UnitDef, UnitRegistry};

use crate::store::RecipeStore;

pub type ToolResult = Result<JsonValue, LarderError>;

/// What every tool call can see
pub struct ToolContext<'a> {
    pub registry: &'a UnitRegistry,
    pub store: &'a RecipeStore,
    pub system: System,
}

/// Names of all tools, in the order they are listed
pub const TOOL_NAMES: [&str; 7] = [
    "parse_measurement",
    "render_measurement",
    "add_measurements",
    "scale_measurement",
    "shopping_list",
    "scale_recipe",
    "list_units",
];

/// Run a tool by name; None if no such tool exists
pub fn call(ctx: &ToolContext<'_>, name: &str, args: &JsonValue) -> Option<ToolResult> {
    let result = match name {
        "parse_measurement" => parse_measurement(ctx, args),
        "render_measurement" => render_measurement(ctx, args),
        "add_measurements" => add_measurements(ctx, args),
        "scale_measurement" => scale_measurement(ctx, args),
        "shopping_list" => shopping_list(ctx, args),
        "scale_recipe" => scale_recipe(ctx, args),
        "list_units" => list_units(ctx, args),
        _ => return None,
    };
    Some(result)
}

// ========== Argument helpers ==========

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, LarderError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| LarderError::invalid_argument(format!("Missing string argument '{}'", key)))
}

fn required_str_list(args: &JsonValue, key: &str) -> Result<Vec<String>, LarderError> {
    let invalid = || LarderError::invalid_argument(format!("Argument '{}' must be an array of strings", key));
    args.get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

fn system_arg(ctx: &ToolContext<'_>, args: &JsonValue) -> Result<System, LarderError> {
    match args.get("system").and_then(|v| v.as_str()) {
        Some(s) => s.parse::<System>().map_err(LarderError::invalid_argument),
        None => Ok(ctx.system),
    }
}

/// Rational factor given as "3/2", "2.5" or a JSON integer
fn factor_arg(args: &JsonValue) -> Result<Number, LarderError> {
    let factor = match args.get("factor") {
        Some(JsonValue::String(s)) => Number::from_str(s.trim())?,
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => Number::from_i64(i),
            None => Number::from_str(&n.to_string())?,
        },
        _ => return Err(LarderError::invalid_argument("Missing argument 'factor'")),
    };

    if factor.is_negative() || factor.is_zero() {
        return Err(LarderError::invalid_argument(format!("factor must be positive, got {}", factor)));
    }
    Ok(factor)
}

fn text_result(text: String, data: JsonValue) -> JsonValue {
    let mut result = json!({ "content": [{ "type": "text", "text": text }] });
    if let (Some(obj), JsonValue::Object(fields)) = (result.as_object_mut(), data) {
        obj.extend(fields);
    }
    result
}

// ========== Measurements ==========

fn parse_measurement(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let text = required_str(args, "text")?;
    let quantity = ctx.registry.parse(text)?;

    let imperial = ctx.registry.render(&quantity, System::Imperial).ok();
    let metric = ctx.registry.render(&quantity, System::Metric).ok();

    let summary = format!(
        "{}: {} ({} base units)\nimperial: {}\nmetric: {}",
        text,
        quantity.kind(),
        quantity.magnitude(),
        imperial.as_deref().unwrap_or("-"),
        metric.as_deref().unwrap_or("-"),
    );

    Ok(text_result(summary, json!({
        "kind": quantity.kind(),
        "magnitude": quantity.magnitude(),
        "imperial": imperial,
        "metric": metric,
    })))
}

fn rendered(ctx: &ToolContext<'_>, quantity: &Quantity, system: System) -> ToolResult {
    let text = ctx.registry.render(quantity, system)?;
    Ok(text_result(text.clone(), json!({
        "kind": quantity.kind(),
        "magnitude": quantity.magnitude(),
        "system": system,
        "rendered": text,
    })))
}

fn render_measurement(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let quantity = ctx.registry.parse(required_str(args, "text")?)?;
    rendered(ctx, &quantity, system_arg(ctx, args)?)
}

fn add_measurements(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let system = system_arg(ctx, args)?;
    let quantities = required_str_list(args, "measurements")?
        .iter()
        .map(|text| ctx.registry.parse(text))
        .collect::<Result<Vec<_>, _>>()?;

    let total = Quantity::sum(&quantities)?
        .ok_or_else(|| LarderError::invalid_argument("Nothing to add: 'measurements' is empty"))?;
    rendered(ctx, &total, system)
}

fn scale_measurement(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let system = system_arg(ctx, args)?;
    let quantity = ctx.registry.parse(required_str(args, "text")?)?;
    let factor = factor_arg(args)?;
    rendered(ctx, &quantity.scale(&factor)?, system)
}

// ========== Recipes ==========

fn shopping_list(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let system = system_arg(ctx, args)?;
    let names = required_str_list(args, "recipes")?;
    if names.is_empty() {
        return Err(LarderError::invalid_argument("Argument 'recipes' is empty"));
    }

    let recipes = names
        .iter()
        .map(|name| ctx.store.load(name, ctx.registry))
        .collect::<Result<Vec<_>, _>>()?;

    let list = ShoppingList::from_recipes(&recipes)?;
    let rendered = list.render_lines(ctx.registry, system);

    Ok(text_result(rendered.lines.join("\n"), json!({
        "recipes": names,
        "system": system,
        "items": rendered.lines,
        "warnings": rendered.warnings,
    })))
}

fn scale_recipe(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let system = system_arg(ctx, args)?;
    let name = required_str(args, "name")?;
    let recipe = ctx.store.load(name, ctx.registry)?;

    let scaled = match args.get("servings") {
        Some(servings) => {
            let servings = servings
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| LarderError::invalid_argument("servings must be a whole number"))?;
            recipe.scale_servings(servings)
        }
        None if args.get("factor").is_some() => recipe.scale(&factor_arg(args)?),
        None => {
            return Err(LarderError::invalid_argument("Give either 'factor' or 'servings'"));
        }
    }
    .map_err(|e| LarderError::from(e).in_recipe(name))?;

    let (text, warnings) = format_recipe(ctx.registry, &scaled, system);
    Ok(text_result(text, json!({
        "name": name,
        "title": scaled.title,
        "servings": scaled.servings,
        "system": system,
        "warnings": warnings,
    })))
}

/// Markdown view of a recipe with every measurement rendered, plus the
/// warnings for measurements shown in the other system or left out
fn format_recipe(registry: &UnitRegistry, recipe: &Recipe, system: System) -> (String, Vec<LarderError>) {
    let mut warnings = Vec::new();
    let mut out = format!("# {}\n", recipe.title);
    if let Some(servings) = recipe.servings {
        out.push_str(&format!("\nServes {}\n", servings));
    }

    for section in &recipe.sections {
        out.push_str(&format!("\n## {}\n\n", section.name));
        for ingredient in &section.ingredients {
            let rendered = ingredient.render(registry, system);
            out.push_str(&format!("- {}: {}\n", ingredient.item, rendered.text));
            warnings.extend(
                rendered
                    .warnings
                    .into_iter()
                    .map(|w| w.in_recipe(&recipe.title).in_section(&section.name)),
            );
        }
        if !section.steps.is_empty() {
            out.push('\n');
            for (i, step) in section.steps.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, step));
            }
        }
    }

    (out, warnings)
}

// ========== Units ==========

fn unit_json(unit: &UnitDef) -> JsonValue {
    let label = if unit.label.is_empty() { None } else { Some(unit.label) };
    json!({
        "name": unit.name,
        "kind": unit.kind,
        "system": unit.system,
        "spellings": unit.spellings,
        "label": label,
        "input": unit.is_input(),
        "output": unit.is_output(),
    })
}

fn list_units(ctx: &ToolContext<'_>, args: &JsonValue) -> ToolResult {
    let kind = match args.get("kind").and_then(|v| v.as_str()) {
        Some(k) => Some(k.parse::<Kind>().map_err(LarderError::invalid_argument)?),
        None => None,
    };

    let units: Vec<&UnitDef> = ctx
        .registry
        .units()
        .iter()
        .copied()
        .filter(|u| kind.map_or(true, |k| u.kind == k))
        .collect();

    let lines: Vec<String> = units
        .iter()
        .filter(|u| u.is_input())
        .map(|u| format!("{} ({}, {}): {}", u.name, u.kind, u.system, u.spellings.join(", ")))
        .collect();

    Ok(text_result(lines.join("\n"), json!({
        "units": units.iter().map(|u| unit_json(u)).collect::<Vec<_>>(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use larder_core::codes;

    fn store() -> RecipeStore {
        RecipeStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../larder-kitchen/testdata"))
    }

    fn run(name: &str, args: JsonValue) -> ToolResult {
        let store = store();
        let ctx = ToolContext {
            registry: UnitRegistry::standard(),
            store: &store,
            system: System::Imperial,
        };
        call(&ctx, name, &args).unwrap()
    }

    fn text(result: &JsonValue) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn test_unknown_tool() {
        let store = store();
        let ctx = ToolContext { registry: UnitRegistry::standard(), store: &store, system: System::Metric };
        assert!(call(&ctx, "bake", &json!({})).is_none());
    }

    #[test]
    fn test_parse_measurement() {
        let result = run("parse_measurement", json!({"text": "1 1/2 tsp"})).unwrap();
        assert_eq!(result["kind"], "volume");
        assert_eq!(result["magnitude"], 60);
        assert_eq!(result["imperial"], "1 tsp, 1/2 tsp");
        assert_eq!(result["metric"], "7.5 ml");
    }

    #[test]
    fn test_parse_measurement_errors_are_structured() {
        let err = run("parse_measurement", json!({"text": "3 zorp"})).unwrap_err();
        assert_eq!(err.code, codes::UNRECOGNIZED_UNIT);

        let err = run("parse_measurement", json!({})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_render_measurement() {
        let result = run("render_measurement", json!({"text": "1 pint"})).unwrap();
        assert_eq!(text(&result), "2 c");

        let result = run("render_measurement", json!({"text": "1 pint", "system": "metric"})).unwrap();
        assert_eq!(result["rendered"], "480 ml");

        let err = run("render_measurement", json!({"text": "1 pint", "system": "cubits"})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_add_measurements() {
        let result = run("add_measurements", json!({"measurements": ["1 cup", "1 tsp"]})).unwrap();
        assert_eq!(text(&result), "1 c, 1 tsp");

        let err = run("add_measurements", json!({"measurements": ["1 cup", "2 oz"]})).unwrap_err();
        assert_eq!(err.code, codes::KIND_MISMATCH);

        let err = run("add_measurements", json!({"measurements": []})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_scale_measurement() {
        let result = run("scale_measurement", json!({"text": "1 c", "factor": 3})).unwrap();
        assert_eq!(text(&result), "3 c");

        let result = run("scale_measurement", json!({"text": "1 c", "factor": "3/4"})).unwrap();
        assert_eq!(text(&result), "3/4 c");

        let err = run("scale_measurement", json!({"text": "1/8 tsp", "factor": "1/7"})).unwrap_err();
        assert_eq!(err.code, codes::PRECISION_LOSS);

        let err = run("scale_measurement", json!({"text": "1 c", "factor": "0"})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);

        let err = run("scale_measurement", json!({"text": "1 c", "factor": "lots"})).unwrap_err();
        assert_eq!(err.code, codes::NON_NUMERIC);
    }

    #[test]
    fn test_shopping_list() {
        let result = run("shopping_list", json!({"recipes": ["whole-wheat-rustic-italian-bread"]})).unwrap();
        assert_eq!(result["items"][0], "bread flour: 1 lb, 4.5 oz or 3 c, 3/4 c");
        assert_eq!(result["items"].as_array().unwrap().len(), 5);

        let err = run("shopping_list", json!({"recipes": ["pavlova"]})).unwrap_err();
        assert_eq!(err.code, codes::NOT_FOUND);
    }

    #[test]
    fn test_scale_recipe() {
        let result = run("scale_recipe", json!({"name": "whole-wheat-rustic-italian-bread", "servings": 4})).unwrap();
        assert_eq!(result["servings"], 4);
        let text = text(&result);
        assert!(text.starts_with("# Whole Wheat Rustic Italian Bread\n\nServes 4\n"));
        assert!(text.contains("- table salt: 1 T, 1 tsp\n"));

        assert!(result["warnings"].as_array().unwrap().is_empty());

        let err = run("scale_recipe", json!({"name": "focaccia", "servings": 4})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
        assert_eq!(err.context.unwrap().recipe.as_deref(), Some("focaccia"));

        let err = run("scale_recipe", json!({"name": "focaccia"})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_scale_recipe_warns_instead_of_failing() {
        let result = run("scale_recipe", json!({"name": "whole-wheat-rustic-italian-bread", "servings": 3})).unwrap();
        assert_eq!(result["servings"], 3);
        // 3/8 tsp of yeast in the biga has no imperial spelling
        assert!(text(&result).contains("- instant yeast: 1.9 ml\n"));
        assert!(text(&result).contains("- instant yeast: 1 tsp, 1/2 tsp\n"));

        let warnings = result["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["severity"], "warning");
        assert_eq!(warnings[0]["code"], codes::UNREPRESENTABLE);
        assert_eq!(warnings[0]["context"]["section"], "Biga");
        assert_eq!(warnings[0]["context"]["ingredient"], "instant yeast");
    }

    #[test]
    fn test_shopping_list_warnings() {
        let result = run("shopping_list", json!({"recipes": ["whole-wheat-rustic-italian-bread"], "system": "metric"})).unwrap();
        assert!(result["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_list_units() {
        let result = run("list_units", json!({"kind": "weight"})).unwrap();
        assert_eq!(result["units"].as_array().unwrap().len(), 5);
        assert!(text(&result).contains("pound (weight, imperial): lb, #, pound, pounds"));

        let all = run("list_units", json!({})).unwrap();
        assert_eq!(all["units"].as_array().unwrap().len(), 24);
    }
}
