//! Unit tables for volume and weight
//!
//! Every magnitude is an exact integer count of the kind's base unit.
//! A milliliter and a milligram are each 8 base units, which keeps an
//! eighth teaspoon (5/8 ml) and a tenth of an ounce integral.

use crate::{Kind, System, UnitDef, OutputPolicy};

/// Volume magnitudes in base units
pub mod volume {
    pub const MILLILITER: i64 = 8;
    pub const DECILITER: i64 = MILLILITER * 100;
    pub const LITER: i64 = MILLILITER * 1000;

    pub const EIGHTH_TEASPOON: i64 = MILLILITER * 5 / 8;
    pub const QUARTER_TEASPOON: i64 = EIGHTH_TEASPOON * 2;
    pub const HALF_TEASPOON: i64 = QUARTER_TEASPOON * 2;
    pub const THREE_QUARTER_TEASPOON: i64 = QUARTER_TEASPOON * 3;
    pub const TEASPOON: i64 = HALF_TEASPOON * 2;
    pub const TABLESPOON: i64 = TEASPOON * 3;
    pub const FLUID_OUNCE: i64 = TABLESPOON * 2;
    pub const QUARTER_CUP: i64 = FLUID_OUNCE * 2;
    pub const THIRD_CUP: i64 = CUP / 3;
    pub const HALF_CUP: i64 = FLUID_OUNCE * 4;
    pub const TWO_THIRDS_CUP: i64 = THIRD_CUP * 2;
    pub const THREE_QUARTER_CUP: i64 = FLUID_OUNCE * 6;
    pub const CUP: i64 = FLUID_OUNCE * 8;
    pub const PINT: i64 = CUP * 2;
    pub const QUART: i64 = CUP * 4;
    pub const GALLON: i64 = QUART * 4;
}

/// Weight magnitudes in base units
pub mod weight {
    pub const MILLIGRAM: i64 = 8;
    pub const GRAM: i64 = MILLIGRAM * 1000;
    pub const KILOGRAM: i64 = GRAM * 1000;

    /// 28.35 g, the usual kitchen-scale ounce
    pub const OUNCE: i64 = MILLIGRAM * 28_350;
    pub const POUND: i64 = OUNCE * 16;
}

const fn vol(
    name: &'static str,
    system: System,
    base: i64,
    spellings: &'static [&'static str],
    label: &'static str,
    decimal_places: u32,
    output: OutputPolicy,
) -> UnitDef {
    UnitDef { name, kind: Kind::Volume, system, base, spellings, label, decimal_places, output }
}

const fn wt(
    name: &'static str,
    system: System,
    base: i64,
    spellings: &'static [&'static str],
    label: &'static str,
    decimal_places: u32,
    output: OutputPolicy,
) -> UnitDef {
    UnitDef { name, kind: Kind::Weight, system, base, spellings, label, decimal_places, output }
}

pub static VOLUME_UNITS: [UnitDef; 19] = [
    // Metric
    vol("milliliter", System::Metric, volume::MILLILITER,
        &["ml", "milliliter", "milliliters", "millilitre", "millilitres", "mL"],
        "ml", 1, OutputPolicy::MULTIPLES.with_fractions()),
    vol("deciliter", System::Metric, volume::DECILITER,
        &["dl", "deciliter", "deciliters", "decilitre", "decilitres", "dL"],
        "", 0, OutputPolicy::NEVER),
    vol("liter", System::Metric, volume::LITER,
        &["l", "liter", "liters", "litre", "litres", "L"],
        "l", 3, OutputPolicy::MULTIPLES),

    // Imperial, output-only fractions of a teaspoon
    vol("eighth teaspoon", System::Imperial, volume::EIGHTH_TEASPOON, &[], "1/8 tsp", 0, OutputPolicy::SINGLE),
    vol("quarter teaspoon", System::Imperial, volume::QUARTER_TEASPOON, &[], "1/4 tsp", 0, OutputPolicy::SINGLE),
    vol("half teaspoon", System::Imperial, volume::HALF_TEASPOON, &[], "1/2 tsp", 0, OutputPolicy::SINGLE),
    vol("three-quarter teaspoon", System::Imperial, volume::THREE_QUARTER_TEASPOON, &[], "3/4 tsp", 0, OutputPolicy::SINGLE),

    vol("teaspoon", System::Imperial, volume::TEASPOON,
        &["t", "teaspoon", "teaspoons", "tsp", "tsp."],
        "tsp", 0, OutputPolicy::MULTIPLES),
    vol("tablespoon", System::Imperial, volume::TABLESPOON,
        &["T", "tablespoon", "tablespoons", "tbl", "tbl.", "tbs.", "tbsp."],
        "T", 0, OutputPolicy::MULTIPLES),
    vol("fluid ounce", System::Imperial, volume::FLUID_OUNCE,
        &["fluid ounce", "fluid ounces", "fl oz"],
        "", 0, OutputPolicy::NEVER),

    // Imperial, output-only fractions of a cup
    vol("quarter cup", System::Imperial, volume::QUARTER_CUP, &[], "1/4 c", 0, OutputPolicy::SINGLE),
    vol("third cup", System::Imperial, volume::THIRD_CUP, &[], "1/3 c", 0, OutputPolicy::SINGLE),
    vol("half cup", System::Imperial, volume::HALF_CUP, &[], "1/2 c", 0, OutputPolicy::SINGLE),
    vol("two-thirds cup", System::Imperial, volume::TWO_THIRDS_CUP, &[], "2/3 c", 0, OutputPolicy::SINGLE),
    vol("three-quarter cup", System::Imperial, volume::THREE_QUARTER_CUP, &[], "3/4 c", 0, OutputPolicy::SINGLE),

    vol("cup", System::Imperial, volume::CUP,
        &["c", "cup", "cups"],
        "c", 0, OutputPolicy::MULTIPLES),
    vol("pint", System::Imperial, volume::PINT,
        &["p", "pt", "pint", "pints", "fl pt"],
        "", 0, OutputPolicy::NEVER),
    vol("quart", System::Imperial, volume::QUART,
        &["q", "quart", "quarts", "qt", "fl qt"],
        "qt", 0, OutputPolicy::MULTIPLES),
    // "g" belongs to gram
    vol("gallon", System::Imperial, volume::GALLON,
        &["gal", "gallon", "gallons"],
        "gal", 0, OutputPolicy::MULTIPLES),
];

pub static WEIGHT_UNITS: [UnitDef; 5] = [
    wt("milligram", System::Metric, weight::MILLIGRAM,
        &["mg", "milligram", "milligrams", "milligramme", "milligrammes"],
        "mg", 3, OutputPolicy::MULTIPLES.with_fractions()),
    wt("gram", System::Metric, weight::GRAM,
        &["g", "gram", "grams", "gramme", "grammes"],
        "g", 1, OutputPolicy::MULTIPLES),
    wt("kilogram", System::Metric, weight::KILOGRAM,
        &["kg", "kilogram", "kilograms", "kilogramme", "kilogrammes"],
        "kg", 3, OutputPolicy::MULTIPLES),

    wt("ounce", System::Imperial, weight::OUNCE,
        &["oz", "ounce", "ounces"],
        "oz", 1, OutputPolicy::MULTIPLES.with_fractions()),
    wt("pound", System::Imperial, weight::POUND,
        &["lb", "#", "pound", "pounds"],
        "lb", 0, OutputPolicy::MULTIPLES),
];

/// All shipped tables, in registration order
pub static STANDARD_TABLES: [&[UnitDef]; 2] = [&VOLUME_UNITS, &WEIGHT_UNITS];
