use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Grams of protein and carbs are worth 4 kcal each, fat 9 kcal.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// The four tracked nutrient quantities. Depending on context this is either
/// a density (per 100 g/ml or per discrete unit) or an absolute intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        carbs: 0.0,
    };

    pub fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    /// Macros with calories derived from the three gram values.
    pub fn from_grams(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories: derive_calories(protein, fat, carbs),
            protein,
            fat,
            carbs,
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }

    pub fn add(&mut self, other: &Macros) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.fat += other.fat;
        self.carbs += other.carbs;
    }
}

/// `4p + 4c + 9f`. Custom foods never carry a hand-entered calorie figure.
pub fn derive_calories(protein: f64, fat: f64, carbs: f64) -> f64 {
    protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fat * KCAL_PER_G_FAT
}

/// Measurement unit of a quantity. Weight units (`g`/`ml`) pair with a
/// per-100 density; discrete units pair with a per-1-unit density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    G,
    Ml,
    Serving,
    Piece,
    Pkg,
}

impl MeasureUnit {
    pub fn is_weight(&self) -> bool {
        matches!(self, MeasureUnit::G | MeasureUnit::Ml)
    }

    /// Rough gram-equivalent of one unit, used to store a total weight on
    /// diary entries. Users can override it per entry.
    pub fn default_unit_weight_g(&self) -> f64 {
        match self {
            MeasureUnit::G | MeasureUnit::Ml => 1.0,
            MeasureUnit::Serving => 100.0,
            MeasureUnit::Piece => 50.0,
            MeasureUnit::Pkg => 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureUnit::G => "g",
            MeasureUnit::Ml => "ml",
            MeasureUnit::Serving => "serving",
            MeasureUnit::Piece => "piece",
            MeasureUnit::Pkg => "pkg",
        }
    }
}

impl FromStr for MeasureUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(MeasureUnit::G),
            "ml" => Ok(MeasureUnit::Ml),
            "serving" => Ok(MeasureUnit::Serving),
            "piece" => Ok(MeasureUnit::Piece),
            "pkg" => Ok(MeasureUnit::Pkg),
            _ => Err(()),
        }
    }
}

/// Scale factor between a density and a quantity expressed in `unit`.
/// Weight densities are per 100 g/ml; discrete densities are per single unit.
pub fn scale_factor(unit: MeasureUnit, quantity: f64) -> f64 {
    if unit.is_weight() {
        quantity / 100.0
    } else {
        quantity
    }
}

/// Intake recorded for eating `quantity` of something with the given density.
pub fn intake_for(density: &Macros, unit: MeasureUnit, quantity: f64) -> Macros {
    density.scaled(scale_factor(unit, quantity))
}

/// Sum contributions of (per-100g density, amount in grams) pairs.
/// Returns the absolute total and the summed weight.
pub fn aggregate_contributions<'a, I>(items: I) -> (Macros, f64)
where
    I: IntoIterator<Item = (&'a Macros, f64)>,
{
    let mut total = Macros::ZERO;
    let mut total_weight_g = 0.0;

    for (per_100g, amount_g) in items {
        total_weight_g += amount_g;
        total.add(&per_100g.scaled(amount_g / 100.0));
    }

    (total, total_weight_g)
}

/// Normalize an absolute total back to a per-100g density, so a whole recipe
/// can be logged like any other weighed food. Zero weight yields all zeros.
pub fn density_per_100g(total: &Macros, total_weight_g: f64) -> Macros {
    if total_weight_g <= 0.0 {
        return Macros::ZERO;
    }
    total.scaled(100.0 / total_weight_g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_scales_per_100() {
        let density = Macros::new(52.0, 0.3, 0.2, 14.0);
        let intake = intake_for(&density, MeasureUnit::G, 150.0);
        assert_eq!(intake.calories, 52.0 * 1.5);
        assert_eq!(intake.carbs, 14.0 * 1.5);
    }

    #[test]
    fn test_discrete_unit_scales_per_unit() {
        let density = Macros::new(200.0, 8.0, 6.0, 30.0);
        let intake = intake_for(&density, MeasureUnit::Serving, 2.0);
        assert_eq!(intake.calories, 400.0);
        assert_eq!(intake.protein, 16.0);
    }

    #[test]
    fn test_derived_calories() {
        assert_eq!(derive_calories(10.0, 5.0, 20.0), 10.0 * 4.0 + 20.0 * 4.0 + 5.0 * 9.0);
        let m = Macros::from_grams(0.0, 0.0, 0.0);
        assert_eq!(m.calories, 0.0);
    }

    #[test]
    fn test_aggregation_normalizes_to_100g() {
        // 200 g of a 100 kcal/100g ingredient + 100 g of a 400 kcal/100g one
        let a = Macros::new(100.0, 10.0, 0.0, 15.0);
        let b = Macros::new(400.0, 0.0, 20.0, 40.0);
        let (total, weight) = aggregate_contributions([(&a, 200.0), (&b, 100.0)]);
        assert_eq!(weight, 300.0);
        assert_eq!(total.calories, 600.0);

        let density = density_per_100g(&total, weight);
        assert_eq!(density.calories, 200.0);
        assert!((density.protein - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_recipe_has_zero_density() {
        let (total, weight) = aggregate_contributions(std::iter::empty::<(&Macros, f64)>());
        assert_eq!(weight, 0.0);
        assert_eq!(density_per_100g(&total, weight), Macros::ZERO);
    }

    #[test]
    fn test_unit_round_trip() {
        for unit in [
            MeasureUnit::G,
            MeasureUnit::Ml,
            MeasureUnit::Serving,
            MeasureUnit::Piece,
            MeasureUnit::Pkg,
        ] {
            assert_eq!(unit.as_str().parse::<MeasureUnit>(), Ok(unit));
        }
        assert!("bowl".parse::<MeasureUnit>().is_err());
    }
}
