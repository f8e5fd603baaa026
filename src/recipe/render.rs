use super::Recipe;
use itertools::Itertools;

impl Recipe {
    /// Renders the recipe as plain text: title, description, ingredient lines and numbered steps.
    ///
    /// Steps list the names of the ingredients they use. A reference to an ingredient that is
    /// no longer part of the recipe shows its raw id.
    pub fn render(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        if !self.description.is_empty() {
            out.push_str(&format!("\n{}\n", self.description));
        }

        if !self.ingredients.is_empty() {
            out.push_str("\nIngredients\n");
            for ingredient in &self.ingredients {
                out.push_str(&format!("- {}\n", ingredient.render(self)));
            }
        }

        if !self.steps.is_empty() {
            out.push_str("\nSteps\n");
            for (n, step) in self.steps.iter().enumerate() {
                out.push_str(&format!("{}. {}", n + 1, step.description));
                if !step.ingredient_ids.is_empty() {
                    let uses = step
                        .ingredient_ids
                        .iter()
                        .map(|id| self.ingredient(id).map_or(id.as_str(), |i| i.name.as_str()))
                        .join(", ");
                    out.push_str(&format!(" ({})", uses));
                }
                out.push('\n');
            }
        }

        out
    }
}
