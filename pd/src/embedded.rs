//! Built-in prompts
//!
//! Used when a prompt document does not customize a category, and as the
//! content of the starter document written by `pd init`.

use tracing::debug;

use crate::category::Category;
use crate::extract::CURRENT_CONFIGURATION;

pub const CORRECTION: &str = "You are an experienced system administrator. Help fix the command that failed.
Rules:
1. Analyze the error message
2. Provide an accurate corrected command
3. Flag dangerous operations";

pub const TRANSLATION: &str = "You are a command-line translation assistant.
Convert the user's request into a shell command.
Rules:
1. Accept requests in any language
2. Produce standard, portable commands
3. Flag dangerous operations";

pub const COMPLETION: &str = "You are an advanced command-line completion engine.
Suggest the most likely completions for the partial command.
Reply in JSON.";

pub const EXPLANATION: &str = "You are a command-line teaching assistant. Explain what the command does and how to use it.

Reply using this layout:
1. Summary: what the command is for
2. Arguments: what each argument does
3. Examples: common ways to use it
4. Caveats: anything to watch out for

Keep it short and practical.";

/// Get the built-in prompt for a category
pub fn get_embedded(category: Category) -> &'static str {
    debug!(%category, "get_embedded: called");
    match category {
        Category::Correction => CORRECTION,
        Category::Translation => TRANSLATION,
        Category::Completion => COMPLETION,
        Category::Explanation => EXPLANATION,
    }
}

fn description(category: Category) -> &'static str {
    match category {
        Category::Correction => "Used when a command fails and a fix is suggested.",
        Category::Translation => "Used to turn a plain request into a shell command.",
        Category::Completion => "Used to complete a partially typed command.",
        Category::Explanation => "Used to explain what a command does.",
    }
}

const DOCUMENT_HEADER: &str = "# Custom Prompts

Edit the block under each section to change the assistant's behavior.
";

/// Render a prompt document holding the built-in prompts
pub fn render_document() -> String {
    debug!("render_document: called");
    let mut doc = String::from(DOCUMENT_HEADER);
    for category in Category::ALL {
        doc.push_str(&format!(
            "\n## {}\n\n{}\n\n{}\n\n```\n{}\n```\n",
            category.heading(),
            description(category),
            CURRENT_CONFIGURATION,
            get_embedded(category),
        ));
    }
    doc
}
