// Colored terminal output for generated hashtags and the category table.

use colored::Colorize;

use crate::dispatch::{Generation, Source};
use crate::tags::categories::TagCategory;

use super::copy_text;

/// Display a generated hashtag list in the terminal.
pub fn display_generation(topic: &str, generation: &Generation) {
    if generation.hashtags.is_empty() {
        println!("No hashtags generated for {topic:?}. Try a different topic.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Hashtags for \"{}\" ({}) ===",
            topic,
            generation.hashtags.len()
        )
        .bold()
    );

    match (generation.source, &generation.notice) {
        (Source::Remote, _) => println!("{}", "Generated using the hashtag API".dimmed()),
        (Source::Local, Some(notice)) => {
            println!(
                "{} {}",
                "API unavailable, used built-in generator:".yellow(),
                notice.dimmed()
            );
        }
        (Source::Local, None) => println!("{}", "Using built-in hashtag generator".dimmed()),
    }
    println!();

    for tag in &generation.hashtags {
        println!("  {}", tag.cyan());
    }

    println!("\n{}", "Copy all:".bold());
    println!("{}", copy_text(&generation.hashtags));
}

/// Display the built-in category table.
pub fn display_categories(categories: &[TagCategory]) {
    for (i, category) in categories.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{:>2}.", i + 1).dimmed(),
            category.name.bold(),
            format!("({} tags)", category.tags.len()).dimmed()
        );
        println!("    {}", category.tags.join(", "));
    }
}
