use std::fmt::Display;

use owo_colors::OwoColorize;
use tui_gallery::Card;

pub fn divider() {
	eprintln!("{}", "─".repeat(56).blue());
}

pub fn note(text: &str) {
	eprintln!("{}", text.dimmed());
}

pub fn label_value(label: &str, value: impl Display) {
	eprintln!("{} {}", format!("{}:", label).bold(), value);
}

pub fn warn(message: &str) {
	eprintln!("{}", message.yellow().bold());
}

/// One facet category and its options, on stdout.
pub fn facet_block(label: &str, values: &[&str]) {
	println!("{}", label.bold().cyan());
	if values.is_empty() {
		println!("  {}", "(none)".dimmed());
	}
	for value in values {
		println!("  {} {}", "•".green(), value);
	}
}

/// A card as a short block on stdout: title, description, footer, link.
pub fn card(card: &Card) {
	println!("{}", card.title.bold());
	if !card.description.is_empty() {
		println!("  {}", card.description);
	}
	let footer: Vec<&str> = [card.footer_start.as_str(), card.footer_end.as_str()]
		.into_iter()
		.filter(|part| !part.is_empty())
		.collect();
	if !footer.is_empty() {
		println!("  {}", footer.join(" · ").dimmed());
	}
	if !card.link.is_empty() {
		println!("  {}", card.link.blue().underline());
	}
}
