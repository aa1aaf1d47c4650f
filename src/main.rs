use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use facet_gallery::commands::{browse, facets, list};
use facet_gallery::config::Overrides;
use facet_gallery::logging::{self, Verbosity};

#[derive(Parser, Debug)]
#[command(
	name = "facet-gallery",
	about = "Browse a catalog of cards with facet filters and free-text search",
	long_about = "facet-gallery loads a JSON catalog of learning resources and lets you \
                  narrow it down with one dropdown per facet (capabilities, products, \
                  topics, types, levels, accounts) plus a substring search over titles \
                  and descriptions. Initial filters can be seeded from a URL query string.",
	version
)]
struct Cli {
	/// Directory that contains the JSON configuration (defaults to current dir).
	#[arg(long, global = true)]
	config_dir: Option<PathBuf>,
	/// Log debug output to stderr.
	#[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
	verbose: bool,
	/// Only log errors.
	#[arg(long, short = 'q', global = true)]
	quiet: bool,
	#[command(subcommand)]
	command: Command,
}

#[derive(Args, Debug)]
struct Source {
	/// Catalog file path or http(s) URL; overrides the configured catalog.
	#[arg(long)]
	catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Open the interactive gallery.
	///
	/// Prints the link of the card activated with Enter; prints nothing when
	/// the gallery is closed with Esc.
	Browse {
		#[command(flatten)]
		source: Source,
		/// Query string seeding filters and search, e.g. "?level=Beginner&search=map".
		#[arg(long)]
		query: Option<String>,
		/// Color theme (slate, solarized, light).
		#[arg(long)]
		theme: Option<String>,
	},
	/// Print the cards visible under the seeded filters and search.
	List {
		#[command(flatten)]
		source: Source,
		/// Query string seeding filters and search; a full URL is accepted too.
		#[arg(long)]
		query: Option<String>,
		/// Emit a JSON array instead of styled text.
		#[arg(long)]
		json: bool,
	},
	/// Print every facet category and its option values.
	Facets {
		#[command(flatten)]
		source: Source,
		/// Emit a JSON object keyed by category.
		#[arg(long)]
		json: bool,
	},
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

	let config_dir = cli.config_dir.as_deref();
	match cli.command {
		Command::Browse {
			source,
			query,
			theme,
		} => {
			let overrides = Overrides {
				catalog: source.catalog,
				theme,
				..Overrides::default()
			};
			browse::run(config_dir, &overrides, query.as_deref())
		}
		Command::List {
			source,
			query,
			json,
		} => {
			let overrides = Overrides {
				catalog: source.catalog,
				..Overrides::default()
			};
			list::run(config_dir, &overrides, query.as_deref(), json)
		}
		Command::Facets { source, json } => {
			let overrides = Overrides {
				catalog: source.catalog,
				..Overrides::default()
			};
			facets::run(config_dir, &overrides, json)
		}
	}
}
