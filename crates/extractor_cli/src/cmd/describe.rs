use extractor::DescribeOptions;

use crate::cmd::util::navigate;
use crate::decode::load_document;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	/// Dotted path to the node, e.g. `items.0`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	/// Characters kept from strings and keys before truncating.
	#[arg(long = "max-string-chars", default_value_t = DescribeOptions::default().max_string_chars)]
	pub max_string_chars: usize,
}

/// Print the diagnostic description of one node.
pub fn run(args: Args) -> Result<()> {
	let document = load_document(&args.file)?;
	let accessor = navigate(&document, args.path_expr.as_deref())?;

	let options = DescribeOptions {
		max_string_chars: args.max_string_chars,
	};
	println!("{}", accessor.describe_with(options));
	Ok(())
}
