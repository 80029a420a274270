use clap::{error::ErrorKind as ClapErrorKind, Parser};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use gedxml::{
    converter::{ConvertOptions, Converter},
    enums::AttributeStyle,
    error::{ArgumentError, ErrorKind, GedcomError, Result},
    formatter::FormatConfig,
    parser::ParserConfig,
};

const USAGE: &str = "Syntax: gedxml <inputFile.ged> <outputFile.xml>";
const MSG_PARSING: &str = "Parsing GEDCOM file...";
const MSG_WRITING_OUTPUT: &str = "Generating XML file...";
const MSG_CONVERT_COMPLETE: &str = "Conversion successful...";

/// Flags that consume the following argument as their value
const VALUE_FLAGS: [&str; 4] = ["--indent", "--attribute-style", "--max-depth", "--max-size"];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input GEDCOM file path
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output XML file path
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Indentation unit written once per depth level (defaults to a tab)
    #[arg(long)]
    indent: Option<String>,

    /// Attribute rendering style
    #[arg(long, value_enum, default_value_t = AttributeStyle::Literal)]
    attribute_style: AttributeStyle,

    /// Escape XML special characters in values
    #[arg(long)]
    escape: bool,

    /// Reject input nesting deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

    /// Reject input larger than this many bytes
    #[arg(long)]
    max_size: Option<usize>,
}

impl Args {
    /// Limits apply only when a limit flag is given
    fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::unbounded();
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if let Some(max_size) = self.max_size {
            config = config.with_max_size(max_size);
        }
        config
    }

    fn format_config(&self) -> FormatConfig {
        let defaults = FormatConfig::default();
        FormatConfig {
            indent: self.indent.clone().unwrap_or(defaults.indent),
            attribute_style: self.attribute_style,
            escape: self.escape,
        }
    }

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            parser: self.parser_config(),
            format: self.format_config(),
        }
    }
}

/// Counts positional arguments, skipping flags and the values they take
fn count_positionals<I>(args: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut found = 0;
    while let Some(arg) = args.next() {
        if arg == "--" {
            found += args.by_ref().count();
            break;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            args.next();
        } else if arg.len() < 2 || !arg.starts_with('-') {
            found += 1;
        }
    }
    found
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            kind => {
                println!("{}", USAGE);
                let found = count_positionals(std::env::args().skip(1));
                let argument_error = match kind {
                    ClapErrorKind::MissingRequiredArgument | ClapErrorKind::UnknownArgument
                        if found != 2 =>
                    {
                        ArgumentError::WrongCount { found }
                    }
                    _ => ArgumentError::Invalid(format!("{:?}", kind)),
                };
                let err = GedcomError::new(ErrorKind::Argument(argument_error))
                    .with_context(e.to_string());
                error!("{}", err);
                std::process::exit(err.exit_code());
            }
        },
    };

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.convert_options();

    println!("{}{}", MSG_PARSING, args.input);
    let root = Converter::read_tree(&args.input, &options.parser)?;
    info!("Built {} nodes", root.node_count());

    println!("{}{}", MSG_WRITING_OUTPUT, args.output);
    Converter::write_tree(&root, &args.output, &options.format)?;

    println!("{}", MSG_CONVERT_COMPLETE);
    Ok(())
}
