use clap::ValueEnum;

/// How regular attributes are written on an opening tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AttributeStyle {
    /// `"name=value"`, the whole pair inside one set of quotes
    #[default]
    Literal,
    /// `name="value"`
    Quoted,
}
