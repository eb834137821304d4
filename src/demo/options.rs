//! Demonstration options and their command line.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use clap::error::ErrorKind;
use clap::{Arg, Command};
use derive_builder::Builder;

use super::err::DispatchError;

const DISPATCH_USAGE: &str = r#"dispatch [--section NAME]... [--gap N] [--headings]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Every reference has the concrete type of its subject.
    Direct,
    /// Every reference is typed as the base capability.
    Upcast,
    /// Subjects dispatch themselves through base-typed references.
    SelfDispatch,
    Visitor,
    Types,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Direct,
        Section::Upcast,
        Section::SelfDispatch,
        Section::Visitor,
        Section::Types,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Direct => "direct",
            Section::Upcast => "upcast",
            Section::SelfDispatch => "self-dispatch",
            Section::Visitor => "visitor",
            Section::Types => "types",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Direct => "handle(static type)",
            Section::Upcast => "handle(&dyn Subject)",
            Section::SelfDispatch => "dispatch_self_to(handler)",
            Section::Visitor => "place.accept(visitor)",
            Section::Types => "static type vs runtime type",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static::lazy_static! {
    static ref SECTION_NAMES: HashMap<&'static str, Section> = {
        let mut names = HashMap::new();
        for section in Section::ALL {
            names.insert(section.name(), section);
        }
        names.insert("static", Section::Direct);
        names.insert("base", Section::Upcast);
        names.insert("double", Section::SelfDispatch);
        names.insert("double-dispatch", Section::SelfDispatch);
        names.insert("places", Section::Visitor);
        names.insert("probe", Section::Types);
        names
    };
}

impl FromStr for Section {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTION_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| DispatchError::UnknownSection {
                name: s.to_string(),
                expected: Section::ALL.iter().map(|s| s.name()).collect(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct DemoOptions {
    /// Sections to run, in order.
    #[builder(default = Section::ALL.to_vec())]
    pub sections: Vec<Section>,
    /// Blank lines between two sections.
    #[builder(default = 2)]
    pub gap: u32,
    #[builder(default = false)]
    pub headings: bool,
}

impl DemoOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.sections {
            Some(sections) if sections.is_empty() => Err(String::from("no section selected")),
            _ => Ok(()),
        }
    }
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            gap: 2,
            headings: false,
        }
    }
}

fn make_options_parser() -> Command<'static> {
    Command::new("dispatch")
        .no_binary_name(true)
        .override_usage(DISPATCH_USAGE)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints which handler entry point runs for static, upcast and self dispatch.")
        .arg(
            Arg::new("section")
                .long("section")
                .short('s')
                .takes_value(true)
                .multiple_occurrences(true)
                .use_value_delimiter(true)
                .value_parser(clap::value_parser!(String))
                .help("Section to run; repeat or separate with commas to run several.")
                .long_help(
                    "One of direct, upcast, self-dispatch, visitor, types. \
                     Every section runs when none is given.",
                ),
        )
        .arg(
            Arg::new("gap")
                .long("gap")
                .takes_value(true)
                .value_parser(clap::value_parser!(u32))
                .default_value("2")
                .help("Blank lines printed between two sections."),
        )
        .arg(
            Arg::new("headings")
                .long("headings")
                .takes_value(false)
                .help("Print a heading before every section."),
        )
}

/// Parses options from the command line arguments, program name excluded.
pub fn parse_from_args(args: &[String]) -> Result<DemoOptions, DispatchError> {
    let matches = match make_options_parser().try_get_matches_from(args.iter()) {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => return Err(DispatchError::Usage(e.to_string())),
        },
    };

    let mut builder = DemoOptionsBuilder::default();
    if let Some(names) = matches.get_many::<String>("section") {
        builder.sections(
            names
                .map(|name| name.parse())
                .collect::<Result<Vec<Section>, _>>()?,
        );
    }
    if let Some(gap) = matches.get_one::<u32>("gap") {
        builder.gap(*gap);
    }
    builder.headings(matches.contains_id("headings"));

    Ok(builder.build()?)
}
