//! Top-level options of the `ax` command line.

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum TopLevelOption {
    #[strum(serialize = "-!")]
    Hint,
    #[strum(serialize = "-?")]
    Help,
    #[strum(serialize = "-@")]
    Version,
    #[strum(serialize = "--init")]
    Init,
    #[strum(serialize = "--setup")]
    Setup,
    #[strum(serialize = "--reset")]
    Reset,
    #[strum(serialize = "--update")]
    Update,
}

impl TopLevelOption {
    /// The flag as typed on the command line.
    pub fn flag(self) -> &'static str {
        self.into()
    }

    /// Short single-character form, for the options that have one.
    pub const fn short(self) -> Option<char> {
        match self {
            Self::Hint => Some('!'),
            Self::Help => Some('?'),
            Self::Version => Some('@'),
            Self::Init | Self::Setup | Self::Reset | Self::Update => None,
        }
    }

    /// Long form without the leading dashes.
    pub const fn long(self) -> Option<&'static str> {
        match self {
            Self::Init => Some("init"),
            Self::Setup => Some("setup"),
            Self::Reset => Some("reset"),
            Self::Update => Some("update"),
            Self::Hint | Self::Help | Self::Version => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Hint => "Show a short usage hint",
            Self::Help => "Show this help",
            Self::Version => "Show the version",
            Self::Init => "Create a .ax directory here with a template script",
            Self::Setup => "Register shell completion in the shell init file",
            Self::Reset => "Remove shell completion from the shell init file",
            Self::Update => "Replace this executable with the latest release",
        }
    }

    /// Every option flag, in declaration order.
    pub fn flags() -> Vec<&'static str> {
        Self::iter().map(Self::flag).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parse_round_trips_flag() {
        for opt in TopLevelOption::iter() {
            assert_eq!(TopLevelOption::from_str(opt.flag()).ok(), Some(opt));
        }
    }

    #[test]
    fn test_unknown_flag_does_not_parse() {
        assert!(TopLevelOption::from_str("--bogus").is_err());
        assert!(TopLevelOption::from_str("-h").is_err());
    }

    #[test]
    fn test_every_option_has_exactly_one_form() {
        for opt in TopLevelOption::iter() {
            assert!(opt.short().is_some() != opt.long().is_some(), "{opt:?}");
        }
    }

    #[test]
    fn test_flags_all_start_with_dash() {
        assert!(TopLevelOption::flags().iter().all(|f| f.starts_with('-')));
        assert_eq!(TopLevelOption::flags().len(), 7);
    }
}
