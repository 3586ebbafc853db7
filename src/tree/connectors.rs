//! Glyph sets used to draw the tree

use serde::{Deserialize, Serialize};

/// The four strings that draw a tree: the connector before an entry and the
/// continuation carried into that entry's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectors {
    /// Connector for an entry with siblings after it
    pub middle: &'static str,
    /// Connector for the last entry of a directory
    pub last: &'static str,
    /// Continuation under an entry drawn with `middle`
    pub continue_middle: &'static str,
    /// Continuation under an entry drawn with `last`
    pub continue_last: &'static str,
}

impl Connectors {
    pub const STANDARD: Connectors = Connectors {
        middle: "├── ",
        last: "└── ",
        continue_middle: "│   ",
        continue_last: "    ",
    };

    pub const ASCII: Connectors = Connectors {
        middle: "|-- ",
        last: "`-- ",
        continue_middle: "|   ",
        continue_last: "    ",
    };

    /// No drawing at all; lines become bare names.
    pub const NONE: Connectors = Connectors {
        middle: "",
        last: "",
        continue_middle: "",
        continue_last: "",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.middle }
    }

    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last {
            self.continue_last
        } else {
            self.continue_middle
        }
    }
}

impl Default for Connectors {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Named indent style, as selected on the command line or in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Standard,
    Ascii,
    None,
}

impl IndentStyle {
    pub fn connectors(self) -> Connectors {
        match self {
            IndentStyle::Standard => Connectors::STANDARD,
            IndentStyle::Ascii => Connectors::ASCII,
            IndentStyle::None => Connectors::NONE,
        }
    }
}
