use serde::Deserialize;

/// The only literal a checkbox flag accepts as true. Anything else, including
/// an absent parameter, is false.
pub const FLAG_ON: &str = "on";

pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some(FLAG_ON)
}

/// Raw `show_all` / `show_animated` fields of a submitted form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayFlags {
    pub show_all: Option<String>,
    pub show_animated: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Include emoji hidden from the picker
    pub show_all: bool,
    /// Link the animated original instead of the static rendering
    pub show_animated: bool,
}

impl From<&DisplayFlags> for DisplayOptions {
    fn from(flags: &DisplayFlags) -> Self {
        Self {
            show_all: parse_flag(flags.show_all.as_deref()),
            show_animated: parse_flag(flags.show_animated.as_deref()),
        }
    }
}

impl DisplayOptions {
    /// Read the flags from a raw query string. The first occurrence of each
    /// flag wins and a query that cannot be decoded sets nothing.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        Self {
            show_all: parse_flag(first("show_all")),
            show_animated: parse_flag(first("show_animated")),
        }
    }

    /// Query string carrying only the flags that are set, e.g.
    /// `show_all=on&show_animated=on`, or an empty string.
    pub fn to_query(&self) -> String {
        #[derive(serde::Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            show_all: Option<&'static str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            show_animated: Option<&'static str>,
        }

        let query = Query {
            show_all: self.show_all.then_some(FLAG_ON),
            show_animated: self.show_animated.then_some(FLAG_ON),
        };
        serde_urlencoded::to_string(query).unwrap_or_default()
    }
}
