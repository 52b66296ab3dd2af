use crate::models::CategoryGroups;
use crate::parsers::DisplayOptions;

/// Everything the listing page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub domain: String,
    pub groups: CategoryGroups,
    pub show_all: bool,
    pub show_animated: bool,
}

pub fn build(groups: CategoryGroups, domain: &str, options: DisplayOptions) -> ViewModel {
    ViewModel {
        domain: domain.to_string(),
        groups,
        show_all: options.show_all,
        show_animated: options.show_animated,
    }
}

impl ViewModel {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            show_all: self.show_all,
            show_animated: self.show_animated,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
