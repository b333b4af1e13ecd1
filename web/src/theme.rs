use serde::{Deserialize, Serialize};

use crate::utils::*;

/// Light/dark scheme applied as a `data-theme` attribute on the document
/// root. The preference is the only value this app ever persists.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub(crate) const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn set_attribute(self) {
        use gloo::utils::document;
        let html = document()
            .query_selector("html")
            .expect("query must be correct")
            .expect("must have html element");
        log::debug!("theme scheme: {}", self.scheme());
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, self.scheme()) {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    /// The persisted preference, or the default when none is stored.
    pub(crate) fn load() -> Theme {
        LocalOrDefault::local_or_default()
    }

    /// Apply the stored preference at startup.
    pub(crate) fn init() {
        Self::load().set_attribute();
    }

    /// Switch to this theme and remember the choice.
    pub(crate) fn apply(self) {
        self.local_save();
        self.set_attribute();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "arcadita:theme";
}
