//! The three dashboard views and the selection state driving them.

mod landing;
mod layout;
mod map;
mod overview;

pub use landing::landing_body;
pub use layout::{APP_TITLE, error_panel, page};
pub use map::{map_body, map_title};
pub use overview::{OverviewData, overview_body};

use crate::data::{Area, Sex, WorkerType};

/// Which page is showing. Changes only on explicit user selection.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum View {
    #[default]
    Landing,
    Overview,
    Map,
}

impl View {
    pub const ALL: [Self; 3] = [Self::Landing, Self::Overview, Self::Map];

    /// Menu entry text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Overview => "Overview",
            Self::Map => "Explore",
        }
    }

    /// Canonical URL path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Overview => "/overview",
            Self::Map => "/explore",
        }
    }
}

/// Per-request selector values. Rebuilt on every interaction, never stored.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Selection {
    pub worker: WorkerType,
    pub sex: Sex,
    pub area: Area,
}

impl Selection {
    /// Build from decoded query pairs. Unknown keys are ignored and unknown
    /// values fall back to the defaults; the map only offers Males/Females and
    /// Rural/Urban, so other sexes and areas fall back too.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut selection = Self::default();
        for (key, value) in pairs {
            match key {
                "worker" => if let Some(worker) = WorkerType::from_slug(value) { selection.worker = worker },
                "sex" => if let Some(sex) = Sex::from_slug(value).filter(|sex| Sex::MAP.contains(sex)) { selection.sex = sex },
                "area" => if let Some(area) = Area::from_slug(value).filter(|area| Area::MAP.contains(area)) { selection.area = area },
                _ => {}
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_is_landing() {
        assert_eq!(View::default(), View::Landing);
    }

    #[test]
    fn every_view_has_its_own_path() {
        let paths = View::ALL.map(View::path);
        assert_eq!(paths, ["/", "/overview", "/explore"]);
    }

    #[test]
    fn selection_from_pairs() {
        let selection = Selection::from_pairs([("worker", "marginal"), ("sex", "females"), ("area", "urban")]);
        assert_eq!(selection, Selection { worker: WorkerType::Marginal, sex: Sex::Females, area: Area::Urban });
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let selection = Selection::from_pairs([("worker", "robots"), ("sex", "persons"), ("area", "total"), ("x", "y")]);
        assert_eq!(selection, Selection::default());
    }
}
