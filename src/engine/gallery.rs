//! View state for the filterable media grid: category filtering, hover
//! playback bookkeeping, expand/fullscreen selection, and the stagger used
//! when a filter change re-reveals the visible tiles.
//!
//! Filtering never touches the underlying item list; it only changes which
//! items are visible.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MediaItem {
    /// Unique within one grid.
    pub id: String,
    pub kind: MediaKind,
    pub source: String,
    pub caption: String,
    pub category: Option<String>,
    /// Poster shown while a video is not playing. Meaningless for images,
    /// and a video without one still renders (the frame is just dark until
    /// hover).
    pub thumbnail: Option<String>,
}

/// First tile's reveal delay after a filter change, seconds.
pub const STAGGER_BASE: f32 = 0.06;
/// Additional delay per tile index, seconds.
pub const STAGGER_STEP: f32 = 0.05;

#[derive(Clone, PartialEq, Debug)]
pub struct Gallery {
    items: Vec<MediaItem>,
    selected: Option<String>,
    hovered: Option<String>,
    expanded: Option<String>,
    fullscreen: Option<String>,
    epoch: u32,
}

impl Gallery {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            selected: None,
            hovered: None,
            expanded: None,
            fullscreen: None,
            epoch: 0,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct non-empty categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if let Some(category) = item.category.as_deref() {
                if !category.is_empty() && !seen.contains(&category) {
                    seen.push(category);
                }
            }
        }
        seen
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Switches the filter. A category nothing is tagged with simply yields
    /// an empty grid. Changing the filter bumps the epoch so the visible
    /// tiles replay their reveal.
    pub fn set_category(&mut self, category: Option<&str>) {
        let next = category.map(str::to_owned);
        if next != self.selected {
            self.selected = next;
            self.epoch = self.epoch.wrapping_add(1);
        }
    }

    /// Counter identifying the current filter generation; render keys carry
    /// it so tiles re-animate when it changes.
    pub fn filter_epoch(&self) -> u32 {
        self.epoch
    }

    /// The visible view under the current filter, in original item order.
    pub fn visible(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| match self.selected.as_deref() {
                Some(category) => item.category.as_deref() == Some(category),
                None => true,
            })
            .collect()
    }

    /// Reveal delay of the i-th visible tile after a filter change.
    pub fn stagger_delay(index: usize) -> f32 {
        STAGGER_BASE + index as f32 * STAGGER_STEP
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// The hovered item's id when it is a video (i.e. something is or should
    /// be playing).
    pub fn hovered_video(&self) -> Option<&str> {
        let id = self.hovered.as_deref()?;
        match self.item(id) {
            Some(item) if item.kind == MediaKind::Video => Some(id),
            _ => None,
        }
    }

    /// Marks `id` hovered and returns the id of the video that was playing
    /// before, if any, so the caller can pause it first. At most one item is
    /// ever hovered, which keeps playback single-streamed.
    pub fn hover(&mut self, id: &str) -> Option<String> {
        if self.item(id).is_none() {
            return None;
        }
        let previous = self.hovered_video().map(str::to_owned);
        self.hovered = Some(id.to_owned());
        previous.filter(|prev| prev != id)
    }

    /// Clears the hover only if `id` is still the hovered item; a stale
    /// mouse-leave for an item already replaced does nothing.
    pub fn unhover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Toggles layout expansion: expanding an already-expanded item
    /// collapses it.
    pub fn expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else if self.item(id).is_some() {
            self.expanded = Some(id.to_owned());
        }
    }

    pub fn fullscreen(&self) -> Option<&MediaItem> {
        self.fullscreen.as_deref().and_then(|id| self.item(id))
    }

    /// Opens the fullscreen view. Unknown ids are rejected so `fullscreen`
    /// can never point at a nonexistent item. Returns whether the view
    /// opened.
    pub fn open_fullscreen(&mut self, id: &str) -> bool {
        if self.item(id).is_none() {
            return false;
        }
        self.fullscreen = Some(id.to_owned());
        true
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, category: Option<&str>) -> MediaItem {
        MediaItem {
            id: id.to_owned(),
            kind: MediaKind::Image,
            source: format!("/media/{id}.jpg"),
            caption: id.to_owned(),
            category: category.map(str::to_owned),
            thumbnail: None,
        }
    }

    fn video(id: &str, category: Option<&str>) -> MediaItem {
        MediaItem {
            kind: MediaKind::Video,
            thumbnail: Some(format!("/media/{id}-poster.jpg")),
            ..image(id, category)
        }
    }

    fn sample() -> Gallery {
        Gallery::new(vec![
            image("a", Some("teamwork")),
            video("b", Some("business")),
            image("c", Some("teamwork")),
            video("d", Some("business")),
            image("e", Some("technology")),
            image("f", None),
        ])
    }

    #[test]
    fn filter_matches_category_exactly() {
        let mut g = sample();
        g.set_category(Some("business"));
        let ids: Vec<&str> = g.visible().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "d"]);
    }

    #[test]
    fn clearing_the_filter_restores_all_items_in_order() {
        let mut g = sample();
        g.set_category(Some("teamwork"));
        g.set_category(None);
        let ids: Vec<&str> = g.visible().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn unknown_category_yields_empty_grid() {
        let mut g = sample();
        g.set_category(Some("sports"));
        assert!(g.visible().is_empty());
    }

    #[test]
    fn filtering_is_a_view_operation_only() {
        let mut g = sample();
        g.set_category(Some("teamwork"));
        assert_eq!(g.items().len(), 6);
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let g = sample();
        assert_eq!(g.categories(), ["teamwork", "business", "technology"]);
    }

    #[test]
    fn filter_change_bumps_epoch_once() {
        let mut g = sample();
        let start = g.filter_epoch();
        g.set_category(Some("teamwork"));
        assert_eq!(g.filter_epoch(), start + 1);
        // selecting the already-selected category is not a change
        g.set_category(Some("teamwork"));
        assert_eq!(g.filter_epoch(), start + 1);
        g.set_category(None);
        assert_eq!(g.filter_epoch(), start + 2);
    }

    #[test]
    fn stagger_is_deterministic_per_index() {
        assert_eq!(Gallery::stagger_delay(0), STAGGER_BASE);
        assert_eq!(Gallery::stagger_delay(3), STAGGER_BASE + 3.0 * STAGGER_STEP);
    }

    #[test]
    fn hovering_a_new_item_hands_back_the_playing_video() {
        let mut g = sample();
        assert_eq!(g.hover("b"), None);
        assert_eq!(g.hovered_video(), Some("b"));
        // moving to another tile: b must be paused, only one item hovered
        assert_eq!(g.hover("a"), Some("b".to_owned()));
        assert_eq!(g.hovered(), Some("a"));
        assert_eq!(g.hovered_video(), None);
    }

    #[test]
    fn hovering_an_image_hands_back_nothing() {
        let mut g = sample();
        g.hover("a");
        assert_eq!(g.hover("c"), None);
        assert_eq!(g.hovered(), Some("c"));
    }

    #[test]
    fn stale_unhover_is_ignored() {
        let mut g = sample();
        g.hover("a");
        g.hover("c");
        g.unhover("a");
        assert_eq!(g.hovered(), Some("c"));
        g.unhover("c");
        assert_eq!(g.hovered(), None);
    }

    #[test]
    fn expand_toggles() {
        let mut g = sample();
        g.expand("a");
        assert_eq!(g.expanded(), Some("a"));
        g.expand("a");
        assert_eq!(g.expanded(), None);
        g.expand("nope");
        assert_eq!(g.expanded(), None);
    }

    #[test]
    fn fullscreen_rejects_unknown_ids() {
        let mut g = sample();
        assert!(!g.open_fullscreen("nope"));
        assert!(g.fullscreen().is_none());
        assert!(g.open_fullscreen("d"));
        assert_eq!(g.fullscreen().map(|i| i.id.as_str()), Some("d"));
        g.close_fullscreen();
        assert!(g.fullscreen().is_none());
    }

    #[test]
    fn hover_on_unknown_id_is_a_no_op() {
        let mut g = sample();
        assert_eq!(g.hover("nope"), None);
        assert_eq!(g.hovered(), None);
    }
}
