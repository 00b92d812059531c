use std::collections::BTreeSet;

use serde::Serialize;
use sketch_core::entities::{ProjectId, ProjectSnapshot};
use sketch_gateway::SaveProjectState;

/// One image as seen through a view: its original position and URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRef<'a> {
    pub index: usize,
    pub url: &'a str,
}

/// In-memory curation state for one project.
///
/// `images` is never reordered or resized. Deletion is a flag in `deleted`,
/// so every index keeps pointing at the same image for the whole session.
/// `deleted` and `favorites` are independent; an image may be in both.
///
/// Mutations perform no bounds checks. Callers pass indexes taken from the
/// image list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurationModel {
    images: Vec<String>,
    deleted: BTreeSet<usize>,
    favorites: BTreeSet<usize>,
    selected: usize,
}

impl CurationModel {
    #[must_use]
    pub fn new(snapshot: ProjectSnapshot) -> Self {
        let mut model = Self::default();
        model.replace(snapshot);
        model
    }

    /// Replace all three collections and reset the selection to 0.
    pub fn replace(&mut self, snapshot: ProjectSnapshot) {
        self.images = snapshot.images;
        self.deleted = snapshot.deleted;
        self.favorites = snapshot.favorites;
        self.selected = 0;
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn deleted(&self) -> &BTreeSet<usize> {
        &self.deleted
    }

    #[must_use]
    pub const fn favorites(&self) -> &BTreeSet<usize> {
        &self.favorites
    }

    pub const fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Soft-delete `index`. Returns `false` if it was already deleted.
    pub fn mark_deleted(&mut self, index: usize) -> bool {
        self.deleted.insert(index)
    }

    /// Undo a soft delete. Returns `false` if `index` was not deleted.
    pub fn restore(&mut self, index: usize) -> bool {
        self.deleted.remove(&index)
    }

    /// Flip favorite membership. Returns whether `index` is now a favorite.
    pub fn toggle_favorite(&mut self, index: usize) -> bool {
        if self.favorites.remove(&index) {
            false
        } else {
            self.favorites.insert(index);
            true
        }
    }

    #[must_use]
    pub fn is_deleted(&self, index: usize) -> bool {
        self.deleted.contains(&index)
    }

    #[must_use]
    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.contains(&index)
    }

    /// Images not marked deleted, in original order.
    #[must_use]
    pub fn active_view(&self) -> View<'_> {
        View::new(&self.images, &self.deleted, false)
    }

    #[must_use]
    pub fn deleted_view(&self) -> View<'_> {
        View::new(&self.images, &self.deleted, true)
    }

    #[must_use]
    pub fn favorites_view(&self) -> View<'_> {
        View::new(&self.images, &self.favorites, true)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_view().count()
    }

    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.deleted_view().count()
    }

    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites_view().count()
    }

    /// The entry the full-size pane shows.
    ///
    /// The selection is not corrected when its image is deleted, so this falls
    /// back to the first active image when the selected one is not active.
    #[must_use]
    pub fn displayed(&self) -> Option<ImageRef<'_>> {
        let selected = self.selected;
        match self.image(selected) {
            Some(url) if !self.is_deleted(selected) => Some(ImageRef {
                index: selected,
                url,
            }),
            _ => self.active_view().next(),
        }
    }

    /// Full snapshot for the save endpoint.
    ///
    /// `image_indexes` is always the whole `0..len` range.
    #[must_use]
    pub fn save_request(&self, project_id: &ProjectId) -> SaveProjectState {
        SaveProjectState {
            project_id: project_id.clone(),
            image_indexes: (0..self.images.len()).collect(),
            deleted_image_indexes: self.deleted.iter().copied().collect(),
            favorite_image_indexes: self.favorites.iter().copied().collect(),
        }
    }
}

/// Lazy, order-preserving projection of the image list by set membership.
///
/// Computed on every call; clone it (or ask the model again) to restart.
#[derive(Debug, Clone)]
pub struct View<'a> {
    images: &'a [String],
    set: &'a BTreeSet<usize>,
    members: bool,
    next: usize,
}

impl<'a> View<'a> {
    const fn new(images: &'a [String], set: &'a BTreeSet<usize>, members: bool) -> Self {
        Self {
            images,
            set,
            members,
            next: 0,
        }
    }
}

impl<'a> Iterator for View<'a> {
    type Item = ImageRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.images.len() {
            let index = self.next;
            self.next += 1;
            if self.set.contains(&index) == self.members {
                return Some(ImageRef {
                    index,
                    url: &self.images[index],
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.images.len() - self.next))
    }
}

impl std::iter::FusedIterator for View<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model(images: &[&str]) -> CurationModel {
        CurationModel::new(
            ProjectSnapshot::new(images.iter().map(|s| (*s).to_string()).collect(), [], [])
                .unwrap(),
        )
    }

    fn pairs(view: View<'_>) -> Vec<(usize, &str)> {
        view.map(|r| (r.index, r.url)).collect()
    }

    #[test]
    fn replace_resets_selection() {
        let mut m = model(&["a", "b"]);
        m.select(1);
        m.replace(ProjectSnapshot::new(vec!["x".into()], [], [0]).unwrap());
        assert_eq!(m.selected(), 0);
        assert_eq!(m.images(), ["x".to_string()]);
        assert!(m.is_favorite(0));
    }

    #[test]
    fn mark_deleted_reports_first_insert_only() {
        let mut m = model(&["a", "b"]);
        assert!(m.mark_deleted(1));
        assert!(!m.mark_deleted(1));
        assert_eq!(m.deleted().len(), 1);
    }

    #[test]
    fn restore_of_undeleted_index_is_noop() {
        let mut m = model(&["a"]);
        assert!(!m.restore(0));
        assert!(m.deleted().is_empty());
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut m = model(&["a"]);
        assert!(m.toggle_favorite(0));
        assert!(!m.toggle_favorite(0));
    }

    #[test]
    fn select_does_not_validate() {
        let mut m = model(&["a"]);
        m.select(99);
        assert_eq!(m.selected(), 99);
        assert_eq!(m.displayed().map(|r| r.index), Some(0));
    }

    #[test]
    fn view_is_restartable_by_clone() {
        let mut m = model(&["a", "b", "c"]);
        m.mark_deleted(0);
        let view = m.active_view();
        let first = pairs(view.clone());
        let second = pairs(view);
        assert_eq!(first, second);
        assert_eq!(first, vec![(1, "b"), (2, "c")]);
    }

    #[test]
    fn counts_follow_views() {
        let mut m = model(&["a", "b", "c", "d"]);
        m.mark_deleted(0);
        m.mark_deleted(3);
        m.toggle_favorite(3);
        assert_eq!(m.active_count(), 2);
        assert_eq!(m.deleted_count(), 2);
        assert_eq!(m.favorite_count(), 1);
    }

    #[test]
    fn displayed_is_none_when_everything_is_deleted() {
        let mut m = model(&["a", "b"]);
        m.mark_deleted(0);
        m.mark_deleted(1);
        assert!(m.displayed().is_none());
        assert!(model(&[]).displayed().is_none());
    }

    #[test]
    fn save_request_of_empty_project() {
        let request = model(&[]).save_request(&ProjectId::from("e"));
        assert!(request.image_indexes.is_empty());
        assert!(request.deleted_image_indexes.is_empty());
    }
}
