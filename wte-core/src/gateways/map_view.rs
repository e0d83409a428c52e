use crate::{entities::*, marker::MarkerBubble};

/// The interactive map owned by the user interface.
pub trait MapView {
    fn pan_to(&self, pos: Coordinate);
    fn set_zoom(&self, zoom: u8);
    /// Removes every marker and bubble that is currently shown.
    fn clear_markers(&self);
    fn add_marker(&self, marker: &MarkerBubble);
    fn open_bubble(&self, id: &Id);
    fn close_bubble(&self, id: &Id);
}

impl<T: MapView + ?Sized> MapView for &T {
    fn pan_to(&self, pos: Coordinate) {
        (**self).pan_to(pos);
    }
    fn set_zoom(&self, zoom: u8) {
        (**self).set_zoom(zoom);
    }
    fn clear_markers(&self) {
        (**self).clear_markers();
    }
    fn add_marker(&self, marker: &MarkerBubble) {
        (**self).add_marker(marker);
    }
    fn open_bubble(&self, id: &Id) {
        (**self).open_bubble(id);
    }
    fn close_bubble(&self, id: &Id) {
        (**self).close_bubble(id);
    }
}
