//! Renders the map as plain text.

use std::{
    cell::RefCell,
    io::{self, Write},
};

use wte_core::{
    entities::{Coordinate, Id},
    gateways::map_view::MapView,
    marker::MarkerBubble,
};

#[derive(Debug)]
pub struct TerminalMap<W: Write> {
    out: RefCell<W>,
    markers: RefCell<Vec<MarkerBubble>>,
}

impl TerminalMap<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            markers: RefCell::new(vec![]),
        }
    }

    fn print(&self, line: impl AsRef<str>) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "{}", line.as_ref()) {
            log::warn!("Failed to render map: {err}");
        }
    }

    fn with_marker(&self, id: &Id, f: impl FnOnce(usize, &MarkerBubble)) {
        let markers = self.markers.borrow();
        match markers.iter().enumerate().find(|(_, m)| &m.id == id) {
            Some((index, marker)) => f(index + 1, marker),
            None => log::debug!("Marker {id} is not shown"),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

/// The first line of a bubble holds the name of the place.
fn title(marker: &MarkerBubble) -> &str {
    marker.bubble_text.lines().next().unwrap_or_default()
}

impl<W: Write> MapView for TerminalMap<W> {
    fn pan_to(&self, pos: Coordinate) {
        self.print(format!("Map centered at {pos}"));
    }

    fn set_zoom(&self, zoom: u8) {
        self.print(format!("Zoom level {zoom}"));
    }

    fn clear_markers(&self) {
        self.markers.borrow_mut().clear();
    }

    fn add_marker(&self, marker: &MarkerBubble) {
        let mut markers = self.markers.borrow_mut();
        markers.push(marker.clone());
        let line = format!("  [{}] {} @ {}", markers.len(), title(marker), marker.pos);
        drop(markers);
        self.print(line);
    }

    fn open_bubble(&self, id: &Id) {
        self.with_marker(id, |index, marker| {
            let mut text = format!("  +-- [{index}]");
            for line in marker.bubble_text.lines() {
                text.push_str("\n  | ");
                text.push_str(line);
            }
            self.print(text);
        });
    }

    fn close_bubble(&self, id: &Id) {
        self.with_marker(id, |index, marker| {
            self.print(format!("  x-- [{index}] {}", title(marker)));
        });
    }
}
