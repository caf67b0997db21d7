//! Show/hide state machine shared by the contact confirmation and the project
//! gallery dialogs.
//!
//! `open` and `close` take effect immediately on the overlay and return a
//! [`Scheduled`] completion the host fires after the configured delay. Every
//! operation bumps the controller's epoch, and a completion only applies if no
//! other operation happened in between, so interleaved open/close calls settle
//! on whichever came last.

use crate::catalog::GalleryView;
use crate::config::ModalTimings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    Contact,
    Gallery,
}

impl ModalId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Gallery => "gallery",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Visibility {
    /// Overlay participates in layout.
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Content wrapper is in its expanded (scaled-in) state.
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Inline style for the overlay element. Hidden overlays take no layout
    /// and no clicks even without the page stylesheet.
    pub fn overlay_style(self) -> &'static str {
        if self.is_displayed() {
            "display: flex;"
        } else {
            "display: none;"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Expand,
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub modal: ModalId,
    pub epoch: u64,
    pub step: Step,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalController {
    id: ModalId,
    visibility: Visibility,
    epoch: u64,
}

impl ModalController {
    pub fn new(id: ModalId) -> Self {
        Self {
            id,
            visibility: Visibility::Closed,
            epoch: 0,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// No-op while already opening or open.
    pub fn open(&mut self, timings: &ModalTimings) -> Option<Scheduled> {
        if matches!(self.visibility, Visibility::Opening | Visibility::Open) {
            return None;
        }
        self.visibility = Visibility::Opening;
        Some(self.schedule(Step::Expand, timings.expand_delay_ms))
    }

    /// No-op while already closing or closed.
    pub fn close(&mut self, timings: &ModalTimings) -> Option<Scheduled> {
        if matches!(self.visibility, Visibility::Closing | Visibility::Closed) {
            return None;
        }
        self.visibility = Visibility::Closing;
        Some(self.schedule(Step::Hide, timings.collapse_delay_ms))
    }

    /// Applies a delayed completion. Returns false when it went stale.
    pub fn complete(&mut self, scheduled: Scheduled) -> bool {
        if scheduled.modal != self.id || scheduled.epoch != self.epoch {
            return false;
        }

        self.visibility = match (scheduled.step, self.visibility) {
            (Step::Expand, Visibility::Opening) => Visibility::Open,
            (Step::Hide, Visibility::Closing) => Visibility::Closed,
            _ => return false,
        };
        true
    }

    fn schedule(&mut self, step: Step, delay_ms: u32) -> Scheduled {
        self.epoch += 1;
        Scheduled {
            modal: self.id,
            epoch: self.epoch,
            step,
            delay_ms,
        }
    }
}

/// Both dialogs plus the order they were opened in, so Escape only reaches
/// the topmost one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalLayer {
    contact: ModalController,
    gallery: ModalController,
    gallery_view: Option<GalleryView>,
    stack: Vec<ModalId>,
}

impl Default for ModalLayer {
    fn default() -> Self {
        Self {
            contact: ModalController::new(ModalId::Contact),
            gallery: ModalController::new(ModalId::Gallery),
            gallery_view: None,
            stack: Vec::new(),
        }
    }
}

impl ModalLayer {
    pub fn controller(&self, id: ModalId) -> &ModalController {
        match id {
            ModalId::Contact => &self.contact,
            ModalId::Gallery => &self.gallery,
        }
    }

    fn controller_mut(&mut self, id: ModalId) -> &mut ModalController {
        match id {
            ModalId::Contact => &mut self.contact,
            ModalId::Gallery => &mut self.gallery,
        }
    }

    /// Content of the gallery dialog. `None` until the first project is opened.
    pub fn gallery_view(&self) -> Option<&GalleryView> {
        self.gallery_view.as_ref()
    }

    pub fn open(&mut self, id: ModalId, timings: &ModalTimings) -> Option<Scheduled> {
        let scheduled = self.controller_mut(id).open(timings);
        self.stack.retain(|entry| *entry != id);
        self.stack.push(id);
        scheduled
    }

    /// Replaces the gallery content and opens it. Reopening over an already
    /// open gallery just swaps the content.
    pub fn open_gallery(&mut self, view: GalleryView, timings: &ModalTimings) -> Option<Scheduled> {
        self.gallery_view = Some(view);
        self.open(ModalId::Gallery, timings)
    }

    pub fn close(&mut self, id: ModalId, timings: &ModalTimings) -> Option<Scheduled> {
        self.stack.retain(|entry| *entry != id);
        self.controller_mut(id).close(timings)
    }

    pub fn complete(&mut self, scheduled: Scheduled) -> bool {
        self.controller_mut(scheduled.modal).complete(scheduled)
    }

    /// Most recently opened dialog that is still opening or open.
    pub fn topmost(&self) -> Option<ModalId> {
        self.stack.iter().rev().copied().find(|id| {
            matches!(
                self.controller(*id).visibility(),
                Visibility::Opening | Visibility::Open
            )
        })
    }

    pub fn on_escape(&mut self, timings: &ModalTimings) -> Option<Scheduled> {
        let id = self.topmost()?;
        self.close(id, timings)
    }

    /// Clicks on the overlay itself close the dialog; clicks inside its
    /// content do not.
    pub fn on_overlay_click(
        &mut self,
        id: ModalId,
        target_is_overlay: bool,
        timings: &ModalTimings,
    ) -> Option<Scheduled> {
        if !target_is_overlay {
            return None;
        }
        self.close(id, timings)
    }
}
