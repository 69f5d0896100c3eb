//! Named sub-ranges of a strip that can be shifted independently.
//!
//! A [`SectionMap`] only records ranges; it owns no pixels. Sections may overlap.
//! [`LightStrip`](crate::led_strip::LightStrip) applies the shifts to its buffer and
//! moves the stored bounds along with the pixels.

use heapless::LinearMap;

use crate::{Error, Result};

/// Identifier of a registered section.
pub type SectionId = u16;

/// Maximum number of sections a strip can hold at once.
pub const MAX_SECTIONS: usize = 16;

/// Half-open serial range `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Section {
    start: usize,
    end: usize,
}

impl Section {
    /// Range covering `a` through `b`, both included, in either order.
    ///
    /// ```
    /// use pixel_led::led_strip::section::Section;
    ///
    /// let section = Section::inclusive(5, 2);
    /// assert_eq!((section.start(), section.end()), (2, 6));
    /// ```
    #[must_use]
    pub const fn inclusive(a: usize, b: usize) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start: low,
            end: high.saturating_add(1),
        }
    }

    /// First index in the section.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the section.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the section covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    const fn moved_right(self, steps: usize) -> Self {
        Self {
            start: self.start.saturating_add(steps),
            end: self.end.saturating_add(steps),
        }
    }

    const fn moved_left(self, steps: usize) -> Self {
        Self {
            start: self.start.saturating_sub(steps),
            end: self.end.saturating_sub(steps),
        }
    }
}

/// Registry of sections keyed by [`SectionId`].
///
/// Ids are assigned from a counter that starts at 0 and is post-incremented for each
/// section added without an explicit id. Registering an explicit id replaces any section
/// already stored under it and leaves the counter alone.
#[derive(Clone, Debug, Default)]
pub struct SectionMap {
    sections: LinearMap<SectionId, Section, MAX_SECTIONS>,
    next_id: SectionId,
}

impl SectionMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: LinearMap::new(),
            next_id: 0,
        }
    }

    /// Register `section` and return its id.
    ///
    /// Fails with [`Error::SectionsFull`] when adding a new id to a full map.
    pub fn insert(&mut self, section: Section, id: Option<SectionId>) -> Result<SectionId> {
        let id_to_use = id.unwrap_or(self.next_id);
        self.sections
            .insert(id_to_use, section)
            .map_err(|_| Error::SectionsFull {
                capacity: MAX_SECTIONS,
            })?;
        if id.is_none() {
            self.next_id = self.next_id.wrapping_add(1);
        }
        log::debug!(
            "section {}: {}..{}",
            id_to_use,
            section.start(),
            section.end()
        );
        Ok(id_to_use)
    }

    /// Remove a section and return its range.
    ///
    /// With `None`, removes the most recently auto-assigned id and steps the counter back.
    /// This only unwinds sections in the reverse order they were added: if that id is no
    /// longer registered the call fails with [`Error::SectionNotFound`] and the counter is
    /// left unchanged.
    pub fn remove(&mut self, id: Option<SectionId>) -> Result<Section> {
        let id_to_remove = id.unwrap_or_else(|| self.next_id.wrapping_sub(1));
        let section = self
            .sections
            .remove(&id_to_remove)
            .ok_or(Error::SectionNotFound { id: id_to_remove })?;
        if id.is_none() {
            self.next_id = id_to_remove;
        }
        log::debug!("section {id_to_remove} removed");
        Ok(section)
    }

    /// Range registered under `id`.
    pub fn get(&self, id: SectionId) -> Result<Section> {
        self.sections
            .get(&id)
            .copied()
            .ok_or(Error::SectionNotFound { id })
    }

    /// Forget every section and reset the id counter.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.next_id = 0;
    }

    /// Id the next section added without an explicit id will get.
    #[must_use]
    pub const fn next_id(&self) -> SectionId {
        self.next_id
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Registered sections, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, Section)> + '_ {
        self.sections.iter().map(|(&id, &section)| (id, section))
    }

    pub(crate) fn move_right(&mut self, id: SectionId, steps: usize) -> Result<Section> {
        let section = self
            .sections
            .get_mut(&id)
            .ok_or(Error::SectionNotFound { id })?;
        *section = section.moved_right(steps);
        Ok(*section)
    }

    pub(crate) fn move_left(&mut self, id: SectionId, steps: usize) -> Result<Section> {
        let section = self
            .sections
            .get_mut(&id)
            .ok_or(Error::SectionNotFound { id })?;
        *section = section.moved_left(steps);
        Ok(*section)
    }
}
