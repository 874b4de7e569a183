//! Pure calendar arithmetic for the scheduling board: maps the operating
//! window into discrete slots and converts clock time to vertical pixel
//! offsets and back. Nothing here ever mutates a booking's stored
//! timestamps; values outside the window are only clamped for rendering.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: u32,
    pub slot_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            start_hour: 8,
            end_hour: 20,
            slot_minutes: 15,
            slot_px: 24.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub hour: u32,
    pub minute: u32,
}

impl Slot {
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    pub fn minutes_from_midnight(&self) -> i64 {
        (self.hour * 60 + self.minute) as i64
    }
}

impl GridConfig {
    pub fn window_start_min(&self) -> i64 {
        (self.start_hour * 60) as i64
    }

    pub fn window_end_min(&self) -> i64 {
        (self.end_hour * 60) as i64
    }

    /// Ordered slot descriptors for the operating window, inclusive of the
    /// closing `end_hour:00` label.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for hour in self.start_hour..=self.end_hour {
            for minute in (0..60).step_by(self.slot_minutes as usize) {
                if hour == self.end_hour && minute > 0 {
                    break;
                }
                slots.push(Slot { hour, minute });
            }
        }
        slots
    }

    /// Total pixel height of the rendered window.
    pub fn window_px_height(&self) -> f64 {
        let total_minutes = (self.window_end_min() - self.window_start_min()) as f64;
        total_minutes / self.slot_minutes as f64 * self.slot_px
    }

    pub fn clamp_to_window(&self, minutes_from_midnight: i64) -> i64 {
        minutes_from_midnight
            .max(self.window_start_min())
            .min(self.window_end_min())
    }

    /// Vertical pixel offset for a clock time, clamped to the window.
    pub fn offset_px(&self, minutes_from_midnight: i64) -> f64 {
        let clamped = self.clamp_to_window(minutes_from_midnight);
        (clamped - self.window_start_min()) as f64 / self.slot_minutes as f64 * self.slot_px
    }

    /// Inverse of [`offset_px`]: the nearest slot for a pixel offset taken
    /// from a click or drop event.
    pub fn slot_at_offset(&self, px: f64) -> Slot {
        let slot_count =
            (self.window_end_min() - self.window_start_min()) / self.slot_minutes as i64;
        let index = (px / self.slot_px).round() as i64;
        let index = index.max(0).min(slot_count);
        let minutes = self.window_start_min() + index * self.slot_minutes as i64;
        Slot {
            hour: (minutes / 60) as u32,
            minute: (minutes % 60) as u32,
        }
    }

    /// Rendered `(top, height)` in pixels for an event. The event is
    /// visually truncated at the window edges; a zero-duration event still
    /// occupies one slot of height. Malformed input (negative duration)
    /// yields `None` and is not rendered.
    pub fn event_px(&self, start_min: i64, end_min: i64) -> Option<(f64, f64)> {
        if end_min < start_min {
            return None;
        }
        let visible_start = self.clamp_to_window(start_min);
        let visible_end = self.clamp_to_window(end_min);
        let top = self.offset_px(visible_start);
        let height = ((visible_end - visible_start) as f64 / self.slot_minutes as f64
            * self.slot_px)
            .max(self.slot_px);
        Some((top, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_window_inclusive_of_closing_label() {
        let grid = GridConfig::default();
        let slots = grid.slots();
        // 12 hours of 15-minute slots plus the closing 20:00 label
        assert_eq!(slots.len(), 12 * 4 + 1);
        assert_eq!(slots.first().unwrap().label(), "08:00");
        assert_eq!(slots.last().unwrap().label(), "20:00");
    }

    #[test]
    fn offset_is_proportional_within_window() {
        let grid = GridConfig::default();
        assert_eq!(grid.offset_px(8 * 60), 0.0);
        assert_eq!(grid.offset_px(8 * 60 + 15), 24.0);
        assert_eq!(grid.offset_px(10 * 60), 8.0 * 24.0);
    }

    #[test]
    fn offset_clamps_outside_window() {
        let grid = GridConfig::default();
        assert_eq!(grid.offset_px(6 * 60), 0.0);
        assert_eq!(grid.offset_px(23 * 60), grid.window_px_height());
    }

    #[test]
    fn offset_round_trips_to_the_same_slot() {
        let grid = GridConfig::default();
        for slot in grid.slots() {
            let px = grid.offset_px(slot.minutes_from_midnight());
            assert_eq!(grid.slot_at_offset(px), slot);
        }
    }

    #[test]
    fn slot_at_offset_snaps_to_nearest() {
        let grid = GridConfig::default();
        // 5px into the first slot rounds back to 08:00, 20px rounds forward
        assert_eq!(grid.slot_at_offset(5.0).label(), "08:00");
        assert_eq!(grid.slot_at_offset(20.0).label(), "08:15");
        // far past the window clamps to the closing slot
        assert_eq!(grid.slot_at_offset(10_000.0).label(), "20:00");
    }

    #[test]
    fn event_px_truncates_at_window_but_keeps_min_height() {
        let grid = GridConfig::default();
        // booking spilling past 20:00 is cut at the bottom edge
        let (top, height) = grid.event_px(19 * 60, 21 * 60).unwrap();
        assert_eq!(top, grid.offset_px(19 * 60));
        assert_eq!(top + height, grid.window_px_height());
        // zero duration renders one slot tall
        let (_, height) = grid.event_px(10 * 60, 10 * 60).unwrap();
        assert_eq!(height, grid.slot_px);
        // negative duration is malformed and not rendered
        assert!(grid.event_px(11 * 60, 10 * 60).is_none());
    }
}
