//! Conversion between period columns and pixels.
//!
//! A day row is `number_of_hours` equal columns wide. Until the row has been
//! measured (width known and positive) every conversion returns `None`, which
//! the editor treats as "resize and click-to-create disabled".

/// Column metrics for one timetable instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    number_of_hours: u8,
    hour_width: Option<f32>,
}

impl SlotGeometry {
    /// Unmeasured geometry for a grid of `number_of_hours` columns.
    pub fn new(number_of_hours: u8) -> Self {
        Self {
            number_of_hours,
            hour_width: None,
        }
    }

    pub fn measured(number_of_hours: u8, container_width: f32) -> Self {
        let mut geometry = Self::new(number_of_hours);
        geometry.measure(container_width);
        geometry
    }

    /// Record the row width in pixels. Returns whether the geometry is usable.
    pub fn measure(&mut self, container_width: f32) -> bool {
        self.hour_width = if self.number_of_hours > 0
            && container_width.is_finite()
            && container_width > 0.0
        {
            Some(container_width / f32::from(self.number_of_hours))
        } else {
            None
        };
        self.hour_width.is_some()
    }

    /// Change the column count, keeping the current row width.
    pub fn set_number_of_hours(&mut self, number_of_hours: u8) {
        let width = self.container_width();
        self.number_of_hours = number_of_hours;
        match width {
            Some(width) => {
                self.measure(width);
            }
            None => self.hour_width = None,
        }
    }

    pub fn number_of_hours(&self) -> u8 {
        self.number_of_hours
    }

    pub fn hour_width(&self) -> Option<f32> {
        self.hour_width
    }

    pub fn is_measured(&self) -> bool {
        self.hour_width.is_some()
    }

    pub fn container_width(&self) -> Option<f32> {
        self.hour_width
            .map(|w| w * f32::from(self.number_of_hours))
    }

    /// Snap a pixel delta to whole columns. Halves round away from zero,
    /// so +150px at 100px per column is +2 and -150px is -2.
    pub fn pixels_to_column_delta(&self, delta_px: f32) -> Option<i32> {
        let width = self.hour_width?;
        if !delta_px.is_finite() {
            return None;
        }
        Some((delta_px / width).round() as i32)
    }

    pub fn column_to_pixels(&self, columns: i32) -> Option<f32> {
        self.hour_width.map(|w| columns as f32 * w)
    }

    /// Period under an x offset measured from the row's left edge,
    /// clamped to the first and last period.
    pub fn period_at(&self, x: f32) -> Option<u8> {
        let width = self.hour_width?;
        if !x.is_finite() {
            return None;
        }
        let index = (x / width).floor() + 1.0;
        Some(index.clamp(1.0, f32::from(self.number_of_hours)) as u8)
    }

    /// Left edge of `period`, relative to the row.
    pub fn period_offset(&self, period: u8) -> Option<f32> {
        self.hour_width
            .map(|w| f32::from(period.saturating_sub(1)) * w)
    }

    /// Pixel width of the inclusive range `start..=end`.
    pub fn span_width(&self, start: u8, end: u8) -> Option<f32> {
        let columns = end.saturating_sub(start) + 1;
        self.hour_width.map(|w| f32::from(columns) * w)
    }
}
