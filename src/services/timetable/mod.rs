//! Timetable grid editor core.
//!
//! Everything here is synchronous and free of I/O apart from the JSON
//! snapshot helpers; the egui view drives it one input event at a time.

pub mod collision;
pub mod editor;
pub mod geometry;
pub mod grid;
pub mod picker;
pub mod resize;
pub mod snapshot;

pub use collision::{resize_bounds, ResizeBounds};
pub use editor::{SlotChangeListener, TimetableConfig, TimetableEditor};
pub use geometry::SlotGeometry;
pub use picker::{PickerState, PointerPosition};
pub use resize::{LiveDelta, ResizeBinder, ResizeCommit, ResizeHandle};
pub use snapshot::{load_snapshot, save_snapshot, TimetableSnapshot};
