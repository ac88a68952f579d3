//! Positionable shape widget: a circle that can be selected, dragged and
//! resized from eight compass handles.
//!
//! The widget is pure state. Hosts feed it pointer samples, reconcile the
//! listeners it asks for, and paint its [`ShapeView`].

mod handles;
mod state;
mod widget;

pub use handles::{Handle, HandleDirection, handles_for, hit_test_handles};
pub use state::{Cursor, DragState};
pub use widget::{ShapeView, ShapeWidget};
