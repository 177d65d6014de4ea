/// UI layer: navigation and filter panels, the record table, and the
/// statistics charts. Everything here renders from [`crate::state::AppState`]
/// and pushes widget changes back into it.

pub mod charts;
pub mod panels;
pub mod table;
