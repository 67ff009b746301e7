/// UI widgets layered over the state module:
/// - Hotspot overlay canvas (hotspots.rs)
/// - Drawer with the page list and actions (drawer.rs)

pub mod drawer;
pub mod hotspots;
