//! # RoomKit
//!
//! Interactive spatial editing engine for a contractor's 2D/3D room builder.
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Coordinate types, element identity, error taxonomy
//! 2. **roomkit-settings** - Editor preferences and their persistence
//! 3. **roomkit-designer** - Scene model, tools, history, selection, serialization
//! 4. **roomkit** - Logging setup and a command-line project inspector
//!
//! ## Features
//!
//! - **Tool-based editing**: Wall chaining, wall-hosted doors and windows, object placement
//! - **Undo/redo**: Whole-room snapshot history
//! - **Organization**: Multi-select, locking, hiding, groups and layers
//! - **Derived geometry**: Room area and perimeter, hit-testing, grid snapping
//! - **Projects**: Lenient JSON import and export

use std::fmt;

pub use roomkit_core::{DocumentError, Error, Point2D, Point3D, Result};
pub use roomkit_designer as designer;
pub use roomkit_designer::BuilderState;
pub use roomkit_settings as settings;

/// Derived facts about a loaded project, as printed by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub walls: usize,
    pub doors: usize,
    pub windows: usize,
    pub objects: usize,
    pub measurements: usize,
    pub area: f64,
    pub perimeter: f64,
}

impl ProjectSummary {
    /// Summarizes the state's current room; empty counts without a room.
    pub fn from_state(state: &BuilderState) -> Self {
        let (name, walls, doors, windows, objects) = match state.current_room() {
            Some(room) => (
                if room.name.is_empty() {
                    state.metadata.name.clone()
                } else {
                    room.name.clone()
                },
                room.walls.len(),
                room.doors.len(),
                room.windows.len(),
                room.objects.len(),
            ),
            None => (state.metadata.name.clone(), 0, 0, 0, 0),
        };
        Self {
            name,
            walls,
            doors,
            windows,
            objects,
            measurements: state.measurements().len(),
            area: state.calculate_room_area(),
            perimeter: state.calculate_room_perimeter(),
        }
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project:      {}", self.name)?;
        writeln!(f, "Walls:        {}", self.walls)?;
        writeln!(f, "Doors:        {}", self.doors)?;
        writeln!(f, "Windows:      {}", self.windows)?;
        writeln!(f, "Objects:      {}", self.objects)?;
        writeln!(f, "Measurements: {}", self.measurements)?;
        writeln!(f, "Area:         {:.2} m²", self.area)?;
        write!(f, "Perimeter:    {:.2} m", self.perimeter)
    }
}

/// Initialize logging.
///
/// Log output goes to stderr so that command output on stdout stays clean.
/// `RUST_LOG` refines the filter; INFO is always enabled.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
